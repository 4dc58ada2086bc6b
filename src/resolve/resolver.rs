//! Resolver: tokens → active path → execution.

use thiserror::Error;

use crate::command::{Command, RegisterError};
use crate::config::ResolverConfig;
use crate::group::OptionDef;
use crate::handler::HandlerError;
use crate::resolve::candidate::is_candidate;
use crate::resolve::options::declared_option_width;

/// Outcome of one resolution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Command names from the root to the deepest resolved command.
    pub path: Vec<String>,
    /// Number of tokens consumed as sub-command names.
    pub consumed: usize,
    /// Tokens left for the deepest command, including any options stepped
    /// over on the way down, in their original order.
    pub remaining: Vec<String>,
    /// Candidate word that matched no sub-command, if resolution stopped on one.
    pub unmatched: Option<String>,
}

impl Resolution {
    /// Name of the deepest resolved command.
    pub fn deepest(&self) -> &str {
        self.path.last().map(String::as_str).unwrap_or_default()
    }
}

/// Errors reported by [`Resolver::dispatch`].
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Resolution stopped at a command without an execution capability.
    #[error("{}", not_executable_message(path, unmatched.as_deref()))]
    NotExecutable {
        /// Command names from the root to where resolution stopped.
        path: Vec<String>,
        /// The word that failed to match, if any.
        unmatched: Option<String>,
    },

    /// The execution capability failed; the error is passed through as-is.
    #[error(transparent)]
    Handler(HandlerError),
}

impl DispatchError {
    /// True when the failure is a resolution miss rather than a handler error.
    pub fn is_resolution_miss(&self) -> bool {
        matches!(self, DispatchError::NotExecutable { .. })
    }

    /// Take the handler's own error back out, if this is one.
    pub fn into_handler_error(self) -> Option<HandlerError> {
        match self {
            DispatchError::Handler(e) => Some(e),
            DispatchError::NotExecutable { .. } => None,
        }
    }
}

fn not_executable_message(path: &[String], unmatched: Option<&str>) -> String {
    let at = path.join(" ");
    match unmatched {
        Some(word) => format!("unknown command '{}' for '{}'", word, at),
        None => format!("no command given for '{}'", at),
    }
}

/// Walks a command tree according to a [`ResolverConfig`].
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    config: ResolverConfig,
}

impl Resolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve `args` against the tree rooted at `root`.
    ///
    /// Resolution state left by a previous pass is cleared first, so after
    /// this returns the active chain reflects `args` only.
    ///
    /// Options declared by a command already on the active path (and their
    /// values) are stepped over and kept in `remaining`; an undeclared option
    /// stops resolution.
    pub fn resolve(&self, root: &mut Command, args: &[String]) -> Resolution {
        root.reset_active();

        let mut path = vec![root.name().to_string()];
        let mut scope: Vec<OptionDef> = root.group().options().to_vec();
        let mut skipped = Vec::new();
        let mut consumed = 0;
        let mut pos = 0;
        let mut unmatched = None;
        let mut node = root;

        while let Some(token) = args.get(pos) {
            if is_candidate(token, &self.config) {
                let Some(index) = node.position(token) else {
                    tracing::trace!(command = %node.name(), token = %token, "No matching sub-command");
                    unmatched = Some(token.clone());
                    break;
                };

                tracing::trace!(command = %node.name(), child = %token, "Activated sub-command");
                node = node.activate(index);
                scope.extend_from_slice(node.group().options());
                path.push(token.clone());
                consumed += 1;
                pos += 1;
                continue;
            }

            let Some(width) = declared_option_width(args, pos, &scope, &self.config) else {
                tracing::trace!(command = %node.name(), token = %token, "Not a command word");
                break;
            };

            let end = (pos + width).min(args.len());
            tracing::trace!(command = %node.name(), option = %token, "Skipped declared option");
            skipped.extend_from_slice(&args[pos..end]);
            pos = end;
        }

        tracing::debug!(path = %path.join(" "), consumed, "Resolved command path");

        skipped.extend_from_slice(&args[pos..]);

        Resolution {
            path,
            consumed,
            remaining: skipped,
            unmatched,
        }
    }

    /// Check that every sub-command in the tree can be reached by name under
    /// this resolver's configuration.
    ///
    /// Registration only rules out names starting with `-`; a custom option
    /// prefix or terminator can make other names unreachable.
    pub fn check_tree(&self, root: &Command) -> Result<(), RegisterError> {
        let mut stack: Vec<(String, &Command)> = vec![(root.name().to_string(), root)];

        while let Some((at, command)) = stack.pop() {
            for child in command.commands() {
                let path = format!("{} {}", at, child.name());
                if !is_candidate(child.name(), &self.config) {
                    return Err(RegisterError::Unreachable { path });
                }
                stack.push((path, child));
            }
        }

        Ok(())
    }

    /// Resolve `args`, then run the deepest command with the remaining tokens.
    ///
    /// Only the deepest command is executed, never its ancestors.
    ///
    /// # Errors
    /// - [`DispatchError::NotExecutable`] if the deepest command has no
    ///   execution capability.
    /// - [`DispatchError::Handler`] carrying the handler's error unchanged.
    pub fn dispatch(
        &self,
        root: &mut Command,
        args: &[String],
    ) -> Result<Resolution, DispatchError> {
        let resolution = self.resolve(root, args);

        let Some(exec) = root.deepest_active_mut().handler_mut().as_execute() else {
            return Err(DispatchError::NotExecutable {
                path: resolution.path,
                unmatched: resolution.unmatched,
            });
        };

        exec.execute(&resolution.remaining).map_err(DispatchError::Handler)?;

        Ok(resolution)
    }
}

/// [`Resolver::resolve`] with the default configuration.
pub fn resolve(root: &mut Command, args: &[String]) -> Resolution {
    Resolver::default().resolve(root, args)
}

/// [`Resolver::dispatch`] with the default configuration.
pub fn dispatch(root: &mut Command, args: &[String]) -> Result<Resolution, DispatchError> {
    Resolver::default().dispatch(root, args)
}
