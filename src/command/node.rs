//! Command node: registration, lookup and resolution state.

use std::fmt;

use crate::command::chain::ActiveChain;
use crate::command::error::RegisterError;
use crate::group::{OptionDef, OptionGroup};
use crate::handler::Handler;

/// One point in the sub-command hierarchy.
pub struct Command {
    name: String,
    group: OptionGroup,
    children: Vec<Command>,
    /// Index into `children` of the sub-command selected by the last
    /// resolution pass.
    active: Option<usize>,
    /// Whether the handler answered the execute capability query at
    /// registration.
    executable: bool,
    handler: Box<dyn Handler>,
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("group", &self.group)
            .field("children", &self.children)
            .field("active", &self.active)
            .field("executable", &self.executable)
            .finish_non_exhaustive()
    }
}

impl Command {
    /// Create the root of a command tree.
    ///
    /// The root's handler is scanned like any other; it usually carries the
    /// application-wide options.
    pub fn root(
        name: impl Into<String>,
        handler: impl Handler + 'static,
    ) -> Result<Self, RegisterError> {
        Self::build(name.into(), String::new(), String::new(), Box::new(handler))
    }

    fn build(
        name: String,
        short_description: String,
        long_description: String,
        mut handler: Box<dyn Handler>,
    ) -> Result<Self, RegisterError> {
        let group = OptionGroup::scan(short_description, long_description, &*handler)?;
        let executable = handler.as_execute().is_some();

        Ok(Self {
            name,
            group,
            children: Vec::new(),
            active: None,
            executable,
            handler,
        })
    }

    /// Register a sub-command under this command and return it.
    ///
    /// The handler's options are scanned before anything is attached, so a
    /// failed registration leaves this command's children unchanged.
    ///
    /// # Errors
    /// - [`RegisterError::InvalidName`] if `name` could never be matched as a
    ///   bare word (empty, whitespace, leading `-`). Names that clash with a
    ///   custom option prefix or terminator are caught by
    ///   [`Resolver::check_tree`](crate::Resolver::check_tree).
    /// - [`RegisterError::DuplicateName`] if a sibling already uses `name`.
    /// - [`RegisterError::Scan`] if the handler's option declarations are malformed.
    pub fn add_command(
        &mut self,
        name: impl Into<String>,
        short_description: impl Into<String>,
        long_description: impl Into<String>,
        handler: impl Handler + 'static,
    ) -> Result<&mut Command, RegisterError> {
        let name = name.into();
        validate_name(&name)?;

        if self.find(&name).is_some() {
            return Err(RegisterError::DuplicateName {
                parent: self.name.clone(),
                name,
            });
        }

        let command = Self::build(
            name,
            short_description.into(),
            long_description.into(),
            Box::new(handler),
        )?;

        tracing::debug!(
            parent = %self.name,
            command = %command.name,
            options = command.group.options().len(),
            "Registered command"
        );

        self.children.push(command);
        let index = self.children.len() - 1;
        Ok(&mut self.children[index])
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn short_description(&self) -> &str {
        self.group.short_description()
    }

    pub fn long_description(&self) -> &str {
        self.group.long_description()
    }

    /// Sub-commands in registration order.
    pub fn commands(&self) -> &[Command] {
        &self.children
    }

    /// Locate the sub-command with the given name.
    ///
    /// Scans children in registration order and returns the first match.
    /// Never touches resolution state.
    pub fn find(&self, name: &str) -> Option<&Command> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Command> {
        self.children.iter_mut().find(|c| c.name == name)
    }

    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        self.children.iter().position(|c| c.name == name)
    }

    pub fn group(&self) -> &OptionGroup {
        &self.group
    }

    /// Look up one of this command's own options by long name.
    pub fn find_long(&self, name: &str) -> Option<&OptionDef> {
        self.group.find_long(name)
    }

    /// Look up one of this command's own options by short name.
    pub fn find_short(&self, short: char) -> Option<&OptionDef> {
        self.group.find_short(short)
    }

    /// Custom usage line, if the handler provides one.
    pub fn usage(&self) -> Option<String> {
        self.handler.as_usage().map(|u| u.usage())
    }

    /// Whether this command has an execution capability.
    ///
    /// Answered once at registration; a handler's capabilities are expected
    /// to be fixed for its lifetime.
    pub fn is_executable(&self) -> bool {
        self.executable
    }

    pub(crate) fn handler_mut(&mut self) -> &mut dyn Handler {
        self.handler.as_mut()
    }

    // ---------------------------------------------------------------------
    // Resolution state
    // ---------------------------------------------------------------------

    /// The sub-command selected by the last resolution pass.
    pub fn active(&self) -> Option<&Command> {
        self.active.and_then(|i| self.children.get(i))
    }

    pub fn active_name(&self) -> Option<&str> {
        self.active().map(Command::name)
    }

    /// This command followed by its active descendants, deepest last.
    pub fn active_chain(&self) -> ActiveChain<'_> {
        ActiveChain::new(self)
    }

    /// Names along the active chain, starting with this command.
    pub fn active_path(&self) -> Vec<&str> {
        self.active_chain().map(Command::name).collect()
    }

    /// The deepest command reached through the active chain.
    pub fn deepest_active(&self) -> &Command {
        // The chain always yields at least `self`.
        self.active_chain().last().unwrap_or(self)
    }

    pub(crate) fn deepest_active_mut(&mut self) -> &mut Command {
        match self.active {
            Some(i) if i < self.children.len() => self.children[i].deepest_active_mut(),
            _ => self,
        }
    }

    pub(crate) fn activate(&mut self, index: usize) -> &mut Command {
        self.active = Some(index);
        &mut self.children[index]
    }

    /// Clear resolution state on this command and its whole subtree.
    pub fn reset_active(&mut self) {
        self.active = None;
        for child in &mut self.children {
            child.reset_active();
        }
    }
}

fn validate_name(name: &str) -> Result<(), RegisterError> {
    let reason = if name.is_empty() {
        "must not be empty"
    } else if name.starts_with('-') {
        "must not start with '-'"
    } else if name.chars().any(char::is_whitespace) {
        "must not contain whitespace"
    } else {
        return Ok(());
    };

    Err(RegisterError::InvalidName {
        name: name.to_string(),
        reason,
    })
}
