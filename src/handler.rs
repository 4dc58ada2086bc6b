//! Handler capability set.
//!
//! A handler is the user data a command node is registered with. The node
//! never assumes anything about it beyond the [`Handler`] trait: options are
//! declared through [`Handler::options`], and the two optional capabilities
//! ([`Execute`] and [`Usage`]) are discovered through capability queries at
//! the call sites that need them.

use crate::group::OptionDef;

/// Opaque failure produced by an execution capability.
///
/// The core forwards it to the caller untouched.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// User-supplied data attached to a command node.
pub trait Handler: Send {
    /// Declared options for this command, scanned once at registration.
    fn options(&self) -> Vec<OptionDef> {
        Vec::new()
    }

    /// Capability query for [`Execute`].
    fn as_execute(&mut self) -> Option<&mut dyn Execute> {
        None
    }

    /// Capability query for [`Usage`].
    fn as_usage(&self) -> Option<&dyn Usage> {
        None
    }
}

/// Execution capability.
///
/// Called at most once per dispatch, only on the deepest resolved command,
/// with the tokens left unconsumed by resolution.
pub trait Execute {
    fn execute(&mut self, args: &[String]) -> Result<(), HandlerError>;
}

/// Custom-usage capability: a one-line usage string overriding the one a
/// help formatter would synthesize from declared options.
pub trait Usage {
    fn usage(&self) -> String;
}

/// Pure grouping handler: no options, no capabilities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Group;

impl Handler for Group {}

/// Handler backed by a closure. Convenient for small trees and tests.
pub struct FnHandler<F> {
    options: Vec<OptionDef>,
    run: F,
}

impl<F> FnHandler<F>
where
    F: FnMut(&[String]) -> Result<(), HandlerError> + Send,
{
    pub fn new(run: F) -> Self {
        Self {
            options: Vec::new(),
            run,
        }
    }

    /// Attach declared options.
    pub fn with_options(mut self, options: Vec<OptionDef>) -> Self {
        self.options = options;
        self
    }
}

impl<F> Execute for FnHandler<F>
where
    F: FnMut(&[String]) -> Result<(), HandlerError> + Send,
{
    fn execute(&mut self, args: &[String]) -> Result<(), HandlerError> {
        (self.run)(args)
    }
}

impl<F> Handler for FnHandler<F>
where
    F: FnMut(&[String]) -> Result<(), HandlerError> + Send,
{
    fn options(&self) -> Vec<OptionDef> {
        self.options.clone()
    }

    fn as_execute(&mut self) -> Option<&mut dyn Execute> {
        Some(self)
    }
}
