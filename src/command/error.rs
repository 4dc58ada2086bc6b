//! Registration errors.

use thiserror::Error;

use crate::group::ScanError;

/// Errors that can occur when registering a command.
///
/// On any registration error the parent's children are left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    /// Option scanning failed; the scan error is passed through verbatim.
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error("command '{parent}' already has a sub-command named '{name}'")]
    DuplicateName { parent: String, name: String },

    #[error("invalid command name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    /// The name is valid but the resolver would never treat it as a
    /// command word (it starts with the option prefix or is the terminator).
    #[error("command '{path}' can never be matched with the current resolver config")]
    Unreachable { path: String },
}
