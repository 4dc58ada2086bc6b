//! The command tree.
//!
//! Each [`Command`] owns its option group, its handler and its children.
//! Resolution state (`active`) is an index into the children, so ownership
//! stays strictly root-to-leaf.

mod chain;
mod error;
mod node;

pub use chain::ActiveChain;
pub use error::RegisterError;
pub use node::Command;
