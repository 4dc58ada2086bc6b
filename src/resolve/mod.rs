//! Tree resolution and dispatch.
//!
//! ```text
//! tokens → candidate word → Command::position → activate → … → Execute
//! ```
//!
//! Resolution walks the tree top-down, marking one active sub-command per
//! level. Options declared along the active path are stepped over; it stops
//! at the terminator, an undeclared option, or a word that names no
//! sub-command. Dispatch then runs the deepest command's execution
//! capability with whatever tokens remain.

mod candidate;
mod options;
mod resolver;
mod shared;

pub use candidate::is_candidate;
pub use resolver::{dispatch, resolve, DispatchError, Resolution, Resolver};
pub use shared::SharedCommand;
