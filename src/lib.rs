//! Command-tree model and dispatch for command-line parsers.
//!
//! ```text
//! argv → Resolver::resolve (walk sub-commands, mark active path)
//!      → deepest Command → Execute::execute(remaining args)
//! ```
//!
//! Option syntax, value validation and help rendering belong to the parser
//! built on top of this crate; here a tree only knows which options each
//! command declares and which path the last resolution pass took.

pub mod command;
pub mod config;
pub mod group;
pub mod handler;
pub mod logging;
pub mod resolve;

pub use command::{ActiveChain, Command, RegisterError};
pub use config::{Config, ConfigError, LoggingConfig, ResolverConfig};
pub use group::{Arity, OptionDef, OptionGroup, ScanError};
pub use handler::{Execute, FnHandler, Group, Handler, HandlerError, Usage};
pub use resolve::{dispatch, resolve, DispatchError, Resolution, Resolver, SharedCommand};
