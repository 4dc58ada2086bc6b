//! Configuration: resolver rules and logging, loaded from TOML.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, LoggingConfig, ResolverConfig};
