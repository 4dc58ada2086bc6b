use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub resolver: ResolverConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Rules for picking sub-command words out of the token stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Token that ends sub-command resolution (default: "--").
    /// An empty string disables it.
    #[serde(default = "default_terminator")]
    pub terminator: String,
    /// Tokens starting with this prefix are options, not command words
    /// (default: "-").
    #[serde(default = "default_option_prefix")]
    pub option_prefix: String,
}

/// Logging settings for the binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_terminator() -> String {
    "--".to_string()
}

fn default_option_prefix() -> String {
    "-".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            terminator: default_terminator(),
            option_prefix: default_option_prefix(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}
