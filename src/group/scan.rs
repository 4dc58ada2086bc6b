//! Scanning a handler's declared options into a validated group.

use std::collections::HashSet;

use thiserror::Error;

use crate::group::option::OptionDef;
use crate::handler::Handler;

/// Errors produced while scanning declared options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("option #{index} has neither a long nor a short name")]
    Unnamed { index: usize },

    #[error("invalid long option name '{name}': {reason}")]
    InvalidLong { name: String, reason: &'static str },

    #[error("invalid short option name '{short}': must be an ASCII letter or digit")]
    InvalidShort { short: char },

    #[error("duplicate long option '--{name}'")]
    DuplicateLong { name: String },

    #[error("duplicate short option '-{short}'")]
    DuplicateShort { short: char },
}

/// The validated options of one command node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionGroup {
    short_description: String,
    long_description: String,
    options: Vec<OptionDef>,
}

impl OptionGroup {
    /// Collect and validate the options declared by `handler`.
    ///
    /// Fails on the first malformed or duplicated declaration.
    pub fn scan(
        short_description: impl Into<String>,
        long_description: impl Into<String>,
        handler: &dyn Handler,
    ) -> Result<Self, ScanError> {
        let options = handler.options();

        let mut longs = HashSet::new();
        let mut shorts = HashSet::new();

        for (index, def) in options.iter().enumerate() {
            if def.long.is_none() && def.short.is_none() {
                return Err(ScanError::Unnamed { index });
            }

            if let Some(long) = &def.long {
                validate_long(long)?;
                if !longs.insert(long.as_str()) {
                    return Err(ScanError::DuplicateLong { name: long.clone() });
                }
            }

            if let Some(short) = def.short {
                if !short.is_ascii_alphanumeric() {
                    return Err(ScanError::InvalidShort { short });
                }
                if !shorts.insert(short) {
                    return Err(ScanError::DuplicateShort { short });
                }
            }
        }

        Ok(Self {
            short_description: short_description.into(),
            long_description: long_description.into(),
            options,
        })
    }

    pub fn short_description(&self) -> &str {
        &self.short_description
    }

    pub fn long_description(&self) -> &str {
        &self.long_description
    }

    /// Declared options in declaration order.
    pub fn options(&self) -> &[OptionDef] {
        &self.options
    }

    /// Look up an option by long name (without dashes).
    pub fn find_long(&self, name: &str) -> Option<&OptionDef> {
        self.options.iter().find(|d| d.matches_long(name))
    }

    /// Look up an option by short name.
    pub fn find_short(&self, short: char) -> Option<&OptionDef> {
        self.options.iter().find(|d| d.matches_short(short))
    }
}

fn validate_long(name: &str) -> Result<(), ScanError> {
    let reason = if name.is_empty() {
        "must not be empty"
    } else if name.starts_with('-') {
        "must be given without leading dashes"
    } else if name.contains('=') {
        "must not contain '='"
    } else if name.chars().any(char::is_whitespace) {
        "must not contain whitespace"
    } else {
        return Ok(());
    };

    Err(ScanError::InvalidLong {
        name: name.to_string(),
        reason,
    })
}
