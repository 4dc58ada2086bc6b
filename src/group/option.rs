//! Option metadata declared by a handler.

/// Whether an option takes a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Arity {
    /// Boolean switch (e.g., --verbose).
    #[default]
    NoValue,
    /// Requires exactly one value (e.g., --port <PORT>).
    RequiresValue,
    /// Value may be present or absent (e.g., --color [WHEN]).
    OptionalValue,
}

/// A single declared option.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OptionDef {
    /// Long name without the leading dashes (e.g., "port").
    pub long: Option<String>,
    /// Short name (e.g., 'p').
    pub short: Option<char>,
    /// Does it take a value?
    pub arity: Arity,
    /// Human-readable description.
    pub description: String,
    /// Whether the option must be supplied.
    pub required: bool,
}

impl OptionDef {
    /// Option with a long name.
    pub fn long(name: impl Into<String>) -> Self {
        Self {
            long: Some(name.into()),
            ..Self::default()
        }
    }

    /// Option with only a short name.
    pub fn short_only(short: char) -> Self {
        Self {
            short: Some(short),
            ..Self::default()
        }
    }

    pub fn short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    /// Mark the option as taking a required value.
    pub fn value(mut self) -> Self {
        self.arity = Arity::RequiresValue;
        self
    }

    /// Mark the option as taking an optional value.
    pub fn optional_value(mut self) -> Self {
        self.arity = Arity::OptionalValue;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Check if this definition answers to the given long name.
    pub fn matches_long(&self, name: &str) -> bool {
        self.long.as_deref() == Some(name)
    }

    /// Check if this definition answers to the given short name.
    pub fn matches_short(&self, short: char) -> bool {
        self.short == Some(short)
    }

    /// Display label used in error messages (e.g., "--port" or "-p").
    pub fn label(&self) -> String {
        match (&self.long, self.short) {
            (Some(long), _) => format!("--{}", long),
            (None, Some(short)) => format!("-{}", short),
            (None, None) => "<unnamed>".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let def = OptionDef::long("port")
            .short('p')
            .value()
            .description("Port to bind")
            .required();

        assert!(def.matches_long("port"));
        assert!(def.matches_short('p'));
        assert_eq!(def.arity, Arity::RequiresValue);
        assert!(def.required);
        assert_eq!(def.label(), "--port");
    }

    #[test]
    fn short_only_label() {
        assert_eq!(OptionDef::short_only('v').label(), "-v");
        assert_eq!(OptionDef::default().label(), "<unnamed>");
    }
}
