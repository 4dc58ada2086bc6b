use cmdtree::{Config, ConfigError, LoggingConfig, ResolverConfig};

/// Test that Config::default() produces the expected values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.resolver.terminator, "--");
    assert_eq!(config.resolver.option_prefix, "-");
    assert_eq!(config.logging.filter, "info");
    assert!(config.validate().is_ok());
}

/// Test that Config::config_path() returns a path ending with the expected filename.
#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("cmdtree/config.toml"));
}

/// Test that missing sections fall back to defaults.
#[test]
fn test_empty_toml_uses_defaults() {
    let config = Config::from_toml_str("").unwrap();
    assert_eq!(config, Config::default());
}

/// Test partial sections keep defaults for the fields they omit.
#[test]
fn test_partial_resolver_section() {
    let config = Config::from_toml_str(
        r#"
[resolver]
option_prefix = "/"
"#,
    )
    .unwrap();

    assert_eq!(config.resolver.option_prefix, "/");
    assert_eq!(config.resolver.terminator, "--");
    assert_eq!(config.logging, LoggingConfig::default());
}

/// Test an empty terminator is accepted and disables it.
#[test]
fn test_empty_terminator_allowed() {
    let config = Config::from_toml_str(
        r#"
[resolver]
terminator = ""
"#,
    )
    .unwrap();
    assert!(config.resolver.terminator.is_empty());
}

/// Test validation fails when the option prefix is empty.
#[test]
fn test_validation_fails_empty_prefix() {
    let config = Config {
        resolver: ResolverConfig {
            terminator: "--".to_string(),
            option_prefix: String::new(),
        },
        logging: LoggingConfig::default(),
    };

    match config.validate().unwrap_err() {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("option_prefix"));
        }
        other => panic!("Expected ValidationError, got: {other:?}"),
    }
}

/// Test validation fails when the terminator equals the option prefix.
#[test]
fn test_validation_fails_terminator_equals_prefix() {
    let result = Config::from_toml_str(
        r#"
[resolver]
terminator = "-"
option_prefix = "-"
"#,
    );
    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}

/// Test loading a real file: write TOML → parse → validate.
#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[resolver]
terminator = "::"

[logging]
filter = "cmdtree=trace"
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.resolver.terminator, "::");
    assert_eq!(config.resolver.option_prefix, "-");
    assert_eq!(config.logging.filter, "cmdtree=trace");
}

/// Test a missing file is a read error, not silently defaulted.
#[test]
fn test_load_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ReadError { .. }));
    assert!(err.to_string().contains("absent.toml"), "got: {err}");
}

/// Test malformed TOML is a parse error that names the file.
#[test]
fn test_load_from_malformed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[resolver\nterminator = ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"), "got: {err}");
}

/// Test config round-trips through TOML serialization.
#[test]
fn test_serialize_then_parse() {
    let mut config = Config::default();
    config.resolver.option_prefix = "+".to_string();

    let text = toml::to_string(&config).unwrap();
    let parsed = Config::from_toml_str(&text).unwrap();
    assert_eq!(parsed, config);
}
