//! Configuration tests

use super::*;
use crate::form::{FieldValue, FormError, WidgetKind, REQUIRED_MESSAGE};

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed = Config::parse_file_config(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    // Defaults are written as comments, so no fields come back
    let file = parsed.unwrap();
    assert!(file.fields.is_empty());
    assert_eq!(file.title.as_deref(), Some("Form"));
}

#[test]
fn test_config_roundtrip_with_fields() {
    let mut config = Config::default();
    config.title = "Sign \"up\"".to_string();
    config.logging.file_rotation = LogRotation::Hourly;
    config.fields = vec![
        FieldSpec {
            name: "Plan".to_string(),
            kind: "Select".to_string(),
            label: Some("Pick a plan".to_string()),
            required: true,
            options: Some(vec!["Free".to_string(), "Pro".to_string()]),
            checkbox_text: None,
        },
        FieldSpec {
            name: "Terms".to_string(),
            kind: "Checkbox".to_string(),
            label: None,
            required: false,
            options: None,
            checkbox_text: Some("I agree".to_string()),
        },
    ];

    let toml_str = config.to_toml();
    let file = Config::parse_file_config(&toml_str)
        .unwrap_or_else(|e| panic!("TOML:\n{}\nError: {}", toml_str, e));
    let reloaded = Config::from_file(file);

    assert_eq!(reloaded.title, config.title);
    assert_eq!(reloaded.fields, config.fields);
    assert_eq!(reloaded.logging.file_rotation, LogRotation::Hourly);
}

// ─────────────────────────────────────────────────────────────────────────────
// Field loading
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_fields_use_defaults() {
    let fields = Config::default().form_fields().unwrap();
    let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Text 1", "Number 1", "Select 1", "Checkbox 1"]);
    assert!(fields[3].validator.is_none());
    assert_eq!(fields[3].props.checkbox_text(), "Checkbox");
}

#[test]
fn test_fields_from_file() {
    let file = Config::parse_file_config(
        r#"
[[fields]]
name = "Email"
kind = "Text"
required = true

[[fields]]
name = "Size"
kind = "Select"
options = ["S", "M", "L"]
"#,
    )
    .unwrap();
    let fields = Config::from_file(file).form_fields().unwrap();

    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0].kind, WidgetKind::Text);
    assert_eq!(
        fields[0]
            .validator
            .as_ref()
            .unwrap()
            .check(&FieldValue::text("")),
        Some(REQUIRED_MESSAGE.to_string())
    );
    assert_eq!(fields[1].props.select_options(), vec!["S", "M", "L"]);
    assert!(fields[1].validator.is_none());
}

#[test]
fn test_unknown_kind_is_an_error() {
    let file = Config::parse_file_config(
        r#"
[[fields]]
name = "When"
kind = "Date"
"#,
    )
    .unwrap();

    assert_eq!(
        Config::from_file(file).form_fields().unwrap_err(),
        FormError::UnknownWidgetKind("Date".to_string())
    );
}

#[test]
fn test_duplicate_field_name_is_an_error() {
    let file = Config::parse_file_config(
        r#"
[[fields]]
name = "a"
kind = "Text"

[[fields]]
name = "b"
kind = "Checkbox"

[[fields]]
name = "a"
kind = "Number"
"#,
    )
    .unwrap();

    assert_eq!(
        Config::from_file(file).form_fields().unwrap_err(),
        FormError::DuplicateName("a".to_string())
    );
}

#[test]
fn test_field_without_kind_fails_to_parse() {
    assert!(Config::parse_file_config("[[fields]]\nname = \"x\"\n").is_err());
}

// ─────────────────────────────────────────────────────────────────────────────
// Logging section
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_logging_defaults_and_overrides() {
    let defaults = LoggingConfig::from_file(None);
    assert_eq!(defaults.level, "info");
    assert!(!defaults.file_enabled);
    assert_eq!(defaults.file_prefix, "formdeck");

    let file = Config::parse_file_config(
        r#"
[logging]
level = "debug"
file_enabled = true
file_rotation = "never"
"#,
    )
    .unwrap();
    let logging = Config::from_file(file).logging;
    assert_eq!(logging.level, "debug");
    assert!(logging.file_enabled);
    assert_eq!(logging.file_rotation, LogRotation::Never);
}

#[test]
fn test_rotation_parse_falls_back_to_daily() {
    assert_eq!(LogRotation::parse("HOURLY"), LogRotation::Hourly);
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
}
