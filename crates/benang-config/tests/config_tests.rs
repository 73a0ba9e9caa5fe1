// SPDX-FileCopyrightText: 2026 Benang Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the benang configuration system.

use benang_config::diagnostic::ConfigError;
use benang_config::{load_and_validate_str, load_config, load_config_from_str};
use figment::Jail;

const REAL_LOOKING_KEY: &str = "AIzaSyD-3xAmPlEkEy0123456789abcdefGHIJ";

#[test]
fn full_toml_deserializes() {
    let toml = r#"
[agent]
name = "sia-garmen"
log_level = "debug"

[gemini]
api_key = "AIzaSyD-3xAmPlEkEy0123456789abcdefGHIJ"
model = "gemini-2.5-pro"
base_url = "http://localhost:8080"
timeout_secs = 10
max_retries = 0

[shell]
history_limit = 50
show_reasoning = false
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.agent.name, "sia-garmen");
    assert_eq!(config.agent.log_level, "debug");
    assert_eq!(config.gemini.model, "gemini-2.5-pro");
    assert_eq!(config.gemini.base_url, "http://localhost:8080");
    assert_eq!(config.gemini.timeout_secs, 10);
    assert_eq!(config.gemini.max_retries, 0);
    assert_eq!(config.shell.history_limit, 50);
    assert!(!config.shell.show_reasoning);
    assert!(config.gemini.credential_state().is_present());
}

#[test]
fn empty_toml_uses_defaults() {
    let config = load_config_from_str("").unwrap();
    assert_eq!(config.agent.name, "benang");
    assert_eq!(config.gemini.model, "gemini-2.5-flash");
    assert_eq!(config.gemini.base_url, "https://generativelanguage.googleapis.com");
    assert_eq!(config.shell.history_limit, 200);
    assert_eq!(config.gemini.credential_state().describe(), "absent");
}

#[test]
fn unknown_key_is_rejected_with_suggestion() {
    let errors = load_and_validate_str("[gemini]\napi_kye = \"x\"\n").unwrap_err();
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        ConfigError::UnknownKey { key, suggestion, .. } => {
            assert_eq!(key, "api_kye");
            assert_eq!(suggestion.as_deref(), Some("api_key"));
        }
        other => panic!("expected UnknownKey, got {other:?}"),
    }
}

#[test]
fn unknown_section_is_rejected() {
    let errors = load_and_validate_str("[telegram]\nbot_token = \"x\"\n").unwrap_err();
    assert!(matches!(errors[0], ConfigError::UnknownKey { .. }));
}

#[test]
fn wrong_type_is_reported() {
    let errors = load_and_validate_str("[gemini]\ntimeout_secs = \"soon\"\n").unwrap_err();
    match &errors[0] {
        ConfigError::InvalidType { key, .. } => assert!(key.contains("timeout_secs"), "{key}"),
        other => panic!("expected InvalidType, got {other:?}"),
    }
}

#[test]
fn validation_errors_surface_through_load_and_validate() {
    let errors = load_and_validate_str("[gemini]\ntimeout_secs = 0\n").unwrap_err();
    assert!(matches!(errors[0], ConfigError::Validation { .. }));
}

#[test]
fn placeholder_key_loads_but_is_not_usable() {
    let config = load_and_validate_str("[gemini]\napi_key = \"YOUR_API_KEY\"\n").unwrap();
    assert_eq!(config.gemini.credential_state().describe(), "placeholder");
}

#[test]
fn prefixed_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.create_file("benang.toml", "[gemini]\nmodel = \"from-file\"\n")?;
        jail.set_env("BENANG_GEMINI_MODEL", "from-env");
        jail.set_env("BENANG_AGENT_LOG_LEVEL", "warn");

        let config = load_config()?;
        assert_eq!(config.gemini.model, "from-env");
        assert_eq!(config.agent.log_level, "warn");
        Ok(())
    });
}

#[test]
fn bare_api_key_env_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("API_KEY", REAL_LOOKING_KEY);

        let config = load_config()?;
        assert_eq!(config.gemini.api_key.as_deref(), Some(REAL_LOOKING_KEY));
        Ok(())
    });
}

#[test]
fn gemini_api_key_beats_api_key_and_prefixed_beats_both() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("API_KEY", "first-AIzaSyD-0000000000000000");
        jail.set_env("GEMINI_API_KEY", "second-AIzaSyD-000000000000000");

        let config = load_config()?;
        assert_eq!(
            config.gemini.api_key.as_deref(),
            Some("second-AIzaSyD-000000000000000")
        );

        jail.set_env("BENANG_GEMINI_API_KEY", REAL_LOOKING_KEY);
        let config = load_config()?;
        assert_eq!(config.gemini.api_key.as_deref(), Some(REAL_LOOKING_KEY));
        Ok(())
    });
}
