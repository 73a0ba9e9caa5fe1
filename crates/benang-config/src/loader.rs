// SPDX-FileCopyrightText: 2026 Benang Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered configuration loading with Figment.
//!
//! Lookup: `./benang.toml` > `~/.config/benang/benang.toml` > `/etc/benang/benang.toml`,
//! then environment overrides.

#![allow(clippy::result_large_err)]

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};

use crate::model::BenangConfig;

/// System-wide config file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/benang/benang.toml";

/// Config file in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "benang.toml";

/// Per-user config file under the XDG config directory.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("benang").join("benang.toml"))
}

/// Load configuration from the standard hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/benang/benang.toml`
/// 3. `~/.config/benang/benang.toml`
/// 4. `./benang.toml`
/// 5. `API_KEY`, then `GEMINI_API_KEY`
/// 6. `BENANG_*` environment variables
pub fn load_config() -> Result<BenangConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no files, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<BenangConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(BenangConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from an explicit file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<BenangConfig, figment::Error> {
    with_env(
        Figment::new()
            .merge(Serialized::defaults(BenangConfig::default()))
            .merge(Toml::file(path)),
    )
    .extract()
}

/// The full Figment before extraction, for callers that inspect metadata.
pub fn build_figment() -> Figment {
    with_env(
        Figment::new()
            .merge(Serialized::defaults(BenangConfig::default()))
            .merge(Toml::file(SYSTEM_CONFIG_PATH))
            .merge(Toml::file(user_config_path().unwrap_or_default()))
            .merge(Toml::file(LOCAL_CONFIG_FILE)),
    )
}

fn with_env(figment: Figment) -> Figment {
    figment
        .merge(bare_key_provider("API_KEY"))
        .merge(bare_key_provider("GEMINI_API_KEY"))
        .merge(env_provider())
}

/// Maps a single unprefixed variable onto `gemini.api_key`.
fn bare_key_provider(var: &'static str) -> Env {
    Env::raw().only(&[var]).map(|_| "gemini.api_key".into())
}

/// `BENANG_` provider with explicit section mapping.
///
/// Uses `map()` rather than `split("_")`: `BENANG_GEMINI_API_KEY` must land on
/// `gemini.api_key`, not `gemini.api.key`.
fn env_provider() -> Env {
    Env::prefixed("BENANG_").map(|key| {
        key.as_str()
            .to_ascii_lowercase()
            .replacen("agent_", "agent.", 1)
            .replacen("gemini_", "gemini.", 1)
            .replacen("shell_", "shell.", 1)
            .into()
    })
}
