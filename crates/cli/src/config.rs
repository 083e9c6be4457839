//! CLI configuration
//!
//! Settings are resolved in layers, each overriding the previous one:
//! built-in defaults, the JSON config file, `MOKE_*` environment variables,
//! and finally command-line flags.

use anyhow::{Context, Result};
use moke_crypto::{Language, Strength};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable for home directory override.
///
/// When set, this environment variable takes precedence over the default
/// home directory (`~/.moke`).
///
/// # Example
///
/// ```bash
/// export MOKE_HOME=/custom/path/moke
/// moke config show
/// ```
pub const MOKE_HOME_ENV: &str = "MOKE_HOME";

/// Environment variable overriding the default wordlist language.
pub const MOKE_LANGUAGE_ENV: &str = "MOKE_LANGUAGE";

/// Environment variable overriding the default entropy size in bits.
pub const MOKE_ENTROPY_BITS_ENV: &str = "MOKE_ENTROPY_BITS";

/// Default home directory name (relative to user's home directory).
///
/// The full default path is `~/.moke`.
pub const DEFAULT_HOME_DIR: &str = ".moke";

/// Config filename within the home directory.
pub const CONFIG_FILENAME: &str = "config.json";

/// Exit code for configuration errors requiring user action.
///
/// Follows sysexits.h `EX_CONFIG`.
pub const EXIT_CONFIG_ERROR: i32 = 78;

/// Persistent CLI settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MokeConfig {
    /// Wordlist language used when a command has no `--language`
    pub language: Language,
    /// Entropy size used by `generate` when no `--bits` is given
    pub entropy_bits: Strength,
    /// The logging level (trace|debug|info|warn|error)
    pub log_level: String,
    /// The logging format (json|plain)
    pub log_format: String,
}

impl Default for MokeConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            entropy_bits: Strength::default(),
            log_level: "warn".to_string(),
            log_format: "plain".to_string(),
        }
    }
}

impl MokeConfig {
    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Load config from file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&json)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(config)
    }

    /// Load the config at `path`, or the defaults if it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply `MOKE_*` overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `MOKE_*` overrides read through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(MOKE_LANGUAGE_ENV) {
            self.language = value
                .parse()
                .with_context(|| format!("Invalid {}: {:?}", MOKE_LANGUAGE_ENV, value))?;
        }
        if let Some(value) = lookup(MOKE_ENTROPY_BITS_ENV) {
            self.entropy_bits = value
                .parse()
                .with_context(|| format!("Invalid {}: {:?}", MOKE_ENTROPY_BITS_ENV, value))?;
        }
        Ok(())
    }
}

/// Default home directory: `$MOKE_HOME`, else `~/.moke`
pub fn default_home_dir() -> PathBuf {
    if let Ok(home) = std::env::var(MOKE_HOME_ENV) {
        return PathBuf::from(home);
    }

    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_HOME_DIR)
}

/// Config file path: explicit `--config`, else `{home}/config.json`
pub fn resolve_config_path(home: &Path, config: Option<&Path>) -> PathBuf {
    config
        .map(Path::to_path_buf)
        .unwrap_or_else(|| home.join(CONFIG_FILENAME))
}
