//! Client settings.
//!
//! Stored at `~/.config/gendex/settings.toml`. Environment variables
//! override the file, and CLI flags override both:
//! flag > `GENDEX_API_URL` / `GENDEX_MAX_IN_FLIGHT` > file > default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::client::DEFAULT_BASE_URL;
use crate::error::ApiError;

/// Default width of the detail fan-out during a roster load.
pub const DEFAULT_MAX_IN_FLIGHT: usize = 8;

/// Persistent client settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// API root URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Maximum concurrent detail requests during a roster load.
    #[serde(default = "default_max_in_flight")]
    pub max_in_flight: usize,
}

fn default_api_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_max_in_flight() -> usize {
    DEFAULT_MAX_IN_FLIGHT
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            max_in_flight: default_max_in_flight(),
        }
    }
}

/// Path to the settings file, `~/.config/gendex/settings.toml`.
pub fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("gendex").join("settings.toml"))
}

/// Where a settings field's value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingSource {
    /// Loaded from an environment variable.
    EnvVar(&'static str),
    /// Loaded from the config file.
    ConfigFile,
    /// Built-in default value.
    Default,
}

impl std::fmt::Display for SettingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// Provenance of each settings field.
#[derive(Debug)]
pub struct SettingSources {
    pub api_url: SettingSource,
    pub max_in_flight: SettingSource,
}

/// Determine where each settings field is coming from.
///
/// Matches the precedence `load` applies: an env var counts only when
/// `apply_env` would accept it. CLI flag overrides happen after loading
/// and are reported by the frontend itself.
pub fn setting_sources() -> SettingSources {
    let file_table = settings_path()
        .and_then(|p| std::fs::read_to_string(p).ok())
        .and_then(|contents| contents.parse::<toml::Table>().ok());

    let api_url = if std::env::var("GENDEX_API_URL").is_ok_and(|v| !v.is_empty()) {
        SettingSource::EnvVar("GENDEX_API_URL")
    } else if file_table.as_ref().is_some_and(|t| t.contains_key("api_url")) {
        SettingSource::ConfigFile
    } else {
        SettingSource::Default
    };

    let max_in_flight = if std::env::var("GENDEX_MAX_IN_FLIGHT")
        .is_ok_and(|v| v.parse::<usize>().is_ok_and(|n| n > 0))
    {
        SettingSource::EnvVar("GENDEX_MAX_IN_FLIGHT")
    } else if file_table
        .as_ref()
        .is_some_and(|t| t.contains_key("max_in_flight"))
    {
        SettingSource::ConfigFile
    } else {
        SettingSource::Default
    };

    SettingSources {
        api_url,
        max_in_flight,
    }
}

impl Settings {
    /// Load settings from the config file and environment.
    ///
    /// A missing file yields the defaults; a malformed one is logged and
    /// ignored rather than failing startup.
    pub fn load() -> Self {
        let from_file = settings_path()
            .and_then(|p| Self::from_file(&p))
            .unwrap_or_default();
        from_file.apply_env()
    }

    /// Read settings from a specific file, without environment overrides.
    pub fn from_file(path: &Path) -> Option<Self> {
        let contents = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&contents) {
            Ok(settings) => Some(settings),
            Err(e) => {
                log::warn!("Ignoring malformed settings file {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Apply `GENDEX_*` environment overrides on top of these settings.
    pub fn apply_env(mut self) -> Self {
        if let Ok(url) = std::env::var("GENDEX_API_URL") {
            if !url.is_empty() {
                self.api_url = url;
            }
        }
        if let Ok(raw) = std::env::var("GENDEX_MAX_IN_FLIGHT") {
            match raw.parse::<usize>() {
                Ok(n) if n > 0 => self.max_in_flight = n,
                _ => log::warn!("Ignoring invalid GENDEX_MAX_IN_FLIGHT value '{}'", raw),
            }
        }
        self
    }

    /// Apply explicit overrides (CLI flags) on top of these settings.
    pub fn with_overrides(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url {
            self.api_url = url;
        }
        self
    }

    /// Save to the default settings file, creating parent directories.
    /// Returns the path the file was written to.
    pub fn save(&self) -> Result<PathBuf, ApiError> {
        let path = settings_path()
            .ok_or_else(|| ApiError::Config("Could not determine config directory".to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        self.save_to(&path)?;
        Ok(path)
    }

    /// Write the settings file via a temp file + rename so a crash never
    /// leaves a half-written config behind.
    pub fn save_to(&self, path: &Path) -> Result<(), ApiError> {
        let toml_str = toml::to_string_pretty(self)
            .map_err(|e| ApiError::Config(format!("Failed to serialize settings: {}", e)))?;
        let tmp = path.with_extension("toml.tmp");
        std::fs::write(&tmp, toml_str)?;
        std::fs::rename(&tmp, path)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
