use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::brace_to_set::{BraceToSet, DEFAULT_BANNER_MARKERS};
use crate::source::InputMode;

/// Tool settings, read from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Input mode used when the command line does not name one.
    #[serde(default)]
    pub mode: InputMode,
    #[serde(default)]
    pub brace: BraceSettings,
}

/// Settings for the brace-to-set converter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BraceSettings {
    #[serde(default = "default_banner_markers")]
    pub banner_markers: Vec<String>,
}

impl Default for BraceSettings {
    fn default() -> Self {
        Self {
            banner_markers: default_banner_markers(),
        }
    }
}

impl Settings {
    /// Build the brace converter these settings describe.
    pub fn brace_converter(&self) -> BraceToSet {
        BraceToSet::with_banner_markers(self.brace.banner_markers.iter().cloned())
    }
}

/// Errors returned when loading settings files.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

/// Load settings from a TOML file.
pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    let raw = fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.display().to_string(),
        source,
    })?;

    parse_settings(&raw, path.display().to_string())
}

/// Built-in settings shipped with the tool.
pub fn default_settings() -> Settings {
    let embedded = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/settings/defaults.toml"
    ));
    parse_settings(embedded, "embedded settings".to_string()).unwrap_or_default()
}

fn parse_settings(raw: &str, path: String) -> Result<Settings, SettingsError> {
    toml::from_str(raw).map_err(|source| SettingsError::Parse { path, source })
}

fn default_banner_markers() -> Vec<String> {
    DEFAULT_BANNER_MARKERS.iter().map(|m| m.to_string()).collect()
}
