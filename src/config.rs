//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/bintree/bintree.toml`
//! 3. Local config: `<dir>/.bintree.toml`
//! 4. Environment variables: `BINTREE_*` prefix
//!
//! Command line flags are applied on top by the CLI layer.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use config::{Config, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::domain::Strategy;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("environment: {0}")]
    Environment(String),

    #[error("serialize settings: {0}")]
    Serialize(String),
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub strategy: Option<Strategy>,
    pub tree: Option<String>,
    pub separator: Option<String>,
}

/// Unified configuration for bintree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Traversal strategy used when none is given on the command line
    pub strategy: Strategy,
    /// Level-order description of the tree to work on (default: sample tree)
    pub tree: Option<String>,
    /// Separator placed between values when printing sequences
    pub separator: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            tree: None,
            separator: " ".to_string(),
        }
    }
}

/// Get the XDG config directory for bintree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "bintree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("bintree.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".bintree.toml")
}

fn load_raw_settings(path: &Path) -> Result<RawSettings, SettingsError> {
    let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|e| SettingsError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

impl Settings {
    /// Overlay wins wherever it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            strategy: overlay.strategy.unwrap_or(self.strategy),
            tree: overlay.tree.clone().or_else(|| self.tree.clone()),
            separator: overlay
                .separator
                .clone()
                .unwrap_or_else(|| self.separator.clone()),
        }
    }

    /// Load settings with layered precedence, using the XDG global config.
    pub fn load(local_dir: Option<&Path>) -> Result<Self, SettingsError> {
        let global = global_config_path();
        Self::load_with_global(global.as_deref(), local_dir)
    }

    /// Load settings with an explicit global config file.
    #[instrument(level = "debug")]
    pub fn load_with_global(
        global_path: Option<&Path>,
        local_dir: Option<&Path>,
    ) -> Result<Self, SettingsError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(path) = global_path.filter(|p| p.exists()) {
            debug!("global config: {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        // 3. Local config
        if let Some(dir) = local_dir {
            let path = local_config_path(dir);
            if path.exists() {
                debug!("local config: {}", path.display());
                current = current.merge_with(&load_raw_settings(&path)?);
            }
        }

        // 4. Environment variables
        Self::apply_env_overrides(current)
    }

    /// Apply BINTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, SettingsError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("BINTREE").separator("__"))
            .build()
            .map_err(|e| SettingsError::Environment(e.to_string()))?;

        if let Ok(val) = config.get_string("strategy") {
            settings.strategy =
                Strategy::from_str(&val, true).map_err(SettingsError::Environment)?;
        }
        if let Ok(val) = config.get_string("tree") {
            settings.tree = Some(val);
        }
        if let Ok(val) = config.get_string("separator") {
            settings.separator = val;
        }

        Ok(settings)
    }

    pub fn to_toml(&self) -> Result<String, SettingsError> {
        toml::to_string_pretty(self).map_err(|e| SettingsError::Serialize(e.to_string()))
    }
}
