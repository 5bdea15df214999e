//! Settings and project files
//!
//! This module contains:
//! - [`Settings`]: the operator's optional `config.yaml`
//! - [`manifest`]: `package.json` scripts, dependencies and workspaces
//! - [`deno`]: `deno.json` / `deno.jsonc` tasks and imports

pub mod deno;
pub mod manifest;

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, config};

/// Environment variable pointing at a settings file
pub const CONFIG_ENV: &str = "JSM_CONFIG";

/// Operator settings (`config.yaml`)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Run the auto-install preflight before `dev`/`start`
    pub auto_install: bool,

    /// Wrap node-ecosystem installs with `volta run` when volta is on `PATH`
    pub volta: bool,

    /// Stop scanning declared dependencies after this many are found missing
    pub missing_dependency_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_install: true,
            volta: true,
            missing_dependency_limit: 10,
        }
    }
}

impl Settings {
    /// Load settings from `$JSM_CONFIG` or the per-user config directory
    pub fn load() -> Result<Self> {
        match settings_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load settings from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No settings file, using defaults");
            return Ok(Self::default());
        }

        let yaml = std::fs::read_to_string(path)
            .map_err(|e| config::read_failed(path.display().to_string(), e.to_string()))?;
        Self::from_yaml(&yaml, &path.display().to_string())
    }

    /// Parse settings from YAML; `origin` names the source in errors
    pub fn from_yaml(yaml: &str, origin: &str) -> Result<Self> {
        // An empty document is an empty mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let settings: Self =
            serde_yaml::from_str(yaml).map_err(|e| config::parse_failed(origin, e.to_string()))?;

        if settings.missing_dependency_limit == 0 {
            return Err(config::parse_failed(
                origin,
                "missing_dependency_limit must be at least 1",
            ));
        }

        Ok(settings)
    }
}

/// `$JSM_CONFIG` if set, else `<config dir>/jsm/config.yaml`
pub fn settings_path() -> Option<PathBuf> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => dirs::config_dir().map(|dir| dir.join("jsm").join("config.yaml")),
    }
}
