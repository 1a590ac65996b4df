//! Configuration for learntree
//!
//! Handles the optional config.toml carrying the default root and the
//! module list used by `--init-all`

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::models::ModuleSpec;

/// The built-in default module list, in creation order
pub const DEFAULT_MODULES: [(&str, &str); 4] = [
    ("01-fundamentals", "Fundamentals"),
    ("02-core-concepts", "Core Concepts"),
    ("03-advanced-patterns", "Advanced Patterns"),
    ("04-production-deployment", "Production & Deployment"),
];

/// Root used when neither `--path` nor config names one
pub const DEFAULT_ROOT: &str = "./learning";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Root used when `--path` is not given
    #[serde(default = "default_root")]
    pub default_root: PathBuf,
    /// Modules created by `--init-all`
    #[serde(default = "default_modules")]
    pub modules: Vec<ModuleSpec>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_root: default_root(),
            modules: default_modules(),
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(DEFAULT_ROOT)
}

fn default_modules() -> Vec<ModuleSpec> {
    DEFAULT_MODULES
        .iter()
        .map(|(name, title)| ModuleSpec::new(*name, Some((*title).to_string())))
        .collect()
}

/// Returns the path to the user config file, if a config directory exists
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("learntree").join("config.toml"))
}

/// Load configuration from disk, falling back to the built-in defaults
/// when no config file is present
pub fn load_config() -> Result<Config> {
    let path = match config_path() {
        Some(path) => path,
        None => return Ok(Config::default()),
    };
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}
