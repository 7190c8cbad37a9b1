use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::manager::DEFAULT_ROOT;

/// Interpreter used for `-m venv` when nothing else is configured
const DEFAULT_PYTHON: &str = if cfg!(windows) { "python" } else { "python3" };

/// Contents of `config.toml`; every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub root: Option<String>,
    pub python: Option<String>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        toml::from_str(&contents).with_context(|| format!("Failed to parse config file {:?}", path))
    }
}

/// Resolved settings for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub root: PathBuf,
    pub python: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            python: PathBuf::from(DEFAULT_PYTHON),
        }
    }
}

impl Config {
    /// Resolve settings: explicit values win over the config file, which wins
    /// over the built-in defaults.
    pub fn resolve(root: Option<PathBuf>, python: Option<PathBuf>) -> Result<Self> {
        let file = ConfigFile::load(&config_path()?)?;
        Self::merge(file, root, python)
    }

    fn merge(file: ConfigFile, root: Option<PathBuf>, python: Option<PathBuf>) -> Result<Self> {
        let defaults = Self::default();

        let root = match (root, file.root) {
            (Some(root), _) => root,
            (None, Some(root)) => expand(&root)?,
            (None, None) => defaults.root,
        };

        let python = match (python, file.python) {
            (Some(python), _) => python,
            (None, Some(python)) => expand(&python)?,
            (None, None) => defaults.python,
        };

        tracing::debug!(root = %root.display(), python = %python.display(), "Resolved configuration");
        Ok(Self { root, python })
    }
}

/// Expand `~` and environment variables in a config file value
fn expand(value: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(value)
        .map_err(|err| anyhow::anyhow!("Failed to expand '{}': {}", value, err))?;
    Ok(PathBuf::from(expanded.as_ref()))
}

/// Location of the config file
///
/// Returns `$XDG_CONFIG_HOME/venvmanager/config.toml` or
/// `~/.config/venvmanager/config.toml` if not set
pub fn config_path() -> Result<PathBuf> {
    let base = match env::var("XDG_CONFIG_HOME") {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => directories::BaseDirs::new()
            .context("Failed to get home directory")?
            .home_dir()
            .join(".config"),
    };

    Ok(base.join("venvmanager").join("config.toml"))
}
