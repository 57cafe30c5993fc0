use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default optimizer executable, resolved on PATH
pub const DEFAULT_OPTIMIZER: &str = "optipng";

/// Wrapper settings, read from `<config_dir>/optipngp/config.toml`
///
/// The file is optional and only ever read. Every field has a default, so a
/// partial file is fine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WrapperConfig {
    /// optipng executable name or full path, for installs outside PATH
    pub optimizer: String,

    /// Print the size savings line after a successful run
    pub report_savings: bool,
}

impl Default for WrapperConfig {
    fn default() -> Self {
        Self {
            optimizer: DEFAULT_OPTIMIZER.to_string(),
            report_savings: true,
        }
    }
}

impl WrapperConfig {
    /// Location of the user config file, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("optipngp").join("config.toml"))
    }

    /// Load from the user config dir, falling back to defaults
    pub fn load() -> anyhow::Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from an explicit path. A missing file yields defaults.
    pub fn load_from(config_path: &Path) -> anyhow::Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        let config: WrapperConfig = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", config_path.display()))?;
        Ok(config)
    }
}
