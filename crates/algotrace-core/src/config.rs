//! User configuration for algotrace (stored in ~/.config/algotrace/config.toml)

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TraceError};

pub use types::{
    AppConfig, DEFAULT_PAGE_SIZE, DEFAULT_PLAYBACK_DELAY_MS, DEFAULT_WEIGHT_TOLERANCE,
};

const CONFIG_DIR: &str = "algotrace";
const CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV_VAR: &str = "ALGOTRACE_CONFIG_DIR";

impl AppConfig {
    /// Resolve the config file path.
    ///
    /// Precedence: explicit directory, then `ALGOTRACE_CONFIG_DIR`, then the
    /// platform config directory.
    pub fn config_path(dir_override: Option<&Path>) -> Result<PathBuf> {
        let config_dir = if let Some(dir) = dir_override {
            dir.to_path_buf()
        } else if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    TraceError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration, falling back to defaults when the file is absent
    pub fn discover(dir_override: Option<&Path>) -> Result<Self> {
        let path = Self::config_path(dir_override)?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config_missing_using_defaults");
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file, creating the parent directory
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| TraceError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            crate::bail_invalid!("page_size", self.page_size);
        }
        if !self.weight_tolerance.is_finite() || self.weight_tolerance < 0.0 {
            crate::bail_invalid!("weight_tolerance", self.weight_tolerance);
        }
        Ok(())
    }
}
