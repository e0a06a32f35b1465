//! Configuration for namesake
//!
//! Looked up in order: an explicit path, `namesake.toml` in the working root,
//! then `config.toml` in the global config directory
//! (`$NAMESAKE_CONFIG_DIR` or the platform config dir). Missing files fall
//! back to defaults; every field is optional.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{NamesakeError, Result};

pub use types::{
    CatalogConfig, DictionaryConfig, ExtractionConfig, NamesakeConfig, SimilarityConfig,
    StrategyKind, DEFAULT_SEARCH_URL, DEFAULT_USER_AGENT,
};

/// Config file name looked up in the working root
pub const LOCAL_CONFIG_FILE: &str = "namesake.toml";

const CONFIG_DIR: &str = "namesake";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "NAMESAKE_CONFIG_DIR";

impl NamesakeConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| NamesakeError::io_operation("read config", path.display(), e))?;
        let config: NamesakeConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve and load configuration for a working root
    ///
    /// An explicit path must exist; the implicit locations are optional.
    pub fn discover(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(NamesakeError::not_found("config file", path.display()));
            }
            return Self::load(path);
        }

        let local = root.join(LOCAL_CONFIG_FILE);
        if local.exists() {
            tracing::debug!(path = %local.display(), "using local config");
            return Self::load(&local);
        }

        if let Some(global) = global_config_path() {
            if global.exists() {
                tracing::debug!(path = %global.display(), "using global config");
                return Self::load(&global);
            }
        }

        Ok(Self::default())
    }

    /// Reject values the algorithms cannot work with
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.similarity.min_dice) {
            crate::bail_invalid!("similarity.min_dice (expected 0.0-1.0)", self.similarity.min_dice);
        }
        if self.similarity.ngram_size == 0 {
            crate::bail_invalid!("similarity.ngram_size (expected >= 1)", 0);
        }
        if self.catalog.page_size == 0 {
            crate::bail_invalid!("catalog.page_size (expected >= 1)", 0);
        }
        if self.catalog.save_every == 0 {
            crate::bail_invalid!("catalog.save_every (expected >= 1)", 0);
        }
        Ok(())
    }
}

fn global_config_path() -> Option<PathBuf> {
    let dir = match std::env::var(CONFIG_DIR_ENV_VAR) {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => dirs::config_dir()?.join(CONFIG_DIR),
    };
    Some(dir.join(CONFIG_FILE))
}
