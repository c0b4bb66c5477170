//! Access configuration loader.

use std::path::Path;

use game_core::AccessConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for access configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys take their defaults, so a partial file is valid.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing AccessConfig
    pub fn load(path: &Path) -> LoadResult<AccessConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config at {}: {}", path.display(), e))
    }

    /// Parse and validate TOML text.
    pub fn parse(content: &str) -> LoadResult<AccessConfig> {
        let config: AccessConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config.validate()?;
        Ok(config)
    }
}
