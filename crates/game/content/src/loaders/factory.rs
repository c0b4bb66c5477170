//! Content factory for loading everything from one data directory.

use std::path::{Path, PathBuf};

use game_core::AccessConfig;

use crate::loaders::{ConfigLoader, LoadResult};
use crate::static_tiles::StaticTileRegistry;

/// Content factory that loads access content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── static-tiles.json
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const STATIC_TILES_FILE: &'static str = "static-tiles.json";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load configuration from `config.toml`, or defaults when it is absent.
    pub fn load_config(&self) -> LoadResult<AccessConfig> {
        let path = self.config_path();
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(AccessConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the static tile registry from `static-tiles.json`.
    ///
    /// Never fails: a missing or broken dataset yields an empty registry.
    pub fn static_tiles(&self) -> StaticTileRegistry {
        StaticTileRegistry::load_or_empty(&self.static_tiles_path())
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(Self::CONFIG_FILE)
    }

    pub fn static_tiles_path(&self) -> PathBuf {
        self.data_dir.join(Self::STATIC_TILES_FILE)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
