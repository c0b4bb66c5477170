//! Content loaders for reading data files.
//!
//! This module provides loaders that convert JSON/TOML files into the
//! read-only structures consumed by the classifier and the tile viewer.

pub mod config;
pub mod factory;
pub mod static_tiles;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use static_tiles::StaticTileLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
