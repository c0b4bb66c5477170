//! Static tile dataset loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::static_tiles::StaticTileRegistry;

/// Loader for the static tile dataset (JSON).
pub struct StaticTileLoader;

impl StaticTileLoader {
    /// Load and index a static tile dataset.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON file (location → tile name → {x, y, type})
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or is not a JSON object. Individual
    /// malformed entries are skipped and counted in the registry's report.
    pub fn load(path: &Path) -> LoadResult<StaticTileRegistry> {
        let content = read_file(path)?;
        let registry = StaticTileRegistry::parse(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse static tiles at {}: {}", path.display(), e)
        })?;

        tracing::info!(
            "Loaded static tiles from {} ({} locations)",
            path.display(),
            registry.report().locations.len()
        );
        Ok(registry)
    }
}
