//! Spatial and classification rules for spoken tile descriptions.
//!
//! `game-core` defines the shared vocabulary (tile geometry, categories,
//! seasons, configuration) and the terrain feature classifier. It is pure:
//! no I/O, no global state, and every toggle arrives through
//! [`AccessConfig`]. Data loading lives in `game-content`; the interactive
//! tile cursor lives in `client-viewer`.
pub mod calendar;
pub mod category;
pub mod config;
pub mod env;
pub mod error;
pub mod geometry;
pub mod terrain;

pub use calendar::{Calendar, Season};
pub use category::Category;
pub use config::{AccessConfig, TileCursorConfig};
pub use env::{ItemId, ItemNameTable, ItemOracle};
pub use error::ConfigError;
pub use geometry::{Facing, PixelVector, Position, TILE_SIZE};
pub use terrain::{
    Bush, BushSize, CosmeticPlant, Crop, CropKind, Described, Flooring, FruitTree, HoeDirt,
    LargeTerrainFeature, TerrainClassifier, TerrainFeature, Tree,
};
