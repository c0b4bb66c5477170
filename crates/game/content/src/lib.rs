//! Data-driven content and loaders.
//!
//! This crate reads the declarative data the access layer is driven by:
//! - Static tiles (named features pinned to tiles, JSON)
//! - Access configuration (TOML)
//!
//! Everything loaded here is immutable after construction and shared by
//! reference across queries.

pub mod loaders;
pub mod static_tiles;

pub use loaders::{ConfigLoader, ContentFactory, LoadResult, StaticTileLoader};
pub use static_tiles::{
    LoadReport, LocationReport, StaticTileEntry, StaticTileError, StaticTileRegistry,
};
