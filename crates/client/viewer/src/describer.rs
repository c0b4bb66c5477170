//! Tile describer composed from the terrain classifier and static tiles.
use game_content::StaticTileRegistry;
use game_core::{
    AccessConfig, Calendar, Described, ItemOracle, Position, TerrainClassifier, TerrainFeature,
};

use crate::host::TileDescriber;

/// Terrain state owned by the host engine.
pub trait TerrainOracle {
    /// Name of the location the player is in.
    fn location_name(&self) -> String;

    fn calendar(&self) -> Calendar;

    /// Terrain feature occupying a tile, large features included.
    fn terrain_at(&self, tile: Position) -> Option<TerrainFeature>;

    fn is_colliding(&self, tile: Position) -> bool;
}

/// [`TileDescriber`] that checks terrain first, then the static tile dataset.
pub struct WorldTileDescriber<'a, T, I>
where
    T: TerrainOracle + ?Sized,
    I: ItemOracle + ?Sized,
{
    terrain: &'a T,
    items: &'a I,
    static_tiles: &'a StaticTileRegistry,
    config: &'a AccessConfig,
    ignore_empty_dirt: bool,
}

impl<'a, T, I> WorldTileDescriber<'a, T, I>
where
    T: TerrainOracle + ?Sized,
    I: ItemOracle + ?Sized,
{
    pub fn new(
        terrain: &'a T,
        items: &'a I,
        static_tiles: &'a StaticTileRegistry,
        config: &'a AccessConfig,
    ) -> Self {
        Self {
            terrain,
            items,
            static_tiles,
            config,
            ignore_empty_dirt: false,
        }
    }

    /// Stay silent on tilled soil with nothing planted.
    pub fn ignore_empty_dirt(mut self, ignore: bool) -> Self {
        self.ignore_empty_dirt = ignore;
        self
    }

    /// Name and category of whatever occupies a tile.
    pub fn describe_with_category(&self, tile: Position) -> Option<Described> {
        if let Some(described) = self.describe_terrain(tile) {
            return Some(described);
        }

        let location = self.terrain.location_name();
        match self.static_tiles.describe_at(&location, tile.x, tile.y) {
            (Some(name), category) => Some(Described::new(name, category)),
            (None, _) => None,
        }
    }

    fn describe_terrain(&self, tile: Position) -> Option<Described> {
        let feature = self.terrain.terrain_at(tile)?;
        let classifier =
            TerrainClassifier::new(self.config, self.items, self.terrain.calendar());
        classifier
            .classify(&feature, self.ignore_empty_dirt)
            .filter(|described| !described.name.is_empty())
    }
}

impl<T, I> TileDescriber for WorldTileDescriber<'_, T, I>
where
    T: TerrainOracle + ?Sized,
    I: ItemOracle + ?Sized,
{
    fn describe_at(&self, tile: Position) -> Option<String> {
        self.describe_with_category(tile)
            .map(|described| described.name)
    }

    fn is_blocked_at(&self, tile: Position) -> bool {
        self.terrain.is_colliding(tile)
    }
}
