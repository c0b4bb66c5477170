//! Static tile registry.
//!
//! Answers "which named feature sits on tile (x, y) in location L" from a
//! declarative JSON dataset:
//!
//! ```json
//! {
//!     "Farm": {
//!         "Well": { "x": 10, "y": 12, "type": "water" },
//!         "Shipping Bin": { "x": 71, "y": 14, "type": "container" }
//!     }
//! }
//! ```
//!
//! Location keys match case-insensitively. Within a location several entries
//! may claim the same tile; the first one in declaration order wins. The
//! dataset is indexed once into per-location hash maps and never mutated.
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::Path;

use game_core::{Category, Position};
use serde_json::{Map, Value};

/// Errors raised while turning a dataset into a registry.
#[derive(Debug, thiserror::Error)]
pub enum StaticTileError {
    #[error("failed to parse static tile JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("static tile dataset root must be an object of locations")]
    RootNotObject,
}

/// One named feature pinned to a tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticTileEntry {
    pub name: String,
    pub position: Position,
    /// Raw `type` string from the dataset.
    pub kind: String,
    pub category: Category,
}

/// Indexing statistics for one location.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocationReport {
    /// Location key as spelled in the dataset.
    pub name: String,
    pub entries: usize,
    /// Entries missing `x`, `y` or `type`, or holding unusable values.
    pub skipped: usize,
    /// Entries hidden behind an earlier entry on the same tile.
    pub shadowed: usize,
}

/// Indexing statistics for a whole dataset, in declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub locations: Vec<LocationReport>,
}

impl LoadReport {
    pub fn total_entries(&self) -> usize {
        self.locations.iter().map(|l| l.entries).sum()
    }

    pub fn total_skipped(&self) -> usize {
        self.locations.iter().map(|l| l.skipped).sum()
    }

    pub fn total_shadowed(&self) -> usize {
        self.locations.iter().map(|l| l.shadowed).sum()
    }
}

#[derive(Clone, Debug, Default)]
struct LocationTiles {
    entries: Vec<StaticTileEntry>,
    by_position: HashMap<Position, usize>,
}

impl LocationTiles {
    /// Returns false when an earlier entry already owns the tile.
    fn push(&mut self, entry: StaticTileEntry) -> bool {
        let index = self.entries.len();
        let position = entry.position;
        self.entries.push(entry);
        match self.by_position.entry(position) {
            Entry::Vacant(slot) => {
                slot.insert(index);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    fn get(&self, position: Position) -> Option<&StaticTileEntry> {
        self.by_position
            .get(&position)
            .and_then(|&index| self.entries.get(index))
    }
}

/// Read-only index over the static tile dataset.
#[derive(Clone, Debug, Default)]
pub struct StaticTileRegistry {
    /// Keyed by lower-cased location name.
    locations: HashMap<String, LocationTiles>,
    /// Location keys as declared, first spelling wins.
    order: Vec<String>,
    report: LoadReport,
}

impl StaticTileRegistry {
    /// Registry with no data; every query reports "not found".
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads a dataset file, degrading to an empty registry on any failure.
    pub fn load_or_empty(path: &Path) -> Self {
        match crate::loaders::StaticTileLoader::load(path) {
            Ok(registry) => registry,
            Err(error) => {
                tracing::warn!(
                    "Static tiles unavailable, continuing without them: {:#}",
                    error
                );
                Self::empty()
            }
        }
    }

    /// Builds a registry from JSON text.
    pub fn parse(json: &str) -> Result<Self, StaticTileError> {
        let root: Value = serde_json::from_str(json)?;
        match root {
            Value::Object(locations) => Ok(Self::from_locations(locations)),
            _ => Err(StaticTileError::RootNotObject),
        }
    }

    fn from_locations(locations: Map<String, Value>) -> Self {
        let mut registry = Self::empty();

        for (location, tiles) in locations {
            let key = location.to_lowercase();
            let mut report = LocationReport {
                name: location.clone(),
                ..LocationReport::default()
            };

            if !registry.locations.contains_key(&key) {
                registry.order.push(location.clone());
            }
            let bucket = registry.locations.entry(key).or_default();

            match tiles {
                Value::Object(tiles) => {
                    for (name, value) in tiles {
                        let Some(entry) = parse_entry(name, &value) else {
                            report.skipped += 1;
                            continue;
                        };
                        tracing::trace!(
                            "{}:\tx{}\ty{}\ttype{}",
                            entry.name,
                            entry.position.x,
                            entry.position.y,
                            entry.kind
                        );
                        if bucket.push(entry) {
                            report.entries += 1;
                        } else {
                            report.shadowed += 1;
                        }
                    }
                }
                Value::Null => {}
                _ => report.skipped += 1,
            }

            registry.report.locations.push(report);
        }

        tracing::debug!(
            "Indexed {} static tiles across {} locations ({} skipped)",
            registry.report.total_entries(),
            registry.order.len(),
            registry.report.total_skipped()
        );
        registry
    }

    /// True when the dataset has a key for this location (any case).
    pub fn is_available(&self, location: &str) -> bool {
        self.locations.contains_key(&location.to_lowercase())
    }

    /// Name and category of the static feature on a tile.
    ///
    /// Returns `(None, Category::Others)` when there is no data, no such
    /// location, or nothing on that tile.
    pub fn describe_at(&self, location: &str, x: i32, y: i32) -> (Option<&str>, Category) {
        match self.entry_at(location, Position::new(x, y)) {
            Some(entry) => (Some(entry.name.as_str()), entry.category),
            None => (None, Category::Others),
        }
    }

    pub fn name_at(&self, location: &str, x: i32, y: i32) -> Option<&str> {
        self.describe_at(location, x, y).0
    }

    pub fn entry_at(&self, location: &str, position: Position) -> Option<&StaticTileEntry> {
        self.locations
            .get(&location.to_lowercase())
            .and_then(|tiles| tiles.get(position))
    }

    /// All entries of a location in declaration order, shadowed ones included.
    pub fn entries<'a>(&'a self, location: &str) -> impl Iterator<Item = &'a StaticTileEntry> {
        self.locations
            .get(&location.to_lowercase())
            .into_iter()
            .flat_map(|tiles| tiles.entries.iter())
    }

    /// Location keys in declaration order.
    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

fn parse_entry(name: String, value: &Value) -> Option<StaticTileEntry> {
    let x = coordinate(value.get("x")?)?;
    let y = coordinate(value.get("y")?)?;
    let kind = match value.get("type")? {
        Value::String(kind) => kind.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        _ => return None,
    };
    let category = Category::resolve(&kind);

    Some(StaticTileEntry {
        name,
        position: Position::new(x, y),
        kind,
        category,
    })
}

/// Integer coordinate, also accepted as a numeric string.
fn coordinate(value: &Value) -> Option<i32> {
    match value {
        Value::Number(number) => number.as_i64().and_then(|n| i32::try_from(n).ok()),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FARM: &str = r#"{"Farm": {"Well": {"x": 10, "y": 12, "type": "Water"}}}"#;

    #[test]
    fn finds_named_tile_case_insensitively() {
        let registry = StaticTileRegistry::parse(FARM).unwrap();
        assert_eq!(
            registry.describe_at("farm", 10, 12),
            (Some("Well"), Category::WaterTiles)
        );
        assert_eq!(
            registry.describe_at("FARM", 10, 12),
            (Some("Well"), Category::WaterTiles)
        );
        assert_eq!(registry.describe_at("farm", 0, 0), (None, Category::Others));
    }

    #[test]
    fn unknown_locations_report_not_found() {
        let registry = StaticTileRegistry::parse(FARM).unwrap();
        assert!(!registry.is_available("Town"));
        assert_eq!(registry.describe_at("Town", 10, 12), (None, Category::Others));
        assert!(registry.is_available("fArM"));
    }

    #[test]
    fn empty_registry_reports_nothing() {
        let registry = StaticTileRegistry::empty();
        assert!(registry.is_empty());
        assert!(!registry.is_available("farm"));
        assert_eq!(registry.describe_at("farm", 10, 12), (None, Category::Others));
    }

    #[test]
    fn first_declared_entry_wins_on_shared_tiles() {
        let json = r#"{
            "Town": {
                "Zeta Fountain": {"x": 3, "y": 4, "type": "decoration"},
                "Alpha Bench": {"x": 3, "y": 4, "type": "furniture"},
                "Board": {"x": 5, "y": 4, "type": "interactable"}
            }
        }"#;
        let registry = StaticTileRegistry::parse(json).unwrap();
        assert_eq!(
            registry.describe_at("town", 3, 4),
            (Some("Zeta Fountain"), Category::Decor)
        );
        assert_eq!(registry.report().total_shadowed(), 1);
        assert_eq!(registry.entries("town").count(), 3);
    }

    #[test]
    fn locations_differing_only_in_case_merge_in_order() {
        let json = r#"{
            "Beach": {"Pier": {"x": 1, "y": 1, "type": "bridge"}},
            "beach": {
                "Boat": {"x": 1, "y": 1, "type": "other"},
                "Hut": {"x": 2, "y": 2, "type": "building"}
            }
        }"#;
        let registry = StaticTileRegistry::parse(json).unwrap();
        assert_eq!(registry.locations().collect::<Vec<_>>(), vec!["Beach"]);
        assert_eq!(registry.describe_at("beach", 1, 1), (Some("Pier"), Category::Bridges));
        assert_eq!(registry.describe_at("BEACH", 2, 2), (Some("Hut"), Category::Buildings));
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let json = r#"{
            "Mine": {
                "No Type": {"x": 1, "y": 1},
                "No X": {"y": 1, "type": "door"},
                "Bad Y": {"x": 1, "y": [1], "type": "door"},
                "Not An Object": 7,
                "Ladder": {"x": "4", "y": 9, "type": "door"}
            }
        }"#;
        let registry = StaticTileRegistry::parse(json).unwrap();
        assert_eq!(registry.describe_at("mine", 4, 9), (Some("Ladder"), Category::Doors));
        assert_eq!(registry.describe_at("mine", 1, 1), (None, Category::Others));
        assert_eq!(registry.report().total_skipped(), 4);
        assert_eq!(registry.report().total_entries(), 1);
    }

    #[test]
    fn unknown_type_resolves_to_others() {
        let json = r#"{"Farm": {"Statue": {"x": 0, "y": 0, "type": "mystery"}}}"#;
        let registry = StaticTileRegistry::parse(json).unwrap();
        assert_eq!(registry.describe_at("farm", 0, 0), (Some("Statue"), Category::Others));
    }

    #[test]
    fn rejects_non_object_roots() {
        assert!(matches!(
            StaticTileRegistry::parse("[1, 2, 3]"),
            Err(StaticTileError::RootNotObject)
        ));
        assert!(matches!(
            StaticTileRegistry::parse("{not json"),
            Err(StaticTileError::Parse(_))
        ));
    }
}
