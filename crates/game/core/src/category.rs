//! Semantic groups attached to every tile description.
//!
//! Categories let the narration policy filter and prioritise what it reads
//! out. They are resolved from free-form tags (dataset `type` fields, host
//! object kinds) and resolution is total: anything unrecognised becomes
//! [`Category::Others`].

/// Closed set of semantic tile groups.
///
/// The first tag of each variant is its canonical spelling (used by
/// `Display`); further tags are accepted aliases. Matching ignores ASCII case.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Category {
    #[strum(to_string = "farmer", serialize = "farmers")]
    Farmers,
    #[strum(to_string = "animal", serialize = "animals", serialize = "farmanimals")]
    FarmAnimals,
    #[strum(to_string = "npc", serialize = "npcs")]
    NPCs,
    #[strum(to_string = "furniture", serialize = "furnitures")]
    Furnitures,
    #[strum(to_string = "flooring")]
    Flooring,
    #[strum(to_string = "debris")]
    Debris,
    #[strum(to_string = "crop", serialize = "crops")]
    Crops,
    #[strum(to_string = "tree", serialize = "trees")]
    Trees,
    #[strum(to_string = "bush", serialize = "bushes")]
    Bush,
    #[strum(to_string = "building", serialize = "buildings")]
    Buildings,
    #[strum(to_string = "mine item", serialize = "mineitems")]
    MineItems,
    #[strum(to_string = "resource clump", serialize = "resourceclumps")]
    ResourceClumps,
    #[strum(
        to_string = "container",
        serialize = "containers",
        serialize = "chest",
        serialize = "chests"
    )]
    Containers,
    #[strum(to_string = "bundle", serialize = "junimobundle")]
    JunimoBundle,
    #[strum(to_string = "door", serialize = "doors")]
    Doors,
    #[strum(to_string = "water", serialize = "watertiles")]
    WaterTiles,
    #[strum(to_string = "interactable", serialize = "interactables")]
    Interactables,
    #[strum(to_string = "decoration", serialize = "decor")]
    Decor,
    #[strum(to_string = "machine", serialize = "machines")]
    Machines,
    #[strum(to_string = "bridge", serialize = "bridges")]
    Bridges,
    #[strum(to_string = "dropped item", serialize = "droppeditems")]
    DroppedItems,
    #[default]
    #[strum(to_string = "other", serialize = "others")]
    Others,
}

impl Category {
    /// Resolves a free-form tag. Never fails: unknown tags log a warning and
    /// fall back to [`Category::Others`].
    pub fn resolve(raw: &str) -> Category {
        match raw.parse::<Category>() {
            Ok(category) => category,
            Err(_) => {
                tracing::warn!("Unknown category tag {:?}, using {}", raw, Category::Others);
                Category::Others
            }
        }
    }

    /// Like [`Category::resolve`] but silent and explicit about misses.
    pub fn try_resolve(raw: &str) -> Option<Category> {
        raw.parse().ok()
    }
}
