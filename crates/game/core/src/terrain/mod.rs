//! Terrain features and their spoken descriptions.
//!
//! A terrain feature is engine-owned state attached to a tile (soil, trees,
//! flooring, ...). This module mirrors each kind as a plain snapshot struct
//! and turns it into a [`Described`] pair through [`TerrainClassifier`].
//! New kinds are added by extending [`TerrainFeature`] and the classifier's
//! match.
mod bush;
mod classifier;
mod dirt;
mod ground;
mod tree;

pub use bush::{Bush, BushDetails, BushSize, TEA_BUSH_DAYS_TO_MATURE, shake_off};
pub use classifier::TerrainClassifier;
pub use dirt::{Crop, CropKind, DirtDetails, HoeDirt, forage_crop_name};
pub use ground::{CosmeticPlant, Flooring, GRASS_NAME_KEY};
pub use tree::{
    FruitTree, FruitTreeDetails, Tree, TreeDetails, tree_seed_item, tree_species_name,
};

use crate::category::Category;

/// Feature occupying a single tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TerrainFeature {
    Dirt(HoeDirt),
    CosmeticPlant(CosmeticPlant),
    Flooring(Flooring),
    FruitTree(FruitTree),
    Grass,
    Tree(Tree),
    /// Feature spanning several tiles.
    Large(LargeTerrainFeature),
    /// Kind reported by the host that has no description rules.
    Unrecognized { kind: String },
}

impl TerrainFeature {
    /// Short kind name for logs.
    pub fn kind_name(&self) -> &str {
        match self {
            TerrainFeature::Dirt(_) => "HoeDirt",
            TerrainFeature::CosmeticPlant(_) => "CosmeticPlant",
            TerrainFeature::Flooring(_) => "Flooring",
            TerrainFeature::FruitTree(_) => "FruitTree",
            TerrainFeature::Grass => "Grass",
            TerrainFeature::Tree(_) => "Tree",
            TerrainFeature::Large(large) => large.kind_name(),
            TerrainFeature::Unrecognized { kind } => kind,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LargeTerrainFeature {
    Bush(Bush),
    Unrecognized { kind: String },
}

impl LargeTerrainFeature {
    pub fn kind_name(&self) -> &str {
        match self {
            LargeTerrainFeature::Bush(_) => "Bush",
            LargeTerrainFeature::Unrecognized { kind } => kind,
        }
    }
}

impl From<Bush> for TerrainFeature {
    fn from(bush: Bush) -> Self {
        TerrainFeature::Large(LargeTerrainFeature::Bush(bush))
    }
}

/// Spoken name of a tile occupant together with its category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Described {
    pub name: String,
    pub category: Category,
}

impl Described {
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            category,
        }
    }
}
