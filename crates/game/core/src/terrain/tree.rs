//! Wild trees and fruit trees.
use std::borrow::Cow;

use crate::env::{ItemId, ItemOracle};

/// Fruit tree as read from the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FruitTree {
    pub growth_stage: i32,
    /// Item id of the fruit; the tree is named after it.
    pub fruit_item: ItemId,
    pub fruits_on_tree: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FruitTreeDetails {
    pub tree_type: String,
    pub growth_stage: i32,
    pub harvestable: bool,
}

impl FruitTreeDetails {
    pub fn from_tree<I>(tree: &FruitTree, items: &I) -> Self
    where
        I: ItemOracle + ?Sized,
    {
        Self {
            tree_type: items.object_name_or_unknown(tree.fruit_item),
            growth_stage: tree.growth_stage,
            harvestable: tree.fruits_on_tree > 0,
        }
    }

    pub fn describe(&self) -> String {
        let stage = match self.growth_stage {
            0 => "seed",
            1 => "sprout",
            2 => "sapling",
            3 => "bush",
            _ => "tree",
        };

        if self.harvestable {
            format!("Harvestable {} {}", self.tree_type, stage)
        } else {
            format!("{} {}", self.tree_type, stage)
        }
    }
}

/// Non-fruit tree as read from the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tree {
    /// Engine species number (1 = oak .. 9 = island palm).
    pub tree_type: i32,
    pub growth_stage: i32,
    pub fertilized: bool,
}

/// Species whose stage-0 tile is described by the seed item's own name.
const SEED_NAMED_SPECIES: [i32; 4] = [1, 2, 3, 8];

/// Item id of the seed a species grows from, for seed-named species only.
///
/// Oak, maple and pine seeds sit at `308 + species`; mahogany seeds are
/// sixteen ids below the base instead.
pub fn tree_seed_item(tree_type: i32) -> Option<ItemId> {
    match tree_type {
        8 => Some(308 - 16),
        1..=3 => Some(308 + tree_type),
        _ => None,
    }
}

pub fn tree_species_name(tree_type: i32) -> Cow<'static, str> {
    match tree_type {
        1 => Cow::Borrowed("Oak"),
        2 => Cow::Borrowed("Maple"),
        3 => Cow::Borrowed("Pine"),
        4 | 5 => Cow::Borrowed("Winter Tree"),
        6 | 9 => Cow::Borrowed("Palm Tree"),
        7 => Cow::Borrowed("Mushroom Tree"),
        8 => Cow::Borrowed("Mahogany"),
        other => Cow::Owned(format!("Unknown tree type number {other}")),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeDetails {
    pub tree_type: i32,
    pub growth_stage: i32,
    pub seed_name: Option<String>,
    pub fertilized: bool,
}

impl TreeDetails {
    pub fn from_tree<I>(tree: &Tree, items: &I) -> Self
    where
        I: ItemOracle + ?Sized,
    {
        Self {
            tree_type: tree.tree_type,
            growth_stage: tree.growth_stage,
            seed_name: tree_seed_item(tree.tree_type).map(|id| items.object_name_or_unknown(id)),
            fertilized: tree.fertilized,
        }
    }

    pub fn describe(&self) -> String {
        let prefix = if self.fertilized { "Fertilized " } else { "" };
        let species = tree_species_name(self.tree_type);

        if self.growth_stage == 0 {
            return match &self.seed_name {
                Some(seed) if SEED_NAMED_SPECIES.contains(&self.tree_type) => {
                    format!("{prefix}{seed}")
                }
                _ => format!("{prefix}{species} seedling"),
            };
        }

        let stage = match self.growth_stage {
            1 => "sprout",
            2 => "sapling",
            3 | 4 => "bush",
            _ => "tree",
        };
        format!("{prefix}{species} {stage}")
    }
}
