use crate::calendar::Calendar;
use crate::category::Category;
use crate::config::AccessConfig;
use crate::env::ItemOracle;

use super::{
    BushDetails, Described, DirtDetails, FruitTreeDetails, GRASS_NAME_KEY, LargeTerrainFeature,
    TerrainFeature, TreeDetails,
};

/// Turns terrain features into spoken descriptions.
///
/// Pure: the result depends only on the feature, the configuration, the item
/// oracle and the calendar handed in. Nothing is cached, so descriptions are
/// always current with the engine state they were built from.
///
/// `None` means "say nothing": the feature is recognised but intentionally
/// silent (flooring with `read_flooring` off) or has no rules at all.
pub struct TerrainClassifier<'a, I>
where
    I: ItemOracle + ?Sized,
{
    config: &'a AccessConfig,
    items: &'a I,
    calendar: Calendar,
}

impl<'a, I> TerrainClassifier<'a, I>
where
    I: ItemOracle + ?Sized,
{
    pub fn new(config: &'a AccessConfig, items: &'a I, calendar: Calendar) -> Self {
        Self {
            config,
            items,
            calendar,
        }
    }

    pub fn classify(&self, feature: &TerrainFeature, ignore_if_empty: bool) -> Option<Described> {
        match feature {
            TerrainFeature::Large(large) => self.classify_large(large),
            TerrainFeature::Dirt(dirt) => {
                let details = DirtDetails::from_dirt(dirt, self.items);
                Some(Described::new(
                    details.describe(self.config.watered_toggle, ignore_if_empty),
                    Category::Crops,
                ))
            }
            TerrainFeature::CosmeticPlant(plant) => {
                Some(Described::new(plant.describe(), Category::Furnitures))
            }
            TerrainFeature::Flooring(flooring) if self.config.read_flooring => {
                Some(Described::new(flooring.describe(), Category::Flooring))
            }
            TerrainFeature::Flooring(_) => None,
            TerrainFeature::FruitTree(tree) => Some(Described::new(
                FruitTreeDetails::from_tree(tree, self.items).describe(),
                Category::Trees,
            )),
            TerrainFeature::Grass => Some(Described::new(GRASS_NAME_KEY, Category::Debris)),
            TerrainFeature::Tree(tree) => Some(Described::new(
                TreeDetails::from_tree(tree, self.items).describe(),
                Category::Trees,
            )),
            TerrainFeature::Unrecognized { kind } => {
                tracing::warn!("Unknown terrain feature type: {}", kind);
                None
            }
        }
    }

    pub fn classify_large(&self, feature: &LargeTerrainFeature) -> Option<Described> {
        match feature {
            LargeTerrainFeature::Bush(bush) => Some(Described::new(
                BushDetails::from_bush(bush, self.calendar).describe(self.items),
                Category::Bush,
            )),
            LargeTerrainFeature::Unrecognized { kind } => {
                tracing::warn!("Unknown large terrain feature type: {}", kind);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Season;
    use crate::env::ItemNameTable;
    use crate::terrain::{
        Bush, BushSize, CosmeticPlant, Crop, CropKind, Flooring, FruitTree, HoeDirt, Tree,
        shake_off,
    };

    fn items() -> ItemNameTable {
        ItemNameTable::new()
            .with(24, "Parsnip")
            .with(634, "Apricot")
            .with(309, "Acorn")
            .with(shake_off::SALMONBERRY, "Salmonberry")
    }

    fn classify(config: &AccessConfig, feature: &TerrainFeature) -> Option<Described> {
        let items = items();
        TerrainClassifier::new(config, &items, Calendar::new(Season::Spring, 16))
            .classify(feature, false)
    }

    #[test]
    fn empty_soil_is_a_crop_tile() {
        let config = AccessConfig {
            watered_toggle: false,
            ..AccessConfig::default()
        };
        assert_eq!(
            classify(&config, &TerrainFeature::Dirt(HoeDirt::default())),
            Some(Described::new("Soil", Category::Crops))
        );
    }

    #[test]
    fn ignore_if_empty_yields_empty_text_not_silence() {
        let config = AccessConfig {
            watered_toggle: false,
            ..AccessConfig::default()
        };
        let items = items();
        let classifier = TerrainClassifier::new(&config, &items, Calendar::default());
        assert_eq!(
            classifier.classify(&TerrainFeature::Dirt(HoeDirt::default()), true),
            Some(Described::new("", Category::Crops))
        );
    }

    #[test]
    fn flooring_respects_toggle() {
        let feature = TerrainFeature::Flooring(Flooring {
            is_pathway: true,
            is_stepping_stone: false,
        });
        assert_eq!(classify(&AccessConfig::default(), &feature), None);

        let config = AccessConfig {
            read_flooring: true,
            ..AccessConfig::default()
        };
        assert_eq!(
            classify(&config, &feature),
            Some(Described::new("Pathway", Category::Flooring))
        );
    }

    #[test]
    fn categories_per_variant() {
        let config = AccessConfig::default();
        let cases = [
            (
                TerrainFeature::FruitTree(FruitTree {
                    growth_stage: 0,
                    fruit_item: 634,
                    fruits_on_tree: 0,
                }),
                "Apricot seed",
                Category::Trees,
            ),
            (
                TerrainFeature::Tree(Tree {
                    tree_type: 1,
                    growth_stage: 0,
                    fertilized: false,
                }),
                "Acorn",
                Category::Trees,
            ),
            (TerrainFeature::Grass, GRASS_NAME_KEY, Category::Debris),
            (
                TerrainFeature::CosmeticPlant(CosmeticPlant::new("TerrainFeature Fern")),
                "fern",
                Category::Furnitures,
            ),
            (
                TerrainFeature::from(Bush {
                    tile_sheet_offset: 1,
                    ..Bush::new(BushSize::Medium)
                }),
                "Harvestable Salmonberry Medium Bush",
                Category::Bush,
            ),
        ];

        for (feature, name, category) in cases {
            assert_eq!(
                classify(&config, &feature),
                Some(Described::new(name, category)),
                "feature {}",
                feature.kind_name()
            );
        }
    }

    #[test]
    fn unrecognized_kinds_are_silent() {
        let config = AccessConfig::default();
        assert_eq!(
            classify(
                &config,
                &TerrainFeature::Unrecognized {
                    kind: "Tent".into()
                }
            ),
            None
        );
        assert_eq!(
            classify(
                &config,
                &TerrainFeature::Large(LargeTerrainFeature::Unrecognized {
                    kind: "Boulder".into()
                })
            ),
            None
        );
    }

    #[test]
    fn results_track_current_state() {
        let config = AccessConfig::default();
        let mut dirt = HoeDirt {
            watered: false,
            fertilized: false,
            crop: Some(Crop {
                kind: CropKind::Planted { harvest_item: 24 },
                ready_for_harvest: false,
                dead: false,
            }),
        };
        assert_eq!(
            classify(&config, &TerrainFeature::Dirt(dirt.clone())).map(|d| d.name),
            Some("Unwatered Parsnip".to_string())
        );

        dirt.watered = true;
        if let Some(crop) = dirt.crop.as_mut() {
            crop.ready_for_harvest = true;
        }
        assert_eq!(
            classify(&config, &TerrainFeature::Dirt(dirt)).map(|d| d.name),
            Some("Watered Harvestable Parsnip".to_string())
        );
    }
}
