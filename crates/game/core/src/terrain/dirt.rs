//! Tilled soil and the crops growing in it.
use crate::env::{ItemId, ItemOracle};

/// Hoed soil tile as read from the engine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoeDirt {
    pub watered: bool,
    pub fertilized: bool,
    pub crop: Option<Crop>,
}

/// Crop planted in a [`HoeDirt`] tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crop {
    pub kind: CropKind,
    pub ready_for_harvest: bool,
    pub dead: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CropKind {
    /// Regular crop, named after the item it yields.
    Planted { harvest_item: ItemId },
    /// Wild forage crop identified by the engine's forage sub-kind.
    Forage { which: i32 },
}

/// Display name for a forage crop sub-kind.
pub fn forage_crop_name(which: i32) -> &'static str {
    match which {
        1 => "Spring onion",
        2 => "Ginger",
        _ => "Forageable crop",
    }
}

/// Flags and crop name extracted from a soil tile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirtDetails {
    pub watered: bool,
    pub fertilized: bool,
    pub crop_name: Option<String>,
    pub ready_for_harvest: bool,
    pub dead: bool,
}

impl DirtDetails {
    pub fn from_dirt<I>(dirt: &HoeDirt, items: &I) -> Self
    where
        I: ItemOracle + ?Sized,
    {
        let crop_name = dirt.crop.as_ref().map(|crop| match crop.kind {
            CropKind::Forage { which } => forage_crop_name(which).to_string(),
            CropKind::Planted { harvest_item } => items.object_name_or_unknown(harvest_item),
        });

        Self {
            watered: dirt.watered,
            fertilized: dirt.fertilized,
            crop_name,
            ready_for_harvest: dirt.crop.as_ref().is_some_and(|crop| crop.ready_for_harvest),
            dead: dirt.crop.as_ref().is_some_and(|crop| crop.dead),
        }
    }

    /// `[Un]Watered Fertilized Harvestable Dead <crop>`, each part optional.
    ///
    /// An empty tile reads as "Soil" unless `ignore_if_empty` is set, in which
    /// case only the watered/fertilized prefix (possibly nothing) remains.
    pub fn describe(&self, watered_toggle: bool, ignore_if_empty: bool) -> String {
        let mut out = String::new();

        if watered_toggle {
            out.push_str(if self.watered { "Watered " } else { "Unwatered " });
        }
        if self.fertilized {
            out.push_str("Fertilized ");
        }

        match &self.crop_name {
            Some(name) => {
                if self.ready_for_harvest {
                    out.push_str("Harvestable ");
                }
                if self.dead {
                    out.push_str("Dead ");
                }
                out.push_str(name);
            }
            None if !ignore_if_empty => out.push_str("Soil"),
            None => {}
        }

        out.trim().to_string()
    }
}
