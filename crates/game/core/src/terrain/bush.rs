//! Bushes: berry bushes, tea bushes and golden walnut bushes.
use crate::calendar::{Calendar, Season};
use crate::env::{ItemId, ItemOracle};

/// Days a tea bush needs before it counts as mature.
pub const TEA_BUSH_DAYS_TO_MATURE: u32 = 20;

/// Objects shaken off a bush when it is harvested.
pub mod shake_off {
    use crate::env::ItemId;

    pub const SALMONBERRY: ItemId = 296;
    pub const BLACKBERRY: ItemId = 410;
    pub const TEA_LEAVES: ItemId = 815;
    pub const GOLDEN_WALNUT: ItemId = 73;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BushSize {
    Small,
    Medium,
    Large,
    Tea,
    GoldenWalnut,
    /// Engine size number with no known label.
    Other(i32),
}

impl BushSize {
    pub const fn from_raw(size: i32) -> Self {
        match size {
            0 => BushSize::Small,
            1 => BushSize::Medium,
            2 => BushSize::Large,
            3 => BushSize::Tea,
            4 => BushSize::GoldenWalnut,
            other => BushSize::Other(other),
        }
    }
}

/// Bush as read from the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bush {
    pub size: BushSize,
    pub town_bush: bool,
    pub greenhouse_bush: bool,
    pub tile_sheet_offset: i32,
    /// Age in days.
    pub age: u32,
    /// Season the bush behaves as, overriding its location's season.
    pub override_season: Option<Season>,
}

impl Bush {
    pub fn new(size: BushSize) -> Self {
        Self {
            size,
            town_bush: false,
            greenhouse_bush: false,
            tile_sheet_offset: 0,
            age: 0,
            override_season: None,
        }
    }

    pub fn effective_season(&self, location_season: Season) -> Season {
        self.override_season.unwrap_or(location_season)
    }

    /// Item shaken off the bush in `season`, if any.
    pub fn shake_off(&self, season: Season) -> Option<ItemId> {
        match self.size {
            BushSize::Tea => Some(shake_off::TEA_LEAVES),
            BushSize::GoldenWalnut => Some(shake_off::GOLDEN_WALNUT),
            _ => match season {
                Season::Spring => Some(shake_off::SALMONBERRY),
                Season::Fall => Some(shake_off::BLACKBERRY),
                Season::Summer | Season::Winter => None,
            },
        }
    }

    pub fn in_bloom(&self, season: Season, day_of_month: u32) -> bool {
        match self.size {
            BushSize::GoldenWalnut => self.tile_sheet_offset == 1,
            BushSize::Tea => {
                self.age >= TEA_BUSH_DAYS_TO_MATURE
                    && day_of_month >= 22
                    && (season != Season::Winter || self.greenhouse_bush)
            }
            _ => match season {
                Season::Spring => (15..=18).contains(&day_of_month),
                Season::Fall => (8..=11).contains(&day_of_month),
                Season::Summer | Season::Winter => false,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BushDetails {
    pub town_bush: bool,
    pub greenhouse_bush: bool,
    pub harvestable: bool,
    pub size: BushSize,
    pub age: u32,
    pub shake_off: Option<ItemId>,
}

impl BushDetails {
    pub fn from_bush(bush: &Bush, calendar: Calendar) -> Self {
        let season = bush.effective_season(calendar.season);
        let harvestable = !bush.town_bush
            && bush.tile_sheet_offset == 1
            && bush.in_bloom(season, calendar.day_of_month);

        Self {
            town_bush: bush.town_bush,
            greenhouse_bush: bush.greenhouse_bush,
            harvestable,
            size: bush.size,
            age: bush.age,
            shake_off: bush.shake_off(season),
        }
    }

    pub fn describe<I>(&self, items: &I) -> String
    where
        I: ItemOracle + ?Sized,
    {
        let mut out = String::new();

        if self.harvestable {
            out.push_str("Harvestable ");
            if let Some(item) = self.shake_off {
                out.push_str(&items.object_name_or_unknown(item));
                out.push(' ');
            }
        }

        if self.town_bush {
            out.push_str("Town ");
        } else if self.greenhouse_bush {
            out.push_str("Greenhouse ");
        }

        match self.size {
            BushSize::Small => out.push_str("Small "),
            BushSize::Medium => out.push_str("Medium "),
            BushSize::Large => out.push_str("Large "),
            BushSize::Tea if self.age < TEA_BUSH_DAYS_TO_MATURE => out.push_str("Tea Sapling"),
            BushSize::Tea => out.push_str("Tea Bush"),
            BushSize::GoldenWalnut => out.push_str("Golden Walnut "),
            BushSize::Other(_) => {}
        }

        // Tea bushes already name themselves.
        if self.size != BushSize::Tea {
            out.push_str("Bush");
        }

        out.trim().to_string()
    }
}
