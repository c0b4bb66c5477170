//! In-game calendar state read by seasonal classification rules.

/// Season of the in-game year.
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
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Season {
    #[default]
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// Maps the engine's season number (0 = spring .. 3 = winter).
    pub const fn from_number(number: i32) -> Option<Season> {
        match number {
            0 => Some(Season::Spring),
            1 => Some(Season::Summer),
            2 => Some(Season::Fall),
            3 => Some(Season::Winter),
            _ => None,
        }
    }
}

/// Current date as seen from one location.
///
/// Locations such as greenhouses and islands can report a season that
/// differs from the global one, so the host resolves it per location.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Calendar {
    pub season: Season,
    pub day_of_month: u32,
}

impl Calendar {
    pub const fn new(season: Season, day_of_month: u32) -> Self {
        Self {
            season,
            day_of_month,
        }
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new(Season::Spring, 1)
    }
}
