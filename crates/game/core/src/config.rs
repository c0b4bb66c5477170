use crate::error::ConfigError;

/// Toggles and tunables read by the classifier and the tile cursor.
///
/// Passed explicitly into every call that needs it; nothing in this crate
/// reads configuration from global state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AccessConfig {
    /// Describe flooring, pathways and stepping stones.
    pub read_flooring: bool,
    /// Prefix soil descriptions with "Watered"/"Unwatered".
    pub watered_toggle: bool,
    pub tile_cursor: TileCursorConfig,
}

impl AccessConfig {
    pub const DEFAULT_READ_FLOORING: bool = false;
    pub const DEFAULT_WATERED_TOGGLE: bool = true;

    pub const fn new() -> Self {
        Self {
            read_flooring: Self::DEFAULT_READ_FLOORING,
            watered_toggle: Self::DEFAULT_WATERED_TOGGLE,
            tile_cursor: TileCursorConfig::new(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tile_cursor.validate()
    }
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Tile cursor movement and pointer settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TileCursorConfig {
    /// Pixels moved by a precise cursor step.
    pub precise_movement_distance: i32,
    /// Reject cursor moves whose destination is not visible on screen.
    pub limit_to_screen: bool,
    /// Keep the host pointer on the cursor every frame.
    pub snap_mouse: bool,
}

impl TileCursorConfig {
    pub const DEFAULT_PRECISE_MOVEMENT_DISTANCE: i32 = 8;
    pub const DEFAULT_LIMIT_TO_SCREEN: bool = false;
    pub const DEFAULT_SNAP_MOUSE: bool = true;

    pub const fn new() -> Self {
        Self {
            precise_movement_distance: Self::DEFAULT_PRECISE_MOVEMENT_DISTANCE,
            limit_to_screen: Self::DEFAULT_LIMIT_TO_SCREEN,
            snap_mouse: Self::DEFAULT_SNAP_MOUSE,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.precise_movement_distance < 1 {
            return Err(ConfigError::InvalidPreciseDistance(
                self.precise_movement_distance,
            ));
        }
        Ok(())
    }
}

impl Default for TileCursorConfig {
    fn default() -> Self {
        Self::new()
    }
}
