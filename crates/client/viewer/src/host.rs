//! Collaborators supplied by the host engine.
//!
//! The viewer never talks to a renderer, input device or speech engine
//! directly; the host implements these traits and hands them in per call.
use game_core::{Facing, PixelVector, Position};

use crate::cursor::ViewerAction;

/// Visible part of the map, in map pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn origin(&self) -> PixelVector {
        PixelVector::new(self.x, self.y)
    }

    /// Whether a map-pixel point is strictly inside the visible area.
    pub const fn contains(&self, point: PixelVector) -> bool {
        point.x > self.x
            && point.x < self.x + self.width
            && point.y > self.y
            && point.y < self.y + self.height
    }

    /// Converts a map-pixel point into screen pixels.
    pub fn to_screen(&self, point: PixelVector) -> PixelVector {
        point - self.origin()
    }
}

/// Player, map and screen state owned by the host engine.
pub trait HostOracle {
    /// Center of the player's bounding box, in map pixels.
    fn player_position(&self) -> PixelVector;

    /// Direction the player faces, `None` when the host reports an unknown one.
    fn player_facing(&self) -> Option<Facing>;

    /// Width and height of the current map, in pixels.
    fn map_size(&self) -> (i32, i32);

    fn viewport(&self) -> Viewport;

    /// Whether an on-screen menu or toolbar covers this screen point.
    fn is_over_menu(&self, screen_point: PixelVector) -> bool;

    /// Moves the pointer device to a screen point.
    fn set_pointer_position(&mut self, screen_point: PixelVector);

    fn is_on_screen(&self, map_point: PixelVector) -> bool {
        self.viewport().contains(map_point)
    }
}

/// Describes whatever dynamically occupies a tile.
pub trait TileDescriber {
    fn describe_at(&self, tile: Position) -> Option<String>;

    fn is_blocked_at(&self, tile: Position) -> bool;
}

/// Speech output.
pub trait Narrator {
    fn speak(&mut self, text: &str, interrupt: bool);
}

/// Discrete "just pressed" key events for the current input tick.
pub trait InputSource {
    fn just_pressed(&self, action: ViewerAction) -> bool;
}
