//! Cursor actions and movement deltas.

use game_core::{Facing, PixelVector, TILE_SIZE};

/// Tile viewer input actions, in the order they are checked each tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ViewerAction {
    ToggleRelativeLock,
    PreciseUp,
    PreciseRight,
    PreciseDown,
    PreciseLeft,
    Up,
    Right,
    Down,
    Left,
}

impl ViewerAction {
    /// Priority order: the first pressed action in this list is the only one
    /// handled in a tick.
    pub const PRIORITY: [ViewerAction; 9] = [
        ViewerAction::ToggleRelativeLock,
        ViewerAction::PreciseUp,
        ViewerAction::PreciseRight,
        ViewerAction::PreciseDown,
        ViewerAction::PreciseLeft,
        ViewerAction::Up,
        ViewerAction::Right,
        ViewerAction::Down,
        ViewerAction::Left,
    ];

    /// The cursor move this action requests, if it is a move at all.
    pub fn cursor_move(self) -> Option<CursorMove> {
        let (direction, kind) = match self {
            ViewerAction::ToggleRelativeLock => return None,
            ViewerAction::PreciseUp => (Facing::Up, MoveKind::Precise),
            ViewerAction::PreciseRight => (Facing::Right, MoveKind::Precise),
            ViewerAction::PreciseDown => (Facing::Down, MoveKind::Precise),
            ViewerAction::PreciseLeft => (Facing::Left, MoveKind::Precise),
            ViewerAction::Up => (Facing::Up, MoveKind::Tile),
            ViewerAction::Right => (Facing::Right, MoveKind::Tile),
            ViewerAction::Down => (Facing::Down, MoveKind::Tile),
            ViewerAction::Left => (Facing::Left, MoveKind::Tile),
        };
        Some(CursorMove { direction, kind })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveKind {
    /// Configurable pixel step; announced in pixels.
    Precise,
    /// One whole tile; announced in tile coordinates.
    Tile,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorMove {
    pub direction: Facing,
    pub kind: MoveKind,
}

/// Helper trait for converting cursor moves to pixel deltas.
pub trait CursorMovement {
    fn to_delta(&self, precise_distance: i32) -> PixelVector;
}

impl CursorMovement for CursorMove {
    fn to_delta(&self, precise_distance: i32) -> PixelVector {
        match self.kind {
            MoveKind::Precise => self.direction.scaled(precise_distance),
            MoveKind::Tile => self.direction.scaled(TILE_SIZE),
        }
    }
}
