//! Tile cursor for browsing the map independently of the player.
//!
//! The cursor is an inspection point expressed as an offset from the
//! player's center. Unlocked, it sits one tile in front of the player plus a
//! free viewing offset that snaps back whenever the player moves or turns.
//! Locked, it keeps a fixed offset from the player regardless of facing.

mod movement;

pub use movement::{CursorMove, CursorMovement, MoveKind, ViewerAction};

use game_core::{Facing, PixelVector, Position, TileCursorConfig};

use crate::host::{HostOracle, InputSource, Narrator, TileDescriber};

/// Relative-offset lock state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorLock {
    #[default]
    Unlocked,
    /// Cursor pinned at this offset from the player's center.
    Locked(PixelVector),
}

/// Host collaborators needed while handling input.
pub struct ViewerEnv<'a> {
    pub host: &'a dyn HostOracle,
    pub describer: &'a dyn TileDescriber,
    pub narrator: &'a mut dyn Narrator,
    pub config: &'a TileCursorConfig,
}

/// Cursor state for one session.
///
/// None of the stored vectors include the viewport; it is applied only when
/// talking to the screen.
#[derive(Clone, Debug, Default)]
pub struct TileViewer {
    viewing_offset: PixelVector,
    lock: CursorLock,
    prev_player_position: PixelVector,
    prev_facing: PixelVector,
}

impl TileViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lock(&self) -> CursorLock {
        self.lock
    }

    pub fn is_locked(&self) -> bool {
        matches!(self.lock, CursorLock::Locked(_))
    }

    /// Free offset applied on top of the facing tile while unlocked.
    pub fn viewing_offset(&self) -> PixelVector {
        self.viewing_offset
    }

    /// Offset of the cursor from the player's center.
    pub fn relative_offset(&self, facing: Option<Facing>) -> PixelVector {
        match self.lock {
            CursorLock::Locked(offset) => offset,
            CursorLock::Unlocked => Facing::tile_vector(facing) + self.viewing_offset,
        }
    }

    /// Cursor position in map pixels.
    pub fn cursor_position(&self, host: &dyn HostOracle) -> PixelVector {
        host.player_position() + self.relative_offset(host.player_facing())
    }

    /// Tile under the cursor.
    pub fn viewing_tile(&self, host: &dyn HostOracle) -> Position {
        self.cursor_position(host).to_tile()
    }

    /// Handles at most one viewer action for this input tick.
    ///
    /// Actions are checked in [`ViewerAction::PRIORITY`] order and only the
    /// first pressed one is acted on. Returns that action, whether or not the
    /// resulting move was accepted.
    pub fn handle_input(
        &mut self,
        input: &dyn InputSource,
        env: &mut ViewerEnv<'_>,
    ) -> Option<ViewerAction> {
        let action = ViewerAction::PRIORITY
            .into_iter()
            .find(|&action| input.just_pressed(action))?;

        match action.cursor_move() {
            Some(cursor_move) => {
                self.move_cursor(cursor_move, env);
            }
            None => self.toggle_lock(env.host, env.narrator),
        }
        Some(action)
    }

    /// Flips the relative-offset lock and announces the new state.
    ///
    /// Locking captures the current facing tile plus viewing offset; unlocking
    /// discards the locked offset and leaves the viewing offset untouched.
    pub fn toggle_lock(&mut self, host: &dyn HostOracle, narrator: &mut dyn Narrator) {
        self.lock = match self.lock {
            CursorLock::Unlocked => {
                CursorLock::Locked(Facing::tile_vector(host.player_facing()) + self.viewing_offset)
            }
            CursorLock::Locked(_) => CursorLock::Unlocked,
        };

        let state = if self.is_locked() { "enabled" } else { "disabled" };
        narrator.speak(&format!("Relative cursor lock {state}."), true);
    }

    /// Moves the cursor and announces what is under it.
    ///
    /// Rejected moves change nothing and say nothing. Returns whether the
    /// move was accepted.
    pub fn move_cursor(&mut self, cursor_move: CursorMove, env: &mut ViewerEnv<'_>) -> bool {
        let delta = cursor_move.to_delta(env.config.precise_movement_distance);
        if !self.try_move(delta, env.host, env.config) {
            tracing::trace!("Cursor move by {} rejected", delta);
            return false;
        }

        let position = self.cursor_position(env.host);
        let tile = position.to_tile();
        let name = env.describer.describe_at(tile).unwrap_or_else(|| {
            if env.describer.is_blocked_at(tile) {
                "blocked".to_string()
            } else {
                "empty".to_string()
            }
        });

        let text = match cursor_move.kind {
            MoveKind::Precise => format!("{name}, {}, {}", position.x, position.y),
            MoveKind::Tile => format!("{name}, {}, {}", tile.x, tile.y),
        };
        tracing::debug!("Cursor at {} (tile {}): {}", position, tile, name);
        env.narrator.speak(&text, true);
        true
    }

    fn try_move(
        &mut self,
        delta: PixelVector,
        host: &dyn HostOracle,
        config: &TileCursorConfig,
    ) -> bool {
        let Some(destination) = self.cursor_position(host).checked_add(delta) else {
            return false;
        };
        if !is_on_map(destination, host.map_size()) {
            return false;
        }
        if config.limit_to_screen && !host.is_on_screen(destination) {
            return false;
        }

        match &mut self.lock {
            CursorLock::Locked(offset) => *offset += delta,
            CursorLock::Unlocked => self.viewing_offset += delta,
        }
        true
    }

    /// Per-frame bookkeeping.
    ///
    /// Resets the viewing offset when the player moved or turned since the
    /// previous frame (the locked offset is never reset), then optionally
    /// snaps the host pointer onto the cursor.
    pub fn update(&mut self, host: &mut dyn HostOracle, config: &TileCursorConfig) {
        let facing = Facing::tile_vector(host.player_facing());
        let player = host.player_position();

        if facing != self.prev_facing || player != self.prev_player_position {
            self.viewing_offset = PixelVector::ZERO;
        }
        self.prev_facing = facing;
        self.prev_player_position = player;

        if config.snap_mouse {
            self.snap_pointer(host);
        }
    }

    /// Moves the pointer onto the cursor unless it is off screen or over a menu.
    fn snap_pointer(&self, host: &mut dyn HostOracle) -> bool {
        let cursor = self.cursor_position(host);
        if !host.is_on_screen(cursor) {
            return false;
        }

        let screen_point = host.viewport().to_screen(cursor);
        if host.is_over_menu(screen_point) {
            return false;
        }

        host.set_pointer_position(screen_point);
        true
    }
}

/// Map bounds are inclusive on the far edges.
fn is_on_map(position: PixelVector, (width, height): (i32, i32)) -> bool {
    (0..=width).contains(&position.x) && (0..=height).contains(&position.y)
}
