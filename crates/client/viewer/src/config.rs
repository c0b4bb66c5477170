//! Environment overrides for [`AccessConfig`].
//!
//! Hosts usually load `config.toml` through `game_content::ContentFactory`
//! and then layer these overrides on top, so a single session can be tuned
//! without editing the file.

use std::env;

use game_content::ContentFactory;
use game_core::AccessConfig;

/// Applies process environment overrides to a base configuration.
///
/// Environment variables:
/// - `TILE_CURSOR_PRECISE_DISTANCE` - Pixels per precise cursor step (clamped to at least 1)
/// - `TILE_CURSOR_LIMIT_TO_SCREEN` - Reject cursor moves that leave the screen
/// - `TILE_CURSOR_SNAP_MOUSE` - Keep the pointer on the cursor
/// - `READ_FLOORING` - Describe flooring and paths
/// - `READ_WATERED_STATE` - Prefix soil with its watered state
///
/// Unset or unparsable variables leave the base value in place.
pub fn from_env(base: AccessConfig) -> AccessConfig {
    let mut config = base;

    if let Some(distance) = read_env::<i32>("TILE_CURSOR_PRECISE_DISTANCE") {
        config.tile_cursor.precise_movement_distance = distance.max(1);
    }
    if let Some(limit) = read_env_bool("TILE_CURSOR_LIMIT_TO_SCREEN") {
        config.tile_cursor.limit_to_screen = limit;
    }
    if let Some(snap) = read_env_bool("TILE_CURSOR_SNAP_MOUSE") {
        config.tile_cursor.snap_mouse = snap;
    }
    if let Some(read) = read_env_bool("READ_FLOORING") {
        config.read_flooring = read;
    }
    if let Some(read) = read_env_bool("READ_WATERED_STATE") {
        config.watered_toggle = read;
    }

    config
}

/// Loads the data directory's configuration and applies environment overrides.
pub fn load(factory: &ContentFactory) -> anyhow::Result<AccessConfig> {
    let config = from_env(factory.load_config()?);
    tracing::debug!("Access configuration: {:?}", config);
    Ok(config)
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
