//! Error types for game-core.
//!
//! Classification and lookup never fail; they degrade to fallback values.
//! The only fallible surface is configuration validation.

/// Invalid configuration values.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Precise cursor steps must move at least one pixel.
    #[error("precise movement distance must be at least 1 pixel, got {0}")]
    InvalidPreciseDistance(i32),
}
