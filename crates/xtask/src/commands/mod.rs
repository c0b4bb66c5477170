//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod tiles;

pub use tiles::{TileCheck, TileList, TileQuery};
