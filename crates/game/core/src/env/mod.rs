//! Traits describing read-only engine data.
//!
//! Oracles expose engine-owned lookups (item names today) so classification
//! stays decoupled from any concrete host.
mod items;

pub use items::{ItemId, ItemNameTable, ItemOracle};
