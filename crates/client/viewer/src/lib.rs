//! Interactive tile cursor for spoken map exploration.
//!
//! The host engine drives a [`TileViewer`] once per input tick
//! ([`TileViewer::handle_input`]) and once per frame ([`TileViewer::update`]),
//! supplying its state through the traits in [`host`]. Everything the cursor
//! announces comes from a [`TileDescriber`]; [`WorldTileDescriber`] composes
//! the terrain classifier with the static tile registry for hosts that do not
//! bring their own.
pub mod config;
pub mod cursor;
pub mod describer;
pub mod host;
pub mod logging;

pub use cursor::{
    CursorLock, CursorMove, CursorMovement, MoveKind, TileViewer, ViewerAction, ViewerEnv,
};
pub use describer::{TerrainOracle, WorldTileDescriber};
pub use host::{HostOracle, InputSource, Narrator, TileDescriber, Viewport};
pub use logging::{LogTarget, setup_logging};
