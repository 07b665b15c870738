//! Fog-of-war tile maze.
//!
//! The simulation (`core`) is independent of the window; `render` draws it
//! onto any `Surface`, and the binary wires both to raylib.

pub mod audio_manager;
pub mod core;
pub mod progress;
pub mod render;
pub mod settings;

pub use crate::core::fog::FogState;
pub use crate::core::maze::{TileGrid, TileKind, TILE_SIZE};
pub use crate::core::player::{Direction, Player};
pub use crate::core::session::{LevelSession, LevelUnlock, SessionState, TickOutcome};
pub use crate::progress::Progress;
pub use crate::settings::Settings;
