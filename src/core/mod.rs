//! Core game types and logic (maze, fog, avatar, level session, input).
//!
//! Re-exports:
//! - `maze`: Tile layout parsing and classification
//! - `fog`: Fog-of-war discovery flags
//! - `player`: Avatar movement and wall collision
//! - `session`: Per-frame simulation of one level
//! - `process_events`: Keyboard bindings to movement intent

pub mod fog;
pub mod maze;
pub mod player;
pub mod process_events;
pub mod session;
