//! Core game types and logic (map, player, game state, scores).
//!
//! Re-exports:
//! - `map`: Tile grid loading, validation and world-space lookup
//! - `player`: Player state and collision-checked movement
//! - `game`: Simulation state and the per-frame tick
//! - `process_events`: Input polling
//! - `scores`: High-score store boundary and async client
//! - `hud`: Overlay and notice state over the 3D view

pub mod game;
pub mod hud;
pub mod map;
pub mod player;
pub mod process_events;
pub mod scores;
