//! Game update for the terrain walker.
//!
//! Owns the terrain and the player, runs the player systems once per tick
//! and produces WorldSnapshots plus camera transforms for the frontend.

pub mod camera;
pub mod engine;
pub mod systems;

pub use ld40_core as core;
pub use engine::GameWorld;
