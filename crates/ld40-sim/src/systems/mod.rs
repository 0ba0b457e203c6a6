//! Systems that update the game world each tick.
//!
//! Systems are plain functions over the state they touch. They do not
//! own state; `GameWorld` passes everything in explicitly.

pub mod grounding;
pub mod look;
pub mod movement;
pub mod weapon;
