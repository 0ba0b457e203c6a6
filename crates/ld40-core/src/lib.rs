//! Core types and definitions for the LD40 prototype.
//!
//! This crate defines the vocabulary shared across all other crates:
//! per-tick input, player and beam state, snapshots, configuration and
//! constants. It has no terrain logic and no platform dependency.

pub mod commands;
pub mod config;
pub mod constants;
pub mod state;
pub mod types;
