//! ANTHILL headless application.
//!
//! Drives the simulation engine from a game loop thread, reads runtime
//! configuration from the environment and provides a scripted autopilot
//! for unattended runs.

pub mod autopilot;
pub mod config;
pub mod game_loop;
pub mod state;

pub use anthill_core as core;
