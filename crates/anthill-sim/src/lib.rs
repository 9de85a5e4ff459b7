//! Simulation engine for ANTHILL.
//!
//! Owns the hecs ECS world, the enemy path and the wave director, runs the
//! per-frame systems in a fixed order and produces GameStateSnapshots for
//! the frontend.

pub mod economy;
pub mod engine;
pub mod path;
pub mod placement;
pub mod systems;
pub mod world_setup;

pub use anthill_core as core;
pub use engine::{SimConfig, SimulationEngine};
