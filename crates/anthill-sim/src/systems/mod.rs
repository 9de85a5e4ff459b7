//! Systems that operate on the simulation world each frame.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components or is passed in
//! by the engine.

pub mod bounty;
pub mod cleanup;
pub mod enemies;
pub mod particles;
pub mod projectiles;
pub mod snapshot;
pub mod towers;
pub mod waves;
