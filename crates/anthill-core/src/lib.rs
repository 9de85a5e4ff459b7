//! Core types and definitions for the ANTHILL simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, stat tables, commands, state snapshots, events, errors and
//! constants. It has no dependency on any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod errors;
pub mod events;
pub mod state;
pub mod stats;
pub mod types;

#[cfg(test)]
mod tests;
