//! Core types and definitions for the ARMADA fleet simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, path geometry, state snapshots, and constants.
//! It has no dependency on hecs or any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod error;
pub mod path;
pub mod state;
pub mod types;
