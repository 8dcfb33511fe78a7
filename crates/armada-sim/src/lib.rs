//! Simulation engine for ARMADA.
//!
//! Owns the hecs ECS world, runs the steering and movement systems at a
//! fixed tick rate, and produces FleetSnapshots for external consumers.

pub mod engine;
pub mod scenario;
pub mod systems;
pub mod world_setup;

pub use armada_core as core;
pub use engine::SimulationEngine;

#[cfg(test)]
mod tests;
