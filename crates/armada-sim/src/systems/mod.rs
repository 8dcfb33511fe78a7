//! Simulation systems, run in a fixed order each tick.

pub mod disturbance;
pub mod movement;
pub mod snapshot;
pub mod steering;
