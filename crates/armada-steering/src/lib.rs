//! Steering math for ARMADA.
//!
//! Pure functions from agent state and target state to desired forces,
//! the weighted prioritized truncated force accumulator, and the kinematic
//! integrator. No ECS dependency — operates on plain data.

pub mod accumulator;
pub mod forces;
pub mod integrator;

pub use armada_core as core;
