//! Weighted prioritized truncated running sum.
//!
//! Behaviors are evaluated in registration order; each weighted force is
//! summed until the budget (`max_force`) is spent, at which point the sum
//! is clamped to the budget and later behaviors are skipped. Earlier
//! behaviors therefore win force budget first.

use glam::Vec3;

/// Running force sum with a hard magnitude budget.
#[derive(Debug, Clone, Copy)]
pub struct ForceAccumulator {
    force: Vec3,
    max_force: f32,
    saturated: bool,
}

impl ForceAccumulator {
    pub fn new(max_force: f32) -> Self {
        Self {
            force: Vec3::ZERO,
            max_force,
            saturated: false,
        }
    }

    /// Add one behavior's weighted contribution. Returns `false` once the
    /// budget is spent; the caller must stop evaluating further behaviors.
    pub fn add_weighted(&mut self, force: Vec3, weight: f32) -> bool {
        if self.saturated {
            return false;
        }
        self.force += force * weight;
        if self.force.length() >= self.max_force {
            self.force = self.force.clamp_length_max(self.max_force);
            self.saturated = true;
            return false;
        }
        true
    }

    /// The accumulated force. Never exceeds `max_force` in magnitude.
    pub fn total(&self) -> Vec3 {
        self.force
    }

    pub fn is_saturated(&self) -> bool {
        self.saturated
    }
}
