//! Fundamental geometric and simulation types.

use glam::{Mat3, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Stable identity for a ship, used for cross-agent references
/// (pursuit targets, formation leaders) without holding entity handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShipId(pub u32);

/// Identity of a registered path geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathId(pub u32);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f32 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt() as f64;
    }
}

/// Build a rotation that faces `forward` with the head tilted toward `up`
/// (+Z forward, +Y up convention).
///
/// Degenerate inputs fall back rather than producing NaN: a near-zero
/// forward returns identity, and an `up` parallel to `forward` falls back
/// to the world up axis.
pub fn look_rotation(forward: Vec3, up: Vec3) -> Quat {
    if forward.length_squared() < f32::EPSILON {
        return Quat::IDENTITY;
    }
    let fwd = forward.normalize();

    let mut right = up.cross(fwd);
    if right.length_squared() < f32::EPSILON {
        right = Vec3::Y.cross(fwd);
        if right.length_squared() < f32::EPSILON {
            // Forward is world-up itself; any horizontal right axis works.
            right = Vec3::X;
        }
    }
    let right = right.normalize();
    let ortho_up = fwd.cross(right);

    Quat::from_mat3(&Mat3::from_cols(right, ortho_up, fwd))
}
