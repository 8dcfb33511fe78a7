//! Snapshot state handed to external consumers (renderer, CLI, tests).

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::types::ShipId;

/// Per-ship view: final pose and kinematics after a tick. This is the
/// whole surface a renderer needs; the core never draws anything itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipView {
    pub id: ShipId,
    pub position: Vec3,
    pub rotation: Quat,
    pub velocity: Vec3,
    pub speed: f32,
    pub force: Vec3,
    pub acceleration: Vec3,
}

/// Engine lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    /// No scenario loaded yet.
    #[default]
    Idle,
    Active,
    Paused,
}

/// Complete per-tick output of the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetSnapshot {
    pub tick: u64,
    pub elapsed_secs: f64,
    pub phase: SimPhase,
    pub ships: Vec<ShipView>,
}
