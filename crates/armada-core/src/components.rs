//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Steering math lives in armada-steering, systems in armada-sim.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::path::PathCursor;
use crate::types::{PathId, ShipId};

/// Marks an entity as a steerable ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ship;

/// World-space pose exposed to the rendering sink.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Transform {
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
        }
    }
}

/// Kinematic state integrated each tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Kinematics {
    pub velocity: Vec3,
    /// Accumulated steering force for the current tick.
    pub force: Vec3,
    /// Acceleration applied this tick (force / mass), surfaced in
    /// snapshots for debug display.
    pub acceleration: Vec3,
}

/// Per-ship steering limits and motion tuning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SteeringParams {
    pub mass: f32,
    pub max_speed: f32,
    /// Force budget per tick; accumulation truncates here.
    pub max_force: f32,
    /// Exponential velocity damping per second.
    pub damping: f32,
    /// How strongly lateral acceleration tilts the up vector.
    pub banking: f32,
}

impl Default for SteeringParams {
    fn default() -> Self {
        Self {
            mass: DEFAULT_MASS,
            max_speed: DEFAULT_MAX_SPEED,
            max_force: DEFAULT_MAX_FORCE,
            damping: DEFAULT_DAMPING,
            banking: DEFAULT_BANKING,
        }
    }
}

/// One steering behavior, carrying only the state it needs.
///
/// A closed enum rather than trait objects: the behavior set is fixed and
/// each variant's state is plain data that serializes with the scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Behavior {
    /// Head for a fixed point at full speed.
    Seek { target: Vec3 },
    /// Head for a fixed point, ramping speed down inside the slowing radius.
    Arrive { target: Vec3, slowing_distance: f32 },
    /// Chase another ship, leading its predicted position.
    Pursue { target: ShipId },
    /// Follow a registered route; the cursor is this follower's own.
    FollowPath {
        path: PathId,
        cursor: PathCursor,
        waypoint_distance: f32,
    },
    /// Random-walk a persistent jitter target constrained to a sphere,
    /// biased forward through the ship's orientation.
    Wander {
        jitter: f32,
        wideness: f32,
        /// Internal jitter target, local space. Persists across ticks.
        target: Vec3,
    },
    /// Hold a formation slot relative to a leader. The local offset is
    /// captured once at spawn and never recomputed.
    FlockOffset {
        leader: ShipId,
        local_offset: Vec3,
        slowing_distance: f32,
    },
}

/// A behavior with its blend weight and enable flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorEntry {
    pub behavior: Behavior,
    pub weight: f32,
    pub enabled: bool,
}

impl BehaviorEntry {
    pub fn new(behavior: Behavior, weight: f32) -> Self {
        Self {
            behavior,
            weight,
            enabled: true,
        }
    }
}

/// Ordered behavior list. Registration order is priority order: earlier
/// entries claim force budget first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BehaviorSet {
    pub entries: Vec<BehaviorEntry>,
}
