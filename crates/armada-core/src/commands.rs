//! Commands accepted by the simulation engine.

use serde::{Deserialize, Serialize};

/// A set of parameter overrides applied fleet-wide when a disturbance
/// fires. Every field is optional; absent fields leave the current value
/// alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ParamPreset {
    pub max_speed: Option<f32>,
    pub max_force: Option<f32>,
    pub damping: Option<f32>,
    pub wander_jitter: Option<f32>,
    pub wander_wideness: Option<f32>,
    pub wander_weight: Option<f32>,
    pub pursue_weight: Option<f32>,
    pub flock_weight: Option<f32>,
}

/// Commands from the driver (CLI, UI, or test harness) to the engine.
/// Processed at the next tick boundary, in arrival order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DriverCommand {
    /// Pause the simulation (ticks still produce snapshots, time holds).
    Pause,
    /// Resume a paused simulation.
    Resume,
    /// Set the wall-clock pacing multiplier (clamped to 0..=4). Pacing
    /// only: the driver shortens or stretches its sleep between ticks,
    /// while the simulation step itself stays fixed at `DT`, so results
    /// remain identical at any scale.
    SetTimeScale { scale: f64 },
    /// Apply a parameter preset to the whole fleet immediately.
    TriggerDisturbance { preset: ParamPreset },
}
