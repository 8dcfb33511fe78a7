//! Scheduled fleet-wide parameter disturbances.
//!
//! A scenario carries a table of tick-stamped presets; when one comes due
//! its overrides are applied to every ship's tuning and to matching
//! behavior entries. The table is plain injected data, fully decoupled
//! from per-ship steering logic.

use hecs::World;
use serde::{Deserialize, Serialize};

use armada_core::commands::ParamPreset;
use armada_core::components::{Behavior, BehaviorSet, SteeringParams};

/// One scheduled disturbance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisturbanceEntry {
    /// Tick at which this preset fires.
    pub at_tick: u64,
    pub preset: ParamPreset,
    /// Whether this entry has already fired.
    #[serde(default)]
    pub applied: bool,
}

/// The complete disturbance schedule for a scenario.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisturbanceSchedule {
    pub entries: Vec<DisturbanceEntry>,
}

/// Check the schedule and apply any due presets.
pub fn run(world: &mut World, schedule: &mut DisturbanceSchedule, current_tick: u64) {
    for entry in &mut schedule.entries {
        if !entry.applied && current_tick >= entry.at_tick {
            log::info!("disturbance fired at tick {current_tick}: {:?}", entry.preset);
            apply_preset(world, &entry.preset);
            entry.applied = true;
        }
    }
}

/// Apply a preset's overrides to the whole fleet.
pub fn apply_preset(world: &mut World, preset: &ParamPreset) {
    for (_entity, (params, set)) in world.query_mut::<(&mut SteeringParams, &mut BehaviorSet)>() {
        if let Some(v) = preset.max_speed {
            params.max_speed = v;
        }
        if let Some(v) = preset.max_force {
            params.max_force = v;
        }
        if let Some(v) = preset.damping {
            params.damping = v;
        }

        for entry in &mut set.entries {
            match &mut entry.behavior {
                Behavior::Wander {
                    jitter, wideness, ..
                } => {
                    if let Some(v) = preset.wander_jitter {
                        *jitter = v;
                    }
                    if let Some(v) = preset.wander_wideness {
                        *wideness = v;
                    }
                    if let Some(v) = preset.wander_weight {
                        entry.weight = v;
                    }
                }
                Behavior::Pursue { .. } => {
                    if let Some(v) = preset.pursue_weight {
                        entry.weight = v;
                    }
                }
                Behavior::FlockOffset { .. } => {
                    if let Some(v) = preset.flock_weight {
                        entry.weight = v;
                    }
                }
                _ => {}
            }
        }
    }
}
