//! Scenario definitions — declarative fleet setup.
//!
//! A `Scenario` lists path geometries, ships with their behavior stacks,
//! and a disturbance schedule. It is plain serializable data; validation
//! and spawning happen in `world_setup`.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use armada_core::commands::ParamPreset;
use armada_core::components::SteeringParams;
use armada_core::constants::*;
use armada_core::types::{PathId, ShipId};

use crate::systems::disturbance::DisturbanceEntry;

/// A path to register before any ship references it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathSpec {
    pub id: PathId,
    pub waypoints: Vec<Vec3>,
    pub looped: bool,
}

/// One behavior in a ship's stack, in priority order.
///
/// `FlockOffset` carries no offset here: the leader-relative offset is
/// captured from the initial poses when the fleet is spawned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BehaviorSpec {
    Seek {
        target: Vec3,
        weight: f32,
    },
    Arrive {
        target: Vec3,
        slowing_distance: f32,
        weight: f32,
    },
    Pursue {
        target: ShipId,
        weight: f32,
    },
    FollowPath {
        path: PathId,
        waypoint_distance: f32,
        weight: f32,
    },
    Wander {
        jitter: f32,
        wideness: f32,
        weight: f32,
    },
    FlockOffset {
        leader: ShipId,
        slowing_distance: f32,
        weight: f32,
    },
}

/// One ship: initial pose, tuning, and its behavior stack.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipSpec {
    pub id: ShipId,
    pub position: Vec3,
    pub rotation: Quat,
    pub params: SteeringParams,
    pub behaviors: Vec<BehaviorSpec>,
}

/// A complete scenario.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scenario {
    pub paths: Vec<PathSpec>,
    pub ships: Vec<ShipSpec>,
    pub disturbances: Vec<DisturbanceEntry>,
}

impl Scenario {
    /// Demo fleet: a leader patrolling a looped route with a three-ship
    /// wing in formation, a wandering quarry, and a pursuer chasing it.
    pub fn demo_fleet() -> Self {
        let route = PathSpec {
            id: PathId(0),
            waypoints: vec![
                Vec3::new(0.0, 0.0, 100.0),
                Vec3::new(120.0, 10.0, 100.0),
                Vec3::new(120.0, 0.0, -60.0),
                Vec3::new(-40.0, -10.0, -60.0),
            ],
            looped: true,
        };

        let leader = ShipSpec {
            id: ShipId(0),
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            params: SteeringParams::default(),
            behaviors: vec![BehaviorSpec::FollowPath {
                path: PathId(0),
                waypoint_distance: DEFAULT_WAYPOINT_DISTANCE,
                weight: 1.0,
            }],
        };

        // Wing ships start in a vee behind the leader; their offsets are
        // captured from these initial positions.
        let wing_slots = [
            Vec3::new(-6.0, 0.0, -8.0),
            Vec3::new(6.0, 0.0, -8.0),
            Vec3::new(0.0, 3.0, -14.0),
        ];
        let mut ships = vec![leader];
        for (i, slot) in wing_slots.iter().enumerate() {
            ships.push(ShipSpec {
                id: ShipId(1 + i as u32),
                position: *slot,
                rotation: Quat::IDENTITY,
                params: SteeringParams::default(),
                behaviors: vec![BehaviorSpec::FlockOffset {
                    leader: ShipId(0),
                    slowing_distance: DEFAULT_SLOWING_DISTANCE,
                    weight: 1.0,
                }],
            });
        }

        // A quarry wandering the volume, and a hunter pursuing it with a
        // touch of wander so the chase never degenerates to a straight line.
        ships.push(ShipSpec {
            id: ShipId(10),
            position: Vec3::new(60.0, 20.0, 0.0),
            rotation: Quat::IDENTITY,
            params: SteeringParams {
                max_speed: 6.0,
                ..Default::default()
            },
            behaviors: vec![BehaviorSpec::Wander {
                jitter: DEFAULT_WANDER_JITTER,
                wideness: DEFAULT_WANDER_WIDENESS,
                weight: 1.0,
            }],
        });
        ships.push(ShipSpec {
            id: ShipId(11),
            position: Vec3::new(-60.0, 20.0, 0.0),
            rotation: Quat::IDENTITY,
            params: SteeringParams::default(),
            behaviors: vec![
                BehaviorSpec::Pursue {
                    target: ShipId(10),
                    weight: 1.0,
                },
                BehaviorSpec::Wander {
                    jitter: 40.0,
                    wideness: 4.0,
                    weight: 0.3,
                },
            ],
        });

        // Periodic parameter shake-ups in the spirit of the scene's timed
        // "explosion" presets: scatter, then regroup.
        let disturbances = vec![
            DisturbanceEntry {
                at_tick: 900, // 30 seconds
                preset: ParamPreset {
                    wander_jitter: Some(300.0),
                    wander_wideness: Some(30.0),
                    wander_weight: Some(2.0),
                    ..Default::default()
                },
                applied: false,
            },
            DisturbanceEntry {
                at_tick: 1800, // 60 seconds
                preset: ParamPreset {
                    wander_jitter: Some(DEFAULT_WANDER_JITTER),
                    wander_wideness: Some(DEFAULT_WANDER_WIDENESS),
                    wander_weight: Some(1.0),
                    flock_weight: Some(1.5),
                    ..Default::default()
                },
                applied: false,
            },
        ];

        Self {
            paths: vec![route],
            ships,
            disturbances,
        }
    }
}
