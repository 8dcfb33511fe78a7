//! Scenario validation and entity spawning.
//!
//! All configuration errors surface here, before the first tick: missing
//! references, empty paths, and non-positive tuning values are rejected
//! instead of producing NaN motion at runtime.

use std::collections::{HashMap, HashSet};

use hecs::World;

use armada_core::components::*;
use armada_core::error::ConfigError;
use armada_core::path::{PathCursor, PathGeometry};
use armada_core::types::{PathId, ShipId};

use crate::scenario::{BehaviorSpec, Scenario, ShipSpec};
use crate::systems::disturbance::DisturbanceSchedule;

/// Validate a scenario, register its paths, and spawn its fleet.
/// Returns the scenario's disturbance schedule.
pub fn load_scenario(
    world: &mut World,
    paths: &mut HashMap<PathId, PathGeometry>,
    scenario: &Scenario,
) -> Result<DisturbanceSchedule, ConfigError> {
    validate(scenario)?;

    paths.clear();
    for spec in &scenario.paths {
        paths.insert(spec.id, PathGeometry::new(spec.waypoints.clone(), spec.looped)?);
    }

    // Initial poses by id, for capturing formation offsets.
    let poses: HashMap<ShipId, &ShipSpec> =
        scenario.ships.iter().map(|s| (s.id, s)).collect();

    for spec in &scenario.ships {
        spawn_ship(world, spec, &poses);
    }

    log::info!(
        "scenario loaded: {} ships, {} paths, {} scheduled disturbances",
        scenario.ships.len(),
        scenario.paths.len(),
        scenario.disturbances.len()
    );

    Ok(DisturbanceSchedule {
        entries: scenario.disturbances.clone(),
    })
}

/// Spawn one ship with its behavior stack resolved to components.
fn spawn_ship(world: &mut World, spec: &ShipSpec, poses: &HashMap<ShipId, &ShipSpec>) {
    let entries = spec
        .behaviors
        .iter()
        .map(|b| resolve_behavior(spec, b, poses))
        .collect();

    world.spawn((
        Ship,
        spec.id,
        Transform {
            position: spec.position,
            rotation: spec.rotation,
        },
        Kinematics::default(),
        spec.params,
        BehaviorSet { entries },
    ));
}

/// Turn a declarative behavior spec into a runtime behavior entry.
/// References were validated already, so lookups here cannot fail.
fn resolve_behavior(
    ship: &ShipSpec,
    spec: &BehaviorSpec,
    poses: &HashMap<ShipId, &ShipSpec>,
) -> BehaviorEntry {
    match *spec {
        BehaviorSpec::Seek { target, weight } => {
            BehaviorEntry::new(Behavior::Seek { target }, weight)
        }
        BehaviorSpec::Arrive {
            target,
            slowing_distance,
            weight,
        } => BehaviorEntry::new(
            Behavior::Arrive {
                target,
                slowing_distance,
            },
            weight,
        ),
        BehaviorSpec::Pursue { target, weight } => {
            BehaviorEntry::new(Behavior::Pursue { target }, weight)
        }
        BehaviorSpec::FollowPath {
            path,
            waypoint_distance,
            weight,
        } => BehaviorEntry::new(
            Behavior::FollowPath {
                path,
                cursor: PathCursor::default(),
                waypoint_distance,
            },
            weight,
        ),
        BehaviorSpec::Wander {
            jitter,
            wideness,
            weight,
        } => BehaviorEntry::new(
            Behavior::Wander {
                jitter,
                wideness,
                target: glam::Vec3::ZERO,
            },
            weight,
        ),
        BehaviorSpec::FlockOffset {
            leader,
            slowing_distance,
            weight,
        } => {
            // Capture the slot once, relative to the leader's initial pose.
            let leader_spec = poses[&leader];
            let local_offset =
                leader_spec.rotation.inverse() * (ship.position - leader_spec.position);
            BehaviorEntry::new(
                Behavior::FlockOffset {
                    leader,
                    local_offset,
                    slowing_distance,
                },
                weight,
            )
        }
    }
}

/// Reject ill-formed scenarios up front.
fn validate(scenario: &Scenario) -> Result<(), ConfigError> {
    let mut ship_ids = HashSet::new();
    for ship in &scenario.ships {
        if !ship_ids.insert(ship.id) {
            return Err(ConfigError::DuplicateShipId(ship.id));
        }
        if ship.params.mass <= 0.0 {
            return Err(ConfigError::NonPositiveMass(ship.params.mass));
        }
    }

    let path_ids: HashSet<PathId> = scenario.paths.iter().map(|p| p.id).collect();
    for path in &scenario.paths {
        if path.waypoints.is_empty() {
            return Err(ConfigError::EmptyPath);
        }
    }

    for ship in &scenario.ships {
        for behavior in &ship.behaviors {
            match *behavior {
                BehaviorSpec::Arrive {
                    slowing_distance, ..
                }
                | BehaviorSpec::FlockOffset {
                    slowing_distance, ..
                } if slowing_distance <= 0.0 => {
                    return Err(ConfigError::NonPositiveSlowingDistance(slowing_distance));
                }
                BehaviorSpec::FollowPath {
                    path,
                    waypoint_distance,
                    ..
                } => {
                    if waypoint_distance <= 0.0 {
                        return Err(ConfigError::NonPositiveWaypointDistance(waypoint_distance));
                    }
                    if !path_ids.contains(&path) {
                        return Err(ConfigError::UnknownPath(path));
                    }
                }
                BehaviorSpec::Pursue { target, .. } => {
                    if !ship_ids.contains(&target) {
                        return Err(ConfigError::UnknownShip(target));
                    }
                }
                BehaviorSpec::FlockOffset { leader, .. } => {
                    if !ship_ids.contains(&leader) {
                        return Err(ConfigError::UnknownShip(leader));
                    }
                }
                _ => {}
            }
        }
    }

    Ok(())
}
