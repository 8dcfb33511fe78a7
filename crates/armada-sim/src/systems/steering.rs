//! Steering system — accumulates each ship's force for the tick.
//!
//! First snapshots every ship as a potential target (pursuit and formation
//! behaviors reference other ships by id), then runs each ship's behavior
//! stack through the truncated weighted accumulator. Behaviors earlier in
//! the stack claim force budget first.

use std::collections::HashMap;

use glam::Vec3;
use hecs::World;
use rand_chacha::ChaCha8Rng;

use armada_core::components::*;
use armada_core::constants::DEFAULT_SLOWING_DISTANCE;
use armada_core::path::PathGeometry;
use armada_core::types::{PathId, ShipId};
use armada_steering::accumulator::ForceAccumulator;
use armada_steering::forces::*;

/// Accumulate steering forces for all ships.
pub fn run(
    world: &mut World,
    paths: &HashMap<PathId, PathGeometry>,
    rng: &mut ChaCha8Rng,
    dt: f32,
) {
    // Pass 1: freeze every ship's state as seen by this tick's behaviors.
    // All ships read the same pre-tick view, so agent update order cannot
    // leak into the results.
    let mut targets: HashMap<ShipId, TargetState> = HashMap::new();
    for (_entity, (id, transform, kin)) in
        world.query::<(&ShipId, &Transform, &Kinematics)>().iter()
    {
        targets.insert(
            *id,
            TargetState {
                position: transform.position,
                rotation: transform.rotation,
                velocity: kin.velocity,
            },
        );
    }

    // Pass 2: evaluate behavior stacks.
    for (_entity, (transform, kin, params, set)) in world.query_mut::<(
        &Transform,
        &mut Kinematics,
        &SteeringParams,
        &mut BehaviorSet,
    )>() {
        let agent = AgentState {
            position: transform.position,
            rotation: transform.rotation,
            velocity: kin.velocity,
            max_speed: params.max_speed,
        };

        let mut acc = ForceAccumulator::new(params.max_force);
        for entry in set.entries.iter_mut() {
            if !entry.enabled {
                continue;
            }
            let force = evaluate(&agent, &mut entry.behavior, &targets, paths, rng, dt);
            if !acc.add_weighted(force, entry.weight) {
                break;
            }
        }
        kin.force = acc.total();
    }
}

/// Compute one behavior's desired force. A target despawned mid-run
/// contributes zero force for the tick; missing references at setup are
/// caught by scenario validation.
fn evaluate(
    agent: &AgentState,
    behavior: &mut Behavior,
    targets: &HashMap<ShipId, TargetState>,
    paths: &HashMap<PathId, PathGeometry>,
    rng: &mut ChaCha8Rng,
    dt: f32,
) -> Vec3 {
    match behavior {
        Behavior::Seek { target } => seek_force(agent, *target),
        Behavior::Arrive {
            target,
            slowing_distance,
        } => arrive_force(agent, *target, *slowing_distance),
        Behavior::Pursue { target } => match targets.get(target) {
            Some(t) => pursue_force(agent, t),
            None => Vec3::ZERO,
        },
        Behavior::FollowPath {
            path,
            cursor,
            waypoint_distance,
        } => match paths.get(path) {
            Some(geometry) => follow_path_force(
                agent,
                geometry,
                cursor,
                *waypoint_distance,
                DEFAULT_SLOWING_DISTANCE,
            ),
            None => Vec3::ZERO,
        },
        Behavior::Wander {
            jitter,
            wideness,
            target,
        } => wander_force(agent, *jitter, *wideness, target, rng, dt),
        Behavior::FlockOffset {
            leader,
            local_offset,
            slowing_distance,
        } => match targets.get(leader) {
            Some(l) => flock_offset_force(agent, l, *local_offset, *slowing_distance),
            None => Vec3::ZERO,
        },
    }
}
