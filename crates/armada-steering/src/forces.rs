//! Desired-force functions for each steering behavior.
//!
//! Every function returns a force delta to be summed into the agent's
//! accumulator; none of them mutate kinematic state. Numeric degeneracies
//! (zero-distance targets, zero max speed) return zero force instead of
//! letting NaN through a normalize.

use glam::{Quat, Vec3};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use armada_core::path::{PathCursor, PathGeometry};

/// The steering-relevant slice of an agent's state.
#[derive(Debug, Clone, Copy)]
pub struct AgentState {
    pub position: Vec3,
    pub rotation: Quat,
    pub velocity: Vec3,
    pub max_speed: f32,
}

/// Another ship's state as seen by a pursuer or formation follower.
#[derive(Debug, Clone, Copy)]
pub struct TargetState {
    pub position: Vec3,
    pub rotation: Quat,
    pub velocity: Vec3,
}

/// Seek: full speed toward a fixed point. The force is the deficit between
/// the desired velocity and the current one.
pub fn seek_force(agent: &AgentState, target: Vec3) -> Vec3 {
    let to_target = target - agent.position;
    if to_target.length_squared() < f32::EPSILON {
        return Vec3::ZERO;
    }
    to_target.normalize() * agent.max_speed - agent.velocity
}

/// Arrive: like seek, but the desired speed ramps linearly down inside
/// `slowing_distance`, reaching zero at the target.
pub fn arrive_force(agent: &AgentState, target: Vec3, slowing_distance: f32) -> Vec3 {
    let to_target = target - agent.position;
    let distance = to_target.length();
    if distance <= f32::EPSILON {
        return Vec3::ZERO;
    }
    let ramped = agent.max_speed * (distance / slowing_distance);
    let clamped = ramped.min(agent.max_speed);
    let desired = to_target * (clamped / distance);
    desired - agent.velocity
}

/// Pursue: seek the target's predicted position, leading by a fixed-point
/// time-to-intercept estimate (`distance / max_speed`, not refined).
pub fn pursue_force(agent: &AgentState, target: &TargetState) -> Vec3 {
    let predicted = target.position + target.velocity * lead_time(agent, target.position);
    seek_force(agent, predicted)
}

/// Follow a path: seek the current waypoint, advancing the cursor once
/// within `waypoint_distance` of it. On the final leg of a non-looped path
/// this switches to arrive so the agent decelerates instead of orbiting
/// its terminus.
pub fn follow_path_force(
    agent: &AgentState,
    path: &PathGeometry,
    cursor: &mut PathCursor,
    waypoint_distance: f32,
    slowing_distance: f32,
) -> Vec3 {
    let waypoint = cursor.waypoint(path);
    if agent.position.distance(waypoint) < waypoint_distance {
        cursor.advance(path);
    }

    if !path.looped() && cursor.is_last(path) {
        arrive_force(agent, waypoint, slowing_distance)
    } else {
        seek_force(agent, waypoint)
    }
}

/// Wander: displace a persistent local-space jitter target by a bounded
/// random step, clamp it to the wideness sphere, then chase its projection
/// into world space. Keeping the target in local space biases the walk
/// toward wherever the agent is already facing.
pub fn wander_force(
    agent: &AgentState,
    jitter: f32,
    wideness: f32,
    target: &mut Vec3,
    rng: &mut ChaCha8Rng,
    dt: f32,
) -> Vec3 {
    let displacement = random_in_unit_sphere(rng) * jitter * dt;
    *target = (*target + displacement).clamp_length_max(wideness);

    let world_target = agent.position + agent.rotation * *target;
    world_target - agent.position
}

/// Hold a formation slot: project the captured local offset through the
/// leader's current pose, lead-predict with the leader's velocity, and
/// arrive at the result.
pub fn flock_offset_force(
    agent: &AgentState,
    leader: &TargetState,
    local_offset: Vec3,
    slowing_distance: f32,
) -> Vec3 {
    let world_target = leader.position + leader.rotation * local_offset;
    let predicted = world_target + leader.velocity * lead_time(agent, world_target);
    arrive_force(agent, predicted, slowing_distance)
}

/// Fixed-point intercept-time estimate: how long the agent would take to
/// cover the current separation at full speed.
fn lead_time(agent: &AgentState, target: Vec3) -> f32 {
    if agent.max_speed <= f32::EPSILON {
        return 0.0;
    }
    agent.position.distance(target) / agent.max_speed
}

/// Uniform random point inside the unit sphere, by rejection sampling.
pub fn random_in_unit_sphere(rng: &mut ChaCha8Rng) -> Vec3 {
    loop {
        let candidate = Vec3::new(
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
        );
        if candidate.length_squared() <= 1.0 {
            return candidate;
        }
    }
}
