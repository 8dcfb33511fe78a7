//! Kinematic integration system.
//!
//! Applies each ship's accumulated force: acceleration, clamped velocity,
//! banked look-at orientation, position advance, then damping.

use hecs::World;

use armada_core::components::{Kinematics, SteeringParams, Transform};
use armada_steering::integrator::integrate;

/// Run integration for all entities with a pose, kinematics, and params.
pub fn run(world: &mut World, dt: f32) {
    for (_entity, (transform, kin, params)) in
        world.query_mut::<(&mut Transform, &mut Kinematics, &SteeringParams)>()
    {
        integrate(transform, kin, params, dt);
    }
}
