//! Per-tick kinematic integration.
//!
//! Turns the accumulated steering force into acceleration, velocity, and
//! a new pose: velocity is clamped to `max_speed`, the heading follows the
//! velocity with a banked up vector, and exponential damping bleeds speed
//! off after the position update. A stationary agent keeps its heading —
//! there is nothing to face.

use glam::Vec3;

use armada_core::components::{Kinematics, SteeringParams, Transform};
use armada_core::constants::BANK_SMOOTHING_RATE;
use armada_core::types::look_rotation;

/// Advance one agent by `dt` seconds using the force already accumulated
/// in `kin.force`.
pub fn integrate(transform: &mut Transform, kin: &mut Kinematics, params: &SteeringParams, dt: f32) {
    let acceleration = kin.force / params.mass;
    kin.acceleration = acceleration;

    kin.velocity += acceleration * dt;
    kin.velocity = kin.velocity.clamp_length_max(params.max_speed);

    if kin.velocity.length_squared() > 0.0 {
        // Bank into the turn: tilt the up vector toward world-up plus a
        // lateral-acceleration component, smoothed over time.
        let current_up = transform.rotation * Vec3::Y;
        let target_up = Vec3::Y + acceleration * params.banking;
        let blend = (BANK_SMOOTHING_RATE * dt).min(1.0);
        let banked_up = current_up.lerp(target_up, blend);

        transform.rotation = look_rotation(kin.velocity, banked_up);
        transform.position += kin.velocity * dt;
        kin.velocity *= (1.0 - params.damping * dt).max(0.0);
    }
}
