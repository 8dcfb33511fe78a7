//! Snapshot building — the per-tick output surface.

use hecs::World;

use armada_core::components::{Kinematics, Transform};
use armada_core::state::{FleetSnapshot, ShipView, SimPhase};
use armada_core::types::{ShipId, SimTime};

/// Build the per-tick fleet snapshot. Ships are sorted by id so the
/// output is stable regardless of ECS iteration order.
pub fn build_snapshot(world: &World, time: &SimTime, phase: SimPhase) -> FleetSnapshot {
    let mut ships: Vec<ShipView> = world
        .query::<(&ShipId, &Transform, &Kinematics)>()
        .iter()
        .map(|(_entity, (id, transform, kin))| ShipView {
            id: *id,
            position: transform.position,
            rotation: transform.rotation,
            velocity: kin.velocity,
            speed: kin.velocity.length(),
            force: kin.force,
            acceleration: kin.acceleration,
        })
        .collect();
    ships.sort_by_key(|s| s.id.0);

    FleetSnapshot {
        tick: time.tick,
        elapsed_secs: time.elapsed_secs,
        phase,
        ships,
    }
}
