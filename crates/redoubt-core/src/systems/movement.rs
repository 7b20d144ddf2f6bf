//! Movement system - integrates velocity into position each tick.

use crate::components::{Position, Velocity};
use hecs::World;

/// Advance every movable object by its velocity.
pub fn movement_system(world: &mut World, delta_seconds: f32) {
    for (_, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.pos = pos.pos + vel.vel * delta_seconds;
    }
}
