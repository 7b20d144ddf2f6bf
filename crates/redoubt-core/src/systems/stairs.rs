//! Stairway layer resolution - runs after movement each tick.
//!
//! For every movable object, finds the structures whose footprint the
//! object is inside and classifies it against each of their stairways.
//! Stairways are visited in structure-iteration then definition order;
//! when several match in one tick the last matching write wins.

use crate::components::{LayerState, Position};
use hecs::{Entity, World};
use redoubt_logic::layers::check_stair;
use redoubt_logic::structure::Structure;

/// Resolve floor layers for all movable objects.
pub fn stair_system(world: &mut World) {
    // Collect updates (can't mutate while iterating)
    let mut updates: Vec<(Entity, LayerState)> = Vec::new();

    for (entity, (pos, state)) in world.query::<(&Position, &LayerState)>().iter() {
        let mut next = *state;
        for (_, structure) in world.query::<&Structure>().iter() {
            // Structure bounds are local space; bring them to world space
            // for the broad phase.
            let footprint = structure.bounds.translated(structure.pos);
            if !footprint.contains(pos.pos) {
                continue;
            }
            for stair in &structure.stairs {
                // Loot-only stairways are resolved by the loot system,
                // not by object movement.
                if stair.loot_only {
                    continue;
                }
                check_stair(pos.pos, stair, &mut next);
            }
        }
        if next.layer != state.layer {
            updates.push((entity, next));
        }
    }

    // Apply updates
    for (entity, next) in updates {
        if let Ok(mut state) = world.get::<&mut LayerState>(entity) {
            log::debug!(
                "object {:?} moved from layer {:?} to {:?}",
                entity,
                state.layer,
                next.layer
            );
            *state = next;
        }
    }
}
