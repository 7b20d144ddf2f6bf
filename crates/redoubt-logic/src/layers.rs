//! Floor layers and the per-tick stairway classifier.
//!
//! Layer codes, simulation-wide:
//!
//! | Code | Layer | Meaning |
//! |------|-------|---------|
//! | 0 | [`Layer::Ground`] | on the ground floor |
//! | 1 | [`Layer::Basement`] | in the basement |
//! | 2 | [`Layer::StairUpper`] | on a stairway, upper-floor side |
//! | 3 | [`Layer::StairLower`] | on a stairway, lower-floor side |
//!
//! The classifier only ever writes `StairUpper`/`StairLower`; assigning
//! `Ground`/`Basement` once an object leaves the stairway is the wider
//! simulation's job.

use crate::structure::Stair;
use crate::vec2::Vec2;
use serde::{Deserialize, Serialize};

/// Vertical level an object currently occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum Layer {
    Ground = 0,
    Basement = 1,
    StairUpper = 2,
    StairLower = 3,
}

impl Layer {
    /// Whether the object is transitioning on a stairway.
    pub fn on_stair(self) -> bool {
        matches!(self, Self::StairUpper | Self::StairLower)
    }
}

/// Capability to read and write an object's floor layer.
///
/// The classifier needs nothing else from a movable object, so anything
/// exposing a mutable layer is classifiable — players, loot, projectiles.
pub trait LayerOccupant {
    fn layer(&self) -> Layer;
    fn set_layer(&mut self, layer: Layer);
}

/// Classify one (point, stairway) pair and update the occupant's layer.
///
/// Returns true iff the point lies within the stairway's collision
/// footprint (inclusive). On a match the occupant's layer is set from the
/// half-region containing the point, upper side taking precedence on the
/// shared split edge; a point in neither half leaves the layer untouched.
///
/// The surrounding simulation calls this once per nearby (object,
/// stairway) pair each tick; when several stairways match in one tick the
/// last matching call wins.
pub fn check_stair<O>(pos: Vec2, stair: &Stair, occupant: &mut O) -> bool
where
    O: LayerOccupant + ?Sized,
{
    let collides = stair.collision.contains(pos);
    if collides {
        if stair.upper_half.contains(pos) {
            occupant.set_layer(Layer::StairUpper);
        } else if stair.lower_half.contains(pos) {
            occupant.set_layer(Layer::StairLower);
        }
    }
    collides
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{StairDef, StructureCatalog, StructureDef};
    use crate::collider::Aabb;
    use crate::compass;
    use crate::structure::Structure;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    struct Dummy {
        layer: Layer,
    }

    impl LayerOccupant for Dummy {
        fn layer(&self) -> Layer {
            self.layer
        }
        fn set_layer(&mut self, layer: Layer) {
            self.layer = layer;
        }
    }

    fn placed_bunker() -> Structure {
        let mut catalog = StructureCatalog::new();
        catalog.insert(
            "bunker",
            StructureDef {
                bounds: Aabb::new(Vec2::new(-12.0, -12.0), Vec2::new(12.0, 12.0)),
                obstacles: vec![],
                stairs: vec![StairDef {
                    collision: Aabb::new(Vec2::ZERO, Vec2::new(10.0, 5.0)),
                    down_dir: Vec2::new(1.0, 0.0),
                    no_ceiling_reveal: false,
                    loot_only: false,
                }],
            },
        );
        Structure::build(&catalog, "bunker", Vec2::new(100.0, 100.0), 0, Layer::Ground).unwrap()
    }

    #[test]
    fn test_placement_scenario() {
        let s = placed_bunker();
        let stair = &s.stairs[0];
        assert_eq!(
            stair.collision,
            Aabb::new(Vec2::new(100.0, 100.0), Vec2::new(110.0, 105.0))
        );
        assert_eq!(stair.down_ori, compass::EAST);
        assert_eq!(stair.up_ori, compass::WEST);

        let mut obj = Dummy { layer: Layer::Ground };
        assert!(check_stair(Vec2::new(102.0, 102.0), stair, &mut obj));
        assert_eq!(obj.layer, Layer::StairLower);

        assert!(check_stair(Vec2::new(108.0, 102.0), stair, &mut obj));
        assert_eq!(obj.layer, Layer::StairUpper);

        assert!(!check_stair(Vec2::new(50.0, 50.0), stair, &mut obj));
        assert_eq!(obj.layer, Layer::StairUpper); // untouched on a miss
    }

    #[test]
    fn test_split_edge_resolves_upper() {
        let s = placed_bunker();
        let stair = &s.stairs[0];
        let mut obj = Dummy { layer: Layer::Ground };
        // x = 105 sits on the shared split edge of both halves.
        assert!(check_stair(Vec2::new(105.0, 102.0), stair, &mut obj));
        assert_eq!(obj.layer, Layer::StairUpper);
    }

    #[test]
    fn test_outer_boundary_is_inclusive() {
        let s = placed_bunker();
        let stair = &s.stairs[0];
        let mut obj = Dummy { layer: Layer::Ground };
        assert!(check_stair(Vec2::new(100.0, 100.0), stair, &mut obj));
        assert!(check_stair(Vec2::new(110.0, 105.0), stair, &mut obj));
    }

    #[test]
    fn test_totality_sweep() {
        let s = placed_bunker();
        let stair = &s.stairs[0];
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let p = Vec2::new(rng.gen_range(80.0..130.0), rng.gen_range(80.0..130.0));
            let mut obj = Dummy { layer: Layer::Ground };
            let matched = check_stair(p, stair, &mut obj);
            assert_eq!(matched, stair.collision.contains(p));
            if matched {
                // Every in-footprint point lands in exactly one layer code.
                assert!(obj.layer.on_stair());
                let expect = if stair.upper_half.contains(p) {
                    Layer::StairUpper
                } else {
                    Layer::StairLower
                };
                assert_eq!(obj.layer, expect);
            } else {
                assert_eq!(obj.layer, Layer::Ground);
            }
        }
    }

    #[test]
    fn test_layer_codes_match_simulation_table() {
        assert_eq!(Layer::Ground as u8, 0);
        assert_eq!(Layer::Basement as u8, 1);
        assert_eq!(Layer::StairUpper as u8, 2);
        assert_eq!(Layer::StairLower as u8, 3);
        assert!(!Layer::Ground.on_stair());
        assert!(Layer::StairLower.on_stair());
    }
}
