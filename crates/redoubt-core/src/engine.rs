//! Simulation world - structure placement and the tick loop.

use crate::components::{LayerState, Position, Velocity};
use crate::systems::{movement_system, stair_system};
use hecs::{Entity, World};
use redoubt_logic::catalog::{CatalogError, StructureCatalog};
use redoubt_logic::layers::Layer;
use redoubt_logic::structure::Structure;
use redoubt_logic::vec2::Vec2;

/// The simulation world: placed structures, movable objects, tick loop.
pub struct GameWorld {
    /// ECS world containing all entities
    pub world: World,
    /// Structure templates available for placement
    catalog: StructureCatalog,
    /// Ticks elapsed since start
    pub tick_count: u64,
}

impl GameWorld {
    pub fn new(catalog: StructureCatalog) -> Self {
        Self {
            world: World::new(),
            catalog,
            tick_count: 0,
        }
    }

    /// Place a structure on the map.
    ///
    /// All collision geometry is derived here, before the entity exists,
    /// so no other system ever observes a half-built structure. Unknown
    /// template types fail the placement.
    pub fn place_structure(
        &mut self,
        kind: &str,
        pos: Vec2,
        ori: u8,
        layer: Layer,
    ) -> Result<Entity, CatalogError> {
        let structure = Structure::build(&self.catalog, kind, pos, ori, layer)?;
        log::info!(
            "placed {} at ({:.1}, {:.1}) ori {} with {} stairway(s)",
            kind,
            pos.x,
            pos.y,
            ori,
            structure.stairs.len()
        );
        Ok(self.world.spawn((structure,)))
    }

    /// Spawn a movable object on the given layer.
    pub fn spawn_mobile(&mut self, pos: Vec2, layer: Layer) -> Entity {
        self.world.spawn((
            Position { pos },
            Velocity::default(),
            LayerState { layer },
        ))
    }

    /// Advance the simulation by one tick.
    pub fn tick(&mut self, delta_seconds: f32) {
        movement_system(&mut self.world, delta_seconds);
        stair_system(&mut self.world);
        self.tick_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use redoubt_logic::catalog::{StairDef, StructureDef};
    use redoubt_logic::collider::Aabb;

    fn bunker_catalog() -> StructureCatalog {
        let mut catalog = StructureCatalog::new();
        catalog.insert(
            "bunker",
            StructureDef {
                bounds: Aabb::new(Vec2::new(-12.0, -12.0), Vec2::new(12.0, 12.0)),
                obstacles: vec![Aabb::new(Vec2::new(-2.0, -8.0), Vec2::new(2.0, -6.0))],
                stairs: vec![StairDef {
                    collision: Aabb::new(Vec2::ZERO, Vec2::new(10.0, 5.0)),
                    down_dir: Vec2::new(1.0, 0.0),
                    no_ceiling_reveal: false,
                    loot_only: false,
                }],
            },
        );
        catalog
    }

    #[test]
    fn test_place_unknown_type_fails() {
        let mut game = GameWorld::new(bunker_catalog());
        assert!(game
            .place_structure("silo", Vec2::ZERO, 0, Layer::Ground)
            .is_err());
    }

    #[test]
    fn test_walk_across_stairway() {
        let mut game = GameWorld::new(bunker_catalog());
        game.place_structure("bunker", Vec2::new(100.0, 100.0), 0, Layer::Ground)
            .unwrap();

        // Start west of the stairway, walking east across it.
        let e = game.spawn_mobile(Vec2::new(98.0, 102.0), Layer::Ground);
        {
            let mut vel = game.world.get::<&mut Velocity>(e).unwrap();
            vel.vel = Vec2::new(4.0, 0.0);
        }

        let mut seen = Vec::new();
        for _ in 0..5 {
            game.tick(1.0);
            seen.push(game.world.get::<&LayerState>(e).unwrap().layer);
        }

        // x: 102 (lower), 106 (upper), 110 (upper), 114 (off, sticky), 118
        assert_eq!(
            seen,
            vec![
                Layer::StairLower,
                Layer::StairUpper,
                Layer::StairUpper,
                Layer::StairUpper,
                Layer::StairUpper,
            ]
        );
        assert_eq!(game.tick_count, 5);
    }

    #[test]
    fn test_last_matching_stairway_wins() {
        // Two overlapping stairways with opposite descent directions.
        let mut catalog = StructureCatalog::new();
        catalog.insert(
            "overlap",
            StructureDef {
                bounds: Aabb::new(Vec2::new(-12.0, -12.0), Vec2::new(12.0, 12.0)),
                obstacles: vec![],
                stairs: vec![
                    StairDef {
                        collision: Aabb::new(Vec2::ZERO, Vec2::new(10.0, 5.0)),
                        down_dir: Vec2::new(1.0, 0.0),
                        no_ceiling_reveal: false,
                        loot_only: false,
                    },
                    StairDef {
                        collision: Aabb::new(Vec2::ZERO, Vec2::new(10.0, 5.0)),
                        down_dir: Vec2::new(-1.0, 0.0),
                        no_ceiling_reveal: false,
                        loot_only: false,
                    },
                ],
            },
        );
        let mut game = GameWorld::new(catalog);
        game.place_structure("overlap", Vec2::ZERO, 0, Layer::Ground)
            .unwrap();

        // (2, 2) is the lower half of the first stairway but the upper
        // half of the second; the second (last) write wins.
        let e = game.spawn_mobile(Vec2::new(2.0, 2.0), Layer::Ground);
        game.tick(0.0);
        assert_eq!(game.world.get::<&LayerState>(e).unwrap().layer, Layer::StairUpper);
    }
}
