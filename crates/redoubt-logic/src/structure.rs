//! Placement-time structure geometry.
//!
//! A structure is built exactly once, when it is placed on the map:
//! the template's local-space boxes are transformed by the placement
//! rotation and position, and each stairway definition is expanded into
//! the derived records the per-tick classifier consumes. Nothing here is
//! mutated after construction.

use crate::catalog::{CatalogError, StructureCatalog};
use crate::collider::Aabb;
use crate::compass;
use crate::layers::Layer;
use crate::vec2::Vec2;
use serde::{Deserialize, Serialize};

/// World-space stairway geometry, derived from one [`StairDef`].
///
/// [`StairDef`]: crate::catalog::StairDef
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stair {
    /// Footprint of the whole stairway, world space.
    pub collision: Aabb,
    /// Midpoint of `collision`.
    pub center: Vec2,
    /// Unit direction toward the lower floor, world space.
    pub down_dir: Vec2,
    /// Compass index of `down_dir`.
    pub down_ori: u8,
    /// Compass index of the ascent direction; always `(down_ori + 2) % 4`.
    pub up_ori: u8,
    /// Half of `collision` on the lower-floor side.
    pub lower_half: Aabb,
    /// Half of `collision` on the upper-floor side.
    pub upper_half: Aabb,
    /// Pass-through flag for the visibility system.
    pub no_ceiling_reveal: bool,
    /// Pass-through flag for the loot system.
    pub loot_only: bool,
}

/// A placed building instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Structure {
    /// Template type name.
    pub kind: String,
    /// World position of placement.
    pub pos: Vec2,
    /// Placement orientation, compass index.
    pub ori: u8,
    /// Continuous rotation derived from `ori`.
    pub rot: f32,
    /// Uniform scale. Placement does not currently configure this.
    pub scale: f32,
    /// Floor level the structure primarily occupies.
    pub layer: Layer,
    /// Overall bounds, LOCAL space: rotated about the local origin but
    /// not translated. Consumers combining this with world coordinates
    /// must add `pos` themselves.
    pub bounds: Aabb,
    /// Obstacle collision boxes, world space.
    pub obstacle_bounds: Vec<Aabb>,
    /// Stairways in template definition order.
    pub stairs: Vec<Stair>,
}

impl Structure {
    /// Derive all collision geometry for a placement.
    ///
    /// Fails if `kind` is not in the catalog; no default geometry is
    /// substituted.
    pub fn build(
        catalog: &StructureCatalog,
        kind: &str,
        pos: Vec2,
        ori: u8,
        layer: Layer,
    ) -> Result<Self, CatalogError> {
        let def = catalog.resolve(kind)?;
        let rot = compass::to_radians(ori);
        let scale = 1.0;

        let bounds = def.bounds.transformed(Vec2::ZERO, rot, 1.0);

        let obstacle_bounds = def
            .obstacles
            .iter()
            .map(|b| b.transformed(pos, rot, 1.0))
            .collect();

        let mut stairs = Vec::with_capacity(def.stairs.len());
        for stair_def in &def.stairs {
            let collision = stair_def.collision.transformed(pos, rot, scale);
            let down_dir = stair_def.down_dir.rotated(rot);
            let down_ori = compass::from_radians(down_dir.angle());
            let (lower_half, upper_half) = collision.split(down_dir);
            stairs.push(Stair {
                collision,
                center: collision.center(),
                down_dir,
                down_ori,
                up_ori: compass::opposite(down_ori),
                lower_half,
                upper_half,
                no_ceiling_reveal: stair_def.no_ceiling_reveal,
                loot_only: stair_def.loot_only,
            });
        }

        Ok(Self {
            kind: kind.to_string(),
            pos,
            ori,
            rot,
            scale,
            layer,
            bounds,
            obstacle_bounds,
            stairs,
        })
    }
}
