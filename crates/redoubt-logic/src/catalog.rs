//! Authored structure templates.
//!
//! A template describes one structure type in local space: its overall
//! bounding box, its obstacle boxes, and its stairway definitions. The
//! catalog maps type names to templates; placement resolves a name and
//! fails hard on an unknown type — default geometry is never substituted.
//!
//! Template geometry is trusted, pre-authored content: degenerate boxes
//! are not validated here and propagate as-is.

use crate::collider::Aabb;
use crate::vec2::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One stairway definition, local space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StairDef {
    /// Footprint of the whole stairway.
    pub collision: Aabb,
    /// Unit direction pointing toward the lower floor.
    pub down_dir: Vec2,
    /// Tells the renderer not to reveal the ceiling while on this
    /// stairway. Not interpreted by the collision core.
    #[serde(default)]
    pub no_ceiling_reveal: bool,
    /// Reserved for loot placement; such stairways are never walkable.
    /// Not interpreted by the collision core.
    #[serde(default)]
    pub loot_only: bool,
}

/// Static local-space geometry for one structure type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructureDef {
    /// Overall bounding box around everything the structure occupies.
    pub bounds: Aabb,
    /// Collision boxes blocking movement through the structure.
    #[serde(default)]
    pub obstacles: Vec<Aabb>,
    /// Stairways joining the structure's floor levels, in authoring order.
    #[serde(default)]
    pub stairs: Vec<StairDef>,
}

/// Template lookup failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown structure type `{0}`")]
    UnknownType(String),
}

/// Name-keyed catalog of structure templates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StructureCatalog {
    defs: HashMap<String, StructureDef>,
}

impl StructureCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, kind: impl Into<String>, def: StructureDef) {
        self.defs.insert(kind.into(), def);
    }

    pub fn get(&self, kind: &str) -> Option<&StructureDef> {
        self.defs.get(kind)
    }

    /// Resolve a type name, failing on unknown types.
    pub fn resolve(&self, kind: &str) -> Result<&StructureDef, CatalogError> {
        self.defs
            .get(kind)
            .ok_or_else(|| CatalogError::UnknownType(kind.to_string()))
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &StructureDef)> {
        self.defs.iter()
    }
}

impl FromIterator<(String, StructureDef)> for StructureCatalog {
    fn from_iter<T: IntoIterator<Item = (String, StructureDef)>>(iter: T) -> Self {
        Self {
            defs: iter.into_iter().collect(),
        }
    }
}
