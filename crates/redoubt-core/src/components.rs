//! ECS components for movable objects.
//!
//! Placed structures attach [`Structure`] from `redoubt-logic` directly;
//! movable objects carry the components below.
//!
//! [`Structure`]: redoubt_logic::structure::Structure

use redoubt_logic::layers::{Layer, LayerOccupant};
use redoubt_logic::vec2::Vec2;
use serde::{Deserialize, Serialize};

/// World position of a movable object
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Position {
    pub pos: Vec2,
}

/// Velocity, world units per second
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Velocity {
    pub vel: Vec2,
}

/// Floor layer the object currently occupies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LayerState {
    pub layer: Layer,
}

impl LayerOccupant for LayerState {
    fn layer(&self) -> Layer {
        self.layer
    }

    fn set_layer(&mut self, layer: Layer) {
        self.layer = layer;
    }
}
