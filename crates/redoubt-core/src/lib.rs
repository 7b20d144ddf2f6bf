//! Engine integration for the structure-collision core.
//!
//! Wraps the pure logic from `redoubt-logic` in a `hecs` world: placed
//! structures and movable objects are entities, and each tick runs
//! movement integration followed by stairway layer resolution. The whole
//! simulation is single-threaded and tick-driven; structures are fully
//! built before they become visible to any system.

pub mod components;
pub mod engine;
pub mod systems;

pub use engine::GameWorld;
