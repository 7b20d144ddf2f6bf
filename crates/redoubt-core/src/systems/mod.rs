//! Per-tick systems, run in order by the engine.

pub mod movement;
pub mod stairs;

pub use movement::movement_system;
pub use stairs::stair_system;
