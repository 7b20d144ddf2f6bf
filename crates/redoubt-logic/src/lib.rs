//! Pure structure-collision logic for Redoubt.
//!
//! This crate contains the geometry that makes multi-level buildings work:
//! a placed structure's collision shapes are derived once from an authored
//! template, and a per-tick classifier moves objects between floor layers
//! as they cross a stairway. Everything here is plain data and pure
//! functions — no ECS, no I/O, no runtime dependency — so it is
//! unit-testable and portable across the game server and native tools.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`vec2`] | 2D vector math (rotation, normalization) |
//! | [`collider`] | Axis-aligned boxes: containment, transform, bisection |
//! | [`compass`] | 4-way orientation indices and angle quantization |
//! | [`catalog`] | Authored structure templates keyed by type name |
//! | [`structure`] | Placement-time geometry: bounds, obstacles, stairways |
//! | [`layers`] | Floor layers and the per-tick stairway classifier |

pub mod catalog;
pub mod collider;
pub mod compass;
pub mod layers;
pub mod structure;
pub mod vec2;
