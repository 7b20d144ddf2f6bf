//! Axis-aligned collision boxes.
//!
//! Structures author their geometry as local-space boxes; at placement
//! those are transformed into world space, and stairway boxes are further
//! bisected along the descent direction. All containment tests are
//! inclusive of the boundary.

use crate::vec2::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box (min/max corners).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    pub fn center(&self) -> Vec2 {
        self.min.midpoint(&self.max)
    }

    /// Inclusive point-containment test.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Transform by (translation, rotation, uniform scale) and re-fit to
    /// the axes: every corner is scaled, rotated and translated, and the
    /// result is the axis-aligned box over the transformed corners.
    pub fn transformed(&self, pos: Vec2, rad: f32, scale: f32) -> Self {
        let corners = [
            self.min,
            Vec2::new(self.max.x, self.min.y),
            self.max,
            Vec2::new(self.min.x, self.max.y),
        ];
        let mut min = Vec2::new(f32::INFINITY, f32::INFINITY);
        let mut max = Vec2::new(f32::NEG_INFINITY, f32::NEG_INFINITY);
        for c in corners {
            let p = (c * scale).rotated(rad) + pos;
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Self { min, max }
    }

    /// Bisect at the center along the dominant axis of `dir`, returning
    /// `(lower, upper)` halves.
    ///
    /// `dir` is a stairway's descent direction. Convention: with
    /// `dir = (1, 0)` the lower half is the min-x half and the upper half
    /// the max-x half; the other quadrant directions mirror accordingly.
    pub fn split(&self, dir: Vec2) -> (Self, Self) {
        let c = self.center();
        let mut lower = *self;
        let mut upper = *self;
        if dir.y.abs() > dir.x.abs() {
            if dir.y > 0.0 {
                lower.max = Vec2::new(self.max.x, c.y);
                upper.min = Vec2::new(self.min.x, c.y);
            } else {
                lower.min = Vec2::new(self.min.x, c.y);
                upper.max = Vec2::new(self.max.x, c.y);
            }
        } else if dir.x > 0.0 {
            lower.max = Vec2::new(c.x, self.max.y);
            upper.min = Vec2::new(c.x, self.min.y);
        } else {
            lower.min = Vec2::new(c.x, self.min.y);
            upper.max = Vec2::new(c.x, self.max.y);
        }
        (lower, upper)
    }
}
