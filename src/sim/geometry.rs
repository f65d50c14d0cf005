//! Axis-aligned rectangle geometry
//!
//! Screen space: x grows to the right, y grows downward. Rectangles follow
//! pixel-rect semantics, so two rects that only share an edge do not overlap.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Rect whose center is `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self::new(center - size / 2.0, size)
    }

    /// Rect whose top edge midpoint is `midtop`
    pub fn from_midtop(midtop: Vec2, size: Vec2) -> Self {
        Self::new(Vec2::new(midtop.x - size.x / 2.0, midtop.y), size)
    }

    /// Rect whose bottom edge midpoint is `midbottom`
    pub fn from_midbottom(midbottom: Vec2, size: Vec2) -> Self {
        Self::new(
            Vec2::new(midbottom.x - size.x / 2.0, midbottom.y - size.y),
            size,
        )
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.min.x + self.size.x / 2.0
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }

    /// Move horizontally by `dx`
    #[inline]
    pub fn shift_x(&mut self, dx: f32) {
        self.min.x += dx;
    }

    /// Strict overlap test (touching edges do not count)
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}
