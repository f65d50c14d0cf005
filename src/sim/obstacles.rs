//! Pipe obstacles: spawning, scrolling and culling

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::consts::{PIPE_HEIGHT, PIPE_WIDTH};
use crate::tuning::Tuning;

/// A lower + upper pipe pair sharing one gap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Vertical center of the gap, fixed at spawn
    pub gap_center: f32,
    /// Pipe rising from the floor
    pub lower: Rect,
    /// Pipe hanging from the ceiling
    pub upper: Rect,
}

impl Obstacle {
    /// Build a pair centered horizontally on `x` around `gap_center`
    pub fn new(x: f32, gap_center: f32, gap: f32) -> Self {
        let size = Vec2::new(PIPE_WIDTH, PIPE_HEIGHT);
        Self {
            gap_center,
            lower: Rect::from_midtop(Vec2::new(x, gap_center + gap / 2.0), size),
            upper: Rect::from_midbottom(Vec2::new(x, gap_center - gap / 2.0), size),
        }
    }

    /// Both rectangles, lower first
    pub fn rects(&self) -> [Rect; 2] {
        [self.lower, self.upper]
    }

    /// Left edge of the pair
    pub fn x(&self) -> f32 {
        self.lower.left()
    }

    /// Right edge of the pair
    pub fn right(&self) -> f32 {
        self.lower.right()
    }

    fn shift_x(&mut self, dx: f32) {
        self.lower.shift_x(dx);
        self.upper.shift_x(dx);
    }
}

/// The active pipes, in spawn order (which is also left-to-right order)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
}

impl ObstacleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a pair at the right edge with a random gap from the allowed set
    pub fn spawn<R: Rng>(&mut self, rng: &mut R, tuning: &Tuning) -> Option<&Obstacle> {
        if tuning.gap_centers.is_empty() {
            return None;
        }
        let gap_center = tuning.gap_centers[rng.random_range(0..tuning.gap_centers.len())];
        self.obstacles
            .push(Obstacle::new(tuning.pipe_spawn_x, gap_center, tuning.pipe_gap));
        log::debug!("Spawned pipe pair with gap at y={}", gap_center);
        self.obstacles.last()
    }

    /// Scroll every pair left by `speed`
    pub fn advance(&mut self, speed: f32) {
        for obstacle in &mut self.obstacles {
            obstacle.shift_x(-speed);
        }
    }

    /// Drop pairs whose right edge has reached `threshold`
    pub fn cull(&mut self, threshold: f32) {
        self.obstacles.retain(|o| o.right() > threshold);
    }

    /// Remove every pair
    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    /// Every collidable rectangle, pair by pair
    pub fn rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.obstacles.iter().flat_map(|o| o.rects())
    }

    pub fn as_slice(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}
