//! Score keeping
//!
//! A pipe rectangle scores on the exact tick its horizontal center lines up
//! with the bird. Each pair has two rectangles worth `SCORE_UNIT` (0.5) each,
//! so one pair is one point. Pipe and bird x positions are whole numbers and
//! pipes move by whole steps, so the equality test is exact.

use serde::{Deserialize, Serialize};

use super::obstacles::ObstacleField;
use super::state::GameEvent;
use crate::consts::SCORE_UNIT;

/// Current score plus the best seen this session
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreTracker {
    pub score: f32,
    pub best: f32,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new run (the session-best is kept)
    pub fn reset(&mut self) {
        self.score = 0.0;
    }

    /// Score whole points as displayed and submitted
    pub fn whole_score(&self) -> u32 {
        self.score.max(0.0) as u32
    }

    pub fn whole_best(&self) -> u32 {
        self.best.max(0.0) as u32
    }

    /// Award points for every rectangle centered on `bird_x`; returns the gain
    pub fn update(
        &mut self,
        bird_x: f32,
        obstacles: &ObstacleField,
        events: &mut Vec<GameEvent>,
    ) -> f32 {
        let mut delta = 0.0;
        for rect in obstacles.rects() {
            if rect.center_x() == bird_x {
                self.score += SCORE_UNIT;
                delta += SCORE_UNIT;
                self.best = self.best.max(self.score);
                events.push(GameEvent::Score);
            }
        }
        delta
    }
}
