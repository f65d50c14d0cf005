//! Session state and core simulation types
//!
//! One `GameState` owns everything a session mutates: the bird, the pipes,
//! the score, the name being typed and the cached leaderboard. Nothing lives
//! in globals; the tick functions receive the state by reference.

use glam::Vec2;
use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::obstacles::ObstacleField;
use super::scoring::ScoreTracker;
use crate::consts::*;
use crate::highscores::{Leaderboard, MAX_HIGH_SCORES};
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Title screen, or game over screen once a run has ended
    Menu,
    /// Active gameplay
    Playing,
    /// Run ended and the player is typing a name
    AwaitingName,
    /// Name saved for this run
    NameSubmitted,
}

/// Notifications for observers (audio, UI). Never fed back into the sim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Bird flapped
    Flap,
    /// Bird hit a pipe, the ceiling or the floor
    Hit,
    /// A pipe rectangle passed the bird
    Score,
    /// A new run began
    RunStarted,
    /// The run ended with this whole score
    RunEnded { score: u32 },
    /// The run's score was written to the store
    ScoreSaved { score: u32 },
}

/// Bird sprite color, picked per run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BirdColor {
    Red,
    Blue,
    Yellow,
}

impl BirdColor {
    pub const ALL: [BirdColor; 3] = [BirdColor::Red, BirdColor::Blue, BirdColor::Yellow];
}

/// Background theme, picked per run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Day,
    Night,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Day, Theme::Night];

    /// Pipe sprite that goes with this background
    pub fn pipe_color(&self) -> PipeColor {
        match self {
            Theme::Day => PipeColor::Green,
            Theme::Night => PipeColor::Red,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipeColor {
    Green,
    Red,
}

/// Visual variant of a run (no gameplay effect)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cosmetic {
    pub bird: BirdColor,
    pub theme: Theme,
}

impl Default for Cosmetic {
    fn default() -> Self {
        Self {
            bird: BirdColor::Yellow,
            theme: Theme::Day,
        }
    }
}

impl Cosmetic {
    /// Pick a random variant
    pub fn random(rng: &mut Pcg32) -> Self {
        Self {
            bird: *BirdColor::ALL.choose(rng).unwrap_or(&BirdColor::Yellow),
            theme: *Theme::ALL.choose(rng).unwrap_or(&Theme::Day),
        }
    }
}

/// The player's bird
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    /// Horizontal center (fixed for the whole run)
    pub x: f32,
    /// Vertical center
    pub y: f32,
    /// Vertical velocity per tick (positive = falling)
    pub velocity_y: f32,
    /// Bounding box size
    pub size: Vec2,
}

impl Bird {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            velocity_y: 0.0,
            size: Vec2::new(BIRD_WIDTH, BIRD_HEIGHT),
        }
    }

    /// Bounding box for collision
    pub fn bounds(&self) -> Rect {
        Rect::from_center(Vec2::new(self.x, self.y), self.size)
    }

    /// Sprite tilt in degrees (counter-clockwise), nose up when rising
    pub fn rotation_degrees(&self) -> f32 {
        -self.velocity_y * 3.0
    }
}

/// Repeating countdown measured in ticks
///
/// Disarmed timers never fire. An armed timer fires once every `interval`
/// ticks, the first time a full interval after arming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickTimer {
    interval: u32,
    remaining: Option<u32>,
}

impl TickTimer {
    pub fn new(interval: u32) -> Self {
        Self {
            interval: interval.max(1),
            remaining: None,
        }
    }

    pub fn arm(&mut self) {
        self.remaining = Some(self.interval);
    }

    pub fn disarm(&mut self) {
        self.remaining = None;
    }

    pub fn is_armed(&self) -> bool {
        self.remaining.is_some()
    }

    /// Count down one tick; true when the deadline is reached
    pub fn tick(&mut self) -> bool {
        match self.remaining {
            Some(1) => {
                self.remaining = Some(self.interval);
                true
            }
            Some(n) => {
                self.remaining = Some(n - 1);
                false
            }
            None => false,
        }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    /// Gap choices and cosmetic variants
    pub rng: Pcg32,
    /// Gameplay constants
    pub tuning: Tuning,
    /// Current phase
    pub phase: SessionPhase,
    /// The player's bird
    pub bird: Bird,
    /// Active pipes (spawn order = left-to-right)
    pub obstacles: ObstacleField,
    /// Score and session-best
    pub scoring: ScoreTracker,
    /// This run's score has been written to the store
    pub score_submitted: bool,
    /// Name being typed (at most `NAME_MAX_LEN` characters)
    pub name: String,
    /// Cached copy of the store's top entries
    pub leaderboard: Leaderboard,
    /// How many entries to request from the store
    pub leaderboard_size: usize,
    /// Pipe spawn deadline (armed only while playing)
    pub spawn_timer: TickTimer,
    /// Wing animation deadline (armed only while playing)
    pub wing_timer: TickTimer,
    /// Current wing animation frame
    pub wing_frame: u8,
    /// Visual variant of the current run
    pub cosmetic: Cosmetic,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events emitted since the last drain
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a session in the menu with the given seed and tuning
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let bird = Bird::new(tuning.bird_x, tuning.bird_start_y);
        let spawn_timer = TickTimer::new(tuning.spawn_interval_ticks());
        let wing_timer = TickTimer::new(tuning.wing_interval_ticks());

        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            phase: SessionPhase::Menu,
            bird,
            obstacles: ObstacleField::new(),
            scoring: ScoreTracker::new(),
            score_submitted: false,
            name: String::with_capacity(NAME_MAX_LEN),
            leaderboard: Leaderboard::new(),
            leaderboard_size: MAX_HIGH_SCORES,
            spawn_timer,
            wing_timer,
            wing_frame: 0,
            cosmetic: Cosmetic::default(),
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Builder: change how many leaderboard entries are requested
    pub fn with_leaderboard_size(mut self, size: usize) -> Self {
        self.leaderboard_size = size;
        self.leaderboard.limit = size;
        self
    }

    /// Current score
    pub fn score(&self) -> f32 {
        self.scoring.score
    }

    /// Score as shown and submitted (whole points)
    pub fn whole_score(&self) -> u32 {
        self.scoring.whole_score()
    }

    /// Highest score reached this session
    pub fn session_best(&self) -> f32 {
        self.scoring.best
    }

    /// Take all pending events (for audio/UI)
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
