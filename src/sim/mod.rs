//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (everything is counted in ticks)
//! - Seeded RNG only
//! - Stable iteration order (pipes stay in spawn order)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod geometry;
pub mod input;
pub mod obstacles;
pub mod physics;
pub mod scoring;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{Collision, WorldBounds, check, detect};
pub use geometry::Rect;
pub use input::{Action, InputContext, Key, classify};
pub use obstacles::{Obstacle, ObstacleField};
pub use physics::{flap, integrate};
pub use scoring::ScoreTracker;
pub use snapshot::{PipeSprite, Prompt, Snapshot};
pub use state::{
    Bird, BirdColor, Cosmetic, GameEvent, GameState, PipeColor, SessionPhase, Theme, TickTimer,
};
pub use tick::{TickInput, handle_key, input_context, refresh_leaderboard, start_run, tick};
