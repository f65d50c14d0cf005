//! Skyflap - a flap-through-the-pipes arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, session state machine)
//! - `clock`: Fixed-step accumulator that turns frame time into whole ticks
//! - `persistence`: Score stores (in-memory and JSON file)
//! - `highscores`: Ordered top-N leaderboard view
//! - `audio`: Sound effect dispatch for simulation events
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences

pub mod audio;
pub mod clock;
pub mod highscores;
pub mod persistence;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use highscores::{Leaderboard, LeaderboardEntry};
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 120;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the clock will account for (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Playfield dimensions
    pub const SCREEN_WIDTH: f32 = 576.0;
    pub const SCREEN_HEIGHT: f32 = 1024.0;

    /// Bird sprite box (scaled 2x)
    pub const BIRD_WIDTH: f32 = 68.0;
    pub const BIRD_HEIGHT: f32 = 48.0;
    /// Number of wing animation frames (down, mid, up)
    pub const WING_FRAMES: u8 = 3;

    /// Pipe sprite box (scaled 2x)
    pub const PIPE_WIDTH: f32 = 104.0;
    pub const PIPE_HEIGHT: f32 = 640.0;

    /// Longest name accepted on the name entry screen
    pub const NAME_MAX_LEN: usize = 10;
    /// Score awarded per pipe rectangle whose center crosses the bird
    pub const SCORE_UNIT: f32 = 0.5;
}

/// Convert a millisecond interval into whole simulation ticks (at least one)
#[inline]
pub fn ms_to_ticks(ms: u32) -> u32 {
    let ticks = u64::from(ms) * u64::from(consts::TICK_RATE) / 1000;
    u32::try_from(ticks).unwrap_or(u32::MAX).max(1)
}
