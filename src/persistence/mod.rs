//! Score persistence
//!
//! The session only talks to [`ScoreStore`]; where the scores actually live
//! is up to the implementation:
//! - [`MemoryStore`]: in-process list, for tests and offline play
//! - [`JsonFileStore`]: versioned JSON envelope on disk with atomic replace

pub mod json_file;
pub mod memory;

use std::io;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::highscores::LeaderboardEntry;

/// Read-top-N / write-one access to a leaderboard backend
///
/// Failures are reported, never fatal: callers treat an error as
/// "leaderboard unavailable" and keep whatever they had cached.
pub trait ScoreStore {
    /// Top `n` entries, descending by score (ties keep submission order)
    fn read_top(&self, n: usize) -> io::Result<Vec<LeaderboardEntry>>;

    /// Record one finished run
    fn write_one(&mut self, name: &str, score: u32) -> io::Result<()>;
}

/// Order entries for a top-N read
pub(crate) fn top_n(entries: &[LeaderboardEntry], n: usize) -> Vec<LeaderboardEntry> {
    crate::highscores::Leaderboard::from_entries(entries.to_vec(), n).entries
}
