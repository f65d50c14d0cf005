//! High score leaderboard view
//!
//! The authoritative list lives in a [`ScoreStore`](crate::persistence::ScoreStore);
//! this is the ordered top-N copy the session caches for display.

use serde::{Deserialize, Serialize};

use crate::consts::NAME_MAX_LEN;

/// Default number of high scores to show
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// Player's name (at most `NAME_MAX_LEN` characters)
    pub name: String,
    /// Whole points scored
    pub score: u32,
}

impl LeaderboardEntry {
    pub fn new(name: &str, score: u32) -> Self {
        Self {
            name: name.chars().take(NAME_MAX_LEN).collect(),
            score,
        }
    }
}

fn default_limit() -> usize {
    MAX_HIGH_SCORES
}

/// Ordered leaderboard (descending by score)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub entries: Vec<LeaderboardEntry>,
    /// Most entries the board shows
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Leaderboard {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            limit: MAX_HIGH_SCORES,
        }
    }

    /// Build the top `limit` view from entries in insertion order
    ///
    /// Equal scores keep their insertion order.
    pub fn from_entries(mut entries: Vec<LeaderboardEntry>, limit: usize) -> Self {
        // Stable sort, so earlier submissions win ties
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(limit);
        Self { entries, limit }
    }

    /// Check if a score would make it onto the board
    pub fn qualifies(&self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < self.limit {
            return true;
        }
        // Full board: must beat the lowest entry
        self.entries.last().map(|e| score > e.score).unwrap_or(false)
    }

    /// Get the rank a score would achieve (1-indexed, None if it doesn't qualify)
    pub fn potential_rank(&self, score: u32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of shown entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }
}
