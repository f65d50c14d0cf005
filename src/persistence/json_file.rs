//! JSON file score store
//!
//! File format: a versioned envelope `{ "version": 1, "entries": [...] }`
//! holding every submitted run in submission order. Writes go to a sibling
//! `.tmp` file which is then renamed over the original, so a crash mid-write
//! leaves the previous file intact.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ScoreStore, top_n};
use crate::highscores::LeaderboardEntry;

/// Current envelope version
pub const SCORES_FILE_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct ScoresFile {
    version: u32,
    entries: Vec<LeaderboardEntry>,
}

/// Scores kept in a JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by `path`
    ///
    /// The file is created on the first write; reading a missing file yields
    /// an empty leaderboard.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_all(&self) -> io::Result<Vec<LeaderboardEntry>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        let file: ScoresFile = serde_json::from_str(&json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        if file.version != SCORES_FILE_VERSION {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "Unsupported scores file version: expected {}, got {}",
                    SCORES_FILE_VERSION, file.version
                ),
            ));
        }

        Ok(file.entries)
    }

    fn store_all(&self, entries: Vec<LeaderboardEntry>) -> io::Result<()> {
        let file = ScoresFile {
            version: SCORES_FILE_VERSION,
            entries,
        };
        let json = serde_json::to_string_pretty(&file)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl ScoreStore for JsonFileStore {
    fn read_top(&self, n: usize) -> io::Result<Vec<LeaderboardEntry>> {
        Ok(top_n(&self.load_all()?, n))
    }

    fn write_one(&mut self, name: &str, score: u32) -> io::Result<()> {
        let mut entries = self.load_all()?;
        entries.push(LeaderboardEntry::new(name, score));
        let count = entries.len();
        self.store_all(entries)?;
        log::debug!("Wrote score to {} ({} runs)", self.path.display(), count);
        Ok(())
    }
}
