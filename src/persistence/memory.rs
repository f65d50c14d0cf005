//! In-memory score store

use std::io;

use super::{ScoreStore, top_n};
use crate::highscores::LeaderboardEntry;

/// Keeps every submitted run in a `Vec`
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Vec<LeaderboardEntry>,
    /// When set, every call fails as if the backend were unreachable
    offline: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing runs
    pub fn with_entries(entries: Vec<LeaderboardEntry>) -> Self {
        Self {
            entries,
            offline: false,
        }
    }

    /// Simulate an unreachable backend
    pub fn set_offline(&mut self, offline: bool) {
        self.offline = offline;
    }

    /// Every run submitted so far, in submission order
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    fn check_online(&self) -> io::Result<()> {
        if self.offline {
            Err(io::Error::new(
                io::ErrorKind::NotConnected,
                "score store is offline",
            ))
        } else {
            Ok(())
        }
    }
}

impl ScoreStore for MemoryStore {
    fn read_top(&self, n: usize) -> io::Result<Vec<LeaderboardEntry>> {
        self.check_online()?;
        Ok(top_n(&self.entries, n))
    }

    fn write_one(&mut self, name: &str, score: u32) -> io::Result<()> {
        self.check_online()?;
        self.entries.push(LeaderboardEntry::new(name, score));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read() {
        let mut store = MemoryStore::new();
        store.write_one("AB", 4).unwrap();
        store.write_one("CD", 9).unwrap();
        store.write_one("EF", 1).unwrap();

        let top = store.read_top(2).unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!(top[0], LeaderboardEntry::new("CD", 9));
        assert_eq!(top[1], LeaderboardEntry::new("AB", 4));
    }

    #[test]
    fn test_offline_store_fails() {
        let mut store = MemoryStore::with_entries(vec![LeaderboardEntry::new("X", 2)]);
        store.set_offline(true);

        assert_eq!(
            store.read_top(10).unwrap_err().kind(),
            io::ErrorKind::NotConnected
        );
        assert!(store.write_one("Y", 3).is_err());
        assert_eq!(store.entries().len(), 1);

        store.set_offline(false);
        assert_eq!(store.read_top(10).unwrap().len(), 1);
    }

    #[test]
    fn test_empty_store_reads_empty() {
        let store = MemoryStore::new();
        assert!(store.read_top(10).unwrap().is_empty());
    }
}
