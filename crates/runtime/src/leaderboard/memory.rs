//! In-memory leaderboard store for tests and ephemeral sessions.

use std::sync::Mutex;

use super::{LeaderboardStore, Result, ScoreEntry};

/// Store that keeps entries in memory only.
#[derive(Default)]
pub struct InMemoryLeaderboard {
    entries: Mutex<Vec<ScoreEntry>>,
}

impl InMemoryLeaderboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LeaderboardStore for InMemoryLeaderboard {
    fn load(&self) -> Result<Vec<ScoreEntry>> {
        Ok(self
            .entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default())
    }

    fn save(&self, entries: &[ScoreEntry]) -> Result<()> {
        if let Ok(mut stored) = self.entries.lock() {
            *stored = entries.to_vec();
        }
        Ok(())
    }
}
