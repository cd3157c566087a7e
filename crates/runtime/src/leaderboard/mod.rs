//! Best-effort local leaderboard persistence.
//!
//! The match is never blocked or degraded by persistence: malformed stored
//! data is discarded, save failures are logged and swallowed, and all file
//! I/O happens off the simulation task.

mod file;
mod memory;

pub use file::FileLeaderboard;
pub use memory::InMemoryLeaderboard;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use mailstorm_core::Meters;

/// Maximum number of entries the board retains.
pub const MAX_ENTRIES: usize = 10;

/// Errors raised by leaderboard implementations.
///
/// Callers treat these as advisory; a failed load is an empty board and a
/// failed save is dropped.
#[derive(Debug, Error)]
pub enum LeaderboardError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LeaderboardError>;

/// One persisted match result. Immutable once created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub id: String,
    pub score: u32,
    pub meters: Meters,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl ScoreEntry {
    /// Creates an entry stamped with the current wall clock.
    pub fn record(score: u32, meters: Meters) -> Self {
        let created_at = Utc::now();
        Self {
            id: created_at.timestamp_millis().to_string(),
            score,
            meters,
            created_at,
        }
    }
}

/// Store for the ordered top-score list.
///
/// Implementations persist whatever slice they are given; ordering and
/// capping are the caller's concern via [`insert_capped`].
pub trait LeaderboardStore: Send + Sync {
    /// Loads the stored entries. Malformed data is discarded (empty board);
    /// a missing store is an empty board.
    fn load(&self) -> Result<Vec<ScoreEntry>>;

    /// Persists the given entries, replacing any previous contents.
    fn save(&self, entries: &[ScoreEntry]) -> Result<()>;
}

/// Inserts `entry`, re-sorts by score descending, and caps the board.
///
/// The sort is stable, so equal scores keep their insertion order.
pub fn insert_capped(board: &mut Vec<ScoreEntry>, entry: ScoreEntry) {
    board.push(entry);
    board.sort_by(|a, b| b.score.cmp(&a.score));
    board.truncate(MAX_ENTRIES);
}
