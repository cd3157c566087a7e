//! JSON-file leaderboard store.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use super::{LeaderboardStore, Result, ScoreEntry};

const LEADERBOARD_FILE: &str = "leaderboard.json";

/// Leaderboard persisted as a JSON array in a single file.
pub struct FileLeaderboard {
    path: PathBuf,
}

impl FileLeaderboard {
    /// Stores the board at an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Stores the board in the platform data directory
    /// (e.g. `~/.local/share/mailstorm/leaderboard.json`), falling back to
    /// the working directory when no home is available.
    pub fn at_default_location() -> Self {
        let path = ProjectDirs::from("", "", "mailstorm")
            .map(|dirs| dirs.data_dir().join(LEADERBOARD_FILE))
            .unwrap_or_else(|| PathBuf::from(LEADERBOARD_FILE));
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LeaderboardStore for FileLeaderboard {
    fn load(&self) -> Result<Vec<ScoreEntry>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(err) => {
                // Malformed data is not worth failing over; start fresh.
                tracing::warn!(path = %self.path.display(), error = %err, "discarding malformed leaderboard");
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, entries: &[ScoreEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}
