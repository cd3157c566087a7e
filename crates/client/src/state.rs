//! Client-side view state.

use mailstorm_core::{MatchConfig, MatchState, Phase};
use mailstorm_runtime::MatchSnapshot;

/// Latest snapshot received from the runtime, cached for rendering.
///
/// The client never mutates match state locally. Every frame renders from
/// the last authoritative snapshot, so a stale frame is at worst one tick
/// behind the worker.
pub struct AppState {
    snapshot: MatchSnapshot,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            snapshot: MatchSnapshot {
                state: MatchState::new(MatchConfig::default()),
                score: None,
                reflection: None,
                leaderboard: Vec::new(),
            },
        }
    }

    pub fn update(&mut self, snapshot: MatchSnapshot) {
        self.snapshot = snapshot;
    }

    pub fn snapshot(&self) -> &MatchSnapshot {
        &self.snapshot
    }

    pub fn phase(&self) -> Phase {
        self.snapshot.state.phase
    }
}
