//! Types downstream clients interact with.

mod errors;
mod handle;

pub use errors::{Result, RuntimeError};
pub use handle::RuntimeHandle;

use mailstorm_core::MatchState;

use crate::leaderboard::ScoreEntry;

/// Read-only view of the runtime handed to presentation layers.
///
/// One query, one consistent picture: the state clone, the score and
/// reflection of the most recently finished match (if any), and the
/// current leaderboard.
#[derive(Clone, Debug)]
pub struct MatchSnapshot {
    pub state: MatchState,
    pub score: Option<u32>,
    pub reflection: Option<String>,
    pub leaderboard: Vec<ScoreEntry>,
}
