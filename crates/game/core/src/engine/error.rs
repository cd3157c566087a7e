//! Errors surfaced by the match engine.

use thiserror::Error;

use crate::state::Phase;

/// Why a player action was rejected.
///
/// Rejections are expected flow, not failures: callers treat them as
/// no-ops and never surface them to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("match is not in the playing phase (currently {phase})")]
    NotPlaying { phase: Phase },

    #[error("no message is under consideration")]
    NoCurrentMessage,
}
