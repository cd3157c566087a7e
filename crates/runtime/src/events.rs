//! Broadcast events published by the simulation worker.

use mailstorm_core::{Action, MessageId};

/// High-level occurrences clients can react to.
///
/// Every event implies the snapshot may have changed; `StateChanged` is
/// the catch-all fired by the periodic clock tick.
#[derive(Debug, Clone)]
pub enum MatchEvent {
    /// A fresh match began (initial start or restart).
    Started,
    /// The clock advanced or meters moved.
    StateChanged,
    /// A message landed in the inbox or came into focus.
    MessageDelivered { id: MessageId },
    /// A player decision was applied.
    ActionApplied { action: Action },
    /// The match reached a terminal condition.
    MatchEnded {
        score: u32,
        reason: String,
        reflection: String,
    },
}
