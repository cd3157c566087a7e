//! Authoritative match state representation.
//!
//! This module owns the aggregate the engine mutates: the countdown, the
//! meters, the message pipeline (queue → current/inbox → history), and the
//! end-of-match bookkeeping. Runtime layers clone or query this state but
//! mutate it exclusively through [`crate::engine::MatchEngine`].
mod meters;

use std::collections::VecDeque;

use crate::action::Action;
use crate::config::MatchConfig;
use crate::message::Message;
use crate::schedule::DeliverySchedule;

pub use meters::{METER_MAX, METER_MIN, Meters};

/// Lifecycle phase of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum Phase {
    /// Created, waiting for the start command.
    Start,
    /// Clock running, messages arriving.
    Playing,
    /// Terminal; only an explicit restart leaves this phase.
    End,
}

/// Coarse pacing bracket used by presentation layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VisualPhase {
    /// 5:00 – 3:00 remaining.
    Early,
    /// 3:00 – 1:00 remaining.
    Mid,
    /// 1:00 – 0:00 remaining.
    Late,
}

impl VisualPhase {
    pub fn from_time_remaining(time_remaining: f64) -> Self {
        if time_remaining > 180.0 {
            VisualPhase::Early
        } else if time_remaining > 60.0 {
            VisualPhase::Mid
        } else {
            VisualPhase::Late
        }
    }
}

/// Immutable record of one decided message.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoryEntry {
    pub message: Message,
    pub action: Action,
    /// Elapsed seconds at the time of the decision.
    pub timestamp: f64,
}

/// Aggregate root for one match.
///
/// Owned by a single writer during play; scoring reads it after the end
/// transition. `history` is append-only and never reordered.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchState {
    pub phase: Phase,
    /// Seconds left on the countdown; monotonically non-increasing while
    /// playing, floored at zero.
    pub time_remaining: f64,
    pub meters: Meters,
    /// Copy of the meters at match start, kept for delta-based reflection.
    pub start_meters: Meters,
    /// The message under active consideration, at most one.
    pub current_message: Option<Message>,
    /// Delivered messages piling up behind the current one (FIFO).
    pub inbox: VecDeque<Message>,
    /// Messages not yet delivered, in delivery order.
    pub queue: VecDeque<Message>,
    pub history: Vec<HistoryEntry>,
    /// Narrative explanation for why the match ended.
    pub end_reason: Option<String>,
    pub(crate) schedule: DeliverySchedule,
    /// One flag per delayed-effect checkpoint; a fired checkpoint never
    /// fires again within the same match.
    pub(crate) fired_triggers: [bool; 4],
    pub(crate) config: MatchConfig,
}

impl MatchState {
    /// Creates a fresh match in the `start` phase.
    pub fn new(config: MatchConfig) -> Self {
        Self {
            phase: Phase::Start,
            time_remaining: config.total_time,
            meters: Meters::INITIAL,
            start_meters: Meters::INITIAL,
            current_message: None,
            inbox: VecDeque::new(),
            queue: VecDeque::new(),
            history: Vec::new(),
            end_reason: None,
            schedule: DeliverySchedule::generate(config.total_time),
            fired_triggers: [false; 4],
            config,
        }
    }

    /// Elapsed seconds since the match started.
    pub fn elapsed(&self) -> f64 {
        self.config.total_time - self.time_remaining
    }

    /// Seconds the player actually survived (equals elapsed time).
    pub fn duration(&self) -> f64 {
        self.elapsed()
    }

    /// Number of delivered, undecided messages: the current one plus the
    /// inbox pile. Drives passive inbox pressure.
    pub fn waiting_count(&self) -> usize {
        usize::from(self.current_message.is_some()) + self.inbox.len()
    }

    pub fn visual_phase(&self) -> VisualPhase {
        VisualPhase::from_time_remaining(self.time_remaining)
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}
