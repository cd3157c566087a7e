//! Deterministic match simulation shared across clients.
//!
//! `mailstorm-core` defines the canonical rules of a five-minute inbox
//! triage match: delivery scheduling, meter arithmetic, the match state
//! machine, and end-of-match scoring. All state mutation flows through
//! [`engine::MatchEngine`]; the runtime and offline tools reuse the types
//! re-exported here.
pub mod action;
pub mod config;
pub mod engine;
pub mod message;
pub mod schedule;
pub mod score;
pub mod state;

pub use action::Action;
pub use config::MatchConfig;
pub use engine::{ActionError, DelayTrigger, MatchEngine, TickOutcome, terminal};
pub use message::{EmotionalWeight, ImpactArea, Message, MessageId, Urgency};
pub use schedule::DeliverySchedule;
pub use score::{PlayerProfile, player_profile, reflection, score};
pub use state::{HistoryEntry, MatchState, Meters, Phase, VisualPhase};
