//! Runtime orchestration for the match simulation.
//!
//! This crate wires the pure engine from `mailstorm-core` into a live,
//! clock-driven game. A single worker task owns the authoritative
//! [`mailstorm_core::MatchState`]; clients drive it through the cloneable
//! [`RuntimeHandle`] and observe it through broadcast [`MatchEvent`]s.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] defines the broadcast event stream
//! - [`leaderboard`] persists best scores, best-effort
//! - `workers` keeps the background task internal to the crate
pub mod api;
pub mod events;
pub mod leaderboard;
pub mod runtime;

mod workers;

pub use api::{MatchSnapshot, Result, RuntimeError, RuntimeHandle};
pub use events::MatchEvent;
pub use leaderboard::{
    FileLeaderboard, InMemoryLeaderboard, LeaderboardError, LeaderboardStore, ScoreEntry,
};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
