//! Simulation worker that owns the authoritative [`MatchState`].
//!
//! Receives commands from [`crate::RuntimeHandle`], drives the engine with
//! two periodic timers (the clock tick and the delivery check), and
//! publishes [`MatchEvent`]s. Because every mutation happens on this one
//! task, ticks, deliveries, and player actions never interleave, and a
//! restart resets the state before any later timer fire can observe it.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, mpsc, oneshot};
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, warn};

use mailstorm_core::{
    Action, MatchEngine, MatchState, Message, TickOutcome, player_profile, reflection, score,
};

use crate::api::{MatchSnapshot, Result};
use crate::events::MatchEvent;
use crate::leaderboard::{self, LeaderboardStore, ScoreEntry};

/// Commands the worker accepts from handles.
pub enum Command {
    /// Begin a fresh match from the start screen.
    Start { reply: oneshot::Sender<Result<()>> },
    /// Abandon the current match and begin a fresh one.
    Restart { reply: oneshot::Sender<Result<()>> },
    /// Apply a player decision to the current message.
    SubmitAction {
        action: Action,
        reply: oneshot::Sender<Result<()>>,
    },
    /// Read-only consistent snapshot.
    QuerySnapshot {
        reply: oneshot::Sender<MatchSnapshot>,
    },
}

/// Score and reflection of the most recently finished match.
struct MatchResult {
    score: u32,
    reflection: String,
}

/// Background task that processes commands and timer fires.
pub struct SimulationWorker {
    state: MatchState,
    /// Per-match message pool, dealt into the queue on every (re)start.
    pool: Vec<Message>,
    command_rx: mpsc::Receiver<Command>,
    event_tx: broadcast::Sender<MatchEvent>,
    store: Arc<dyn LeaderboardStore>,
    board: Vec<ScoreEntry>,
    result: Option<MatchResult>,
}

impl SimulationWorker {
    pub fn new(
        state: MatchState,
        pool: Vec<Message>,
        command_rx: mpsc::Receiver<Command>,
        event_tx: broadcast::Sender<MatchEvent>,
        store: Arc<dyn LeaderboardStore>,
        board: Vec<ScoreEntry>,
    ) -> Self {
        tracing::info!(
            pool = pool.len(),
            scheduled = state.config().total_time,
            "simulation worker initialized"
        );

        Self {
            state,
            pool,
            command_rx,
            event_tx,
            store,
            board,
            result: None,
        }
    }

    /// Main worker loop.
    pub async fn run(mut self) {
        let period = Duration::from_secs_f64(self.state.config().tick_seconds);

        // Two independent periodic callbacks at the same cadence. Missed
        // fires are skipped, not bursted: the match runs on the wall clock.
        let mut clock = time::interval(period);
        clock.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut delivery = time::interval(period);
        delivery.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                cmd = self.command_rx.recv() => match cmd {
                    Some(cmd) => self.handle_command(cmd),
                    None => break,
                },
                _ = clock.tick() => self.on_clock_tick(),
                _ = delivery.tick() => self.on_delivery_check(),
            }
        }

        debug!("command channel closed, simulation worker stopping");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Start { reply } | Command::Restart { reply } => {
                self.start_match();
                if reply.send(Ok(())).is_err() {
                    debug!("start reply channel closed (caller dropped)");
                }
            }
            Command::SubmitAction { action, reply } => {
                self.submit_action(action);
                if reply.send(Ok(())).is_err() {
                    debug!("action reply channel closed (caller dropped)");
                }
            }
            Command::QuerySnapshot { reply } => {
                let snapshot = MatchSnapshot {
                    state: self.state.clone(),
                    score: self.result.as_ref().map(|r| r.score),
                    reflection: self.result.as_ref().map(|r| r.reflection.clone()),
                    leaderboard: self.board.clone(),
                };
                if reply.send(snapshot).is_err() {
                    debug!("snapshot reply channel closed (caller dropped)");
                }
            }
        }
    }

    fn start_match(&mut self) {
        MatchEngine::new(&mut self.state).start(self.pool.clone());
        self.result = None;
        self.publish(MatchEvent::Started);
    }

    fn submit_action(&mut self, action: Action) {
        match MatchEngine::new(&mut self.state).apply_player_action(action) {
            Ok(()) => self.publish(MatchEvent::ActionApplied { action }),
            // Expected when the player mashes keys between messages or
            // after the end screen; drop silently.
            Err(err) => debug!(%action, %err, "action rejected"),
        }
    }

    fn on_clock_tick(&mut self) {
        let dt = self.state.config().tick_seconds;
        match MatchEngine::new(&mut self.state).tick(dt) {
            TickOutcome::Idle => {}
            TickOutcome::Running => self.publish(MatchEvent::StateChanged),
            TickOutcome::Ended => self.finish_match(),
        }
    }

    fn on_delivery_check(&mut self) {
        if let Some(id) = MatchEngine::new(&mut self.state).check_delivery() {
            self.publish(MatchEvent::MessageDelivered { id });
        }
    }

    /// Computes the final score once and records it, fire-and-forget.
    fn finish_match(&mut self) {
        let state = &self.state;
        let profile = player_profile(&state.history);
        let final_score = score(&state.meters, state.duration());
        let summary = reflection(&state.meters, &profile, &state.start_meters);

        let reason = state
            .end_reason
            .clone()
            .unwrap_or_else(|| "The match ended.".to_string());

        tracing::info!(score = final_score, %reason, "match ended");

        leaderboard::insert_capped(&mut self.board, ScoreEntry::record(final_score, state.meters));
        self.persist_board();

        self.result = Some(MatchResult {
            score: final_score,
            reflection: summary.to_string(),
        });

        self.publish(MatchEvent::MatchEnded {
            score: final_score,
            reason,
            reflection: summary.to_string(),
        });
    }

    /// Best-effort save off the simulation task; failures never propagate.
    fn persist_board(&self) {
        let store = Arc::clone(&self.store);
        let entries = self.board.clone();

        tokio::task::spawn_blocking(move || {
            if let Err(err) = store.save(&entries) {
                warn!(%err, "failed to persist leaderboard");
            }
        });
    }

    fn publish(&self, event: MatchEvent) {
        // A send error only means nobody is listening right now.
        let _ = self.event_tx.send(event);
    }
}
