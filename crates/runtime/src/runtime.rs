//! High-level runtime orchestrator.
//!
//! The runtime owns the simulation worker, wires up the command and event
//! channels, and exposes a builder-based API for clients.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use mailstorm_core::{DeliverySchedule, MatchConfig, MatchState, Message};

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::events::MatchEvent;
use crate::leaderboard::{FileLeaderboard, LeaderboardStore};
use crate::workers::SimulationWorker;

/// Runtime configuration shared across the orchestrator and worker.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub match_config: MatchConfig,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            match_config: MatchConfig::default(),
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

/// Main runtime that orchestrates the match simulation.
///
/// Design: the runtime owns the worker; [`RuntimeHandle`] provides a
/// cloneable façade for clients.
#[derive(Debug)]
pub struct Runtime {
    handle: RuntimeHandle,
    worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder.
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Subscribe to match events.
    pub fn subscribe_events(&self) -> broadcast::Receiver<MatchEvent> {
        self.handle.subscribe()
    }

    /// Shutdown the runtime gracefully.
    ///
    /// Any other live handle clones keep the worker running until they are
    /// dropped as well.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);
        self.worker_handle.await.map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    messages: Option<Vec<Message>>,
    store: Option<Arc<dyn LeaderboardStore>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            messages: None,
            store: None,
        }
    }

    /// Override runtime configuration.
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the per-match message pool (required).
    pub fn messages(mut self, messages: Vec<Message>) -> Self {
        self.messages = Some(messages);
        self
    }

    /// Set the leaderboard store (defaults to the platform data-dir file).
    pub fn leaderboard(mut self, store: Arc<dyn LeaderboardStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Validate the configuration and spawn the simulation worker.
    pub async fn build(self) -> Result<Runtime> {
        let match_config = self.config.match_config;
        if match_config.total_time <= 0.0 {
            return Err(RuntimeError::InvalidDuration {
                seconds: match_config.total_time,
            });
        }

        let messages = self.messages.ok_or(RuntimeError::MessagesNotSet)?;
        let required = DeliverySchedule::generate(match_config.total_time).len();
        if messages.len() < required {
            return Err(RuntimeError::CatalogTooSmall {
                available: messages.len(),
                required,
            });
        }

        let store = self
            .store
            .unwrap_or_else(|| Arc::new(FileLeaderboard::at_default_location()));

        // Load off the async runtime; a failed load is an empty board.
        let load_store = Arc::clone(&store);
        let board = tokio::task::spawn_blocking(move || load_store.load())
            .await?
            .unwrap_or_else(|err| {
                tracing::warn!(%err, "failed to load leaderboard, starting empty");
                Vec::new()
            });

        let (command_tx, command_rx) = mpsc::channel(self.config.command_buffer_size);
        let (event_tx, _) = broadcast::channel(self.config.event_buffer_size);

        let worker = SimulationWorker::new(
            MatchState::new(match_config),
            messages,
            command_rx,
            event_tx.clone(),
            store,
            board,
        );
        let worker_handle = tokio::spawn(worker.run());

        Ok(Runtime {
            handle: RuntimeHandle::new(command_tx, event_tx),
            worker_handle,
        })
    }
}
