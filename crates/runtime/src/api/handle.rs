//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! driving the match or streaming events.
use tokio::sync::{broadcast, mpsc, oneshot};

use mailstorm_core::Action;

use super::errors::{Result, RuntimeError};
use super::MatchSnapshot;
use crate::events::MatchEvent;
use crate::workers::Command;

/// Client-facing handle to interact with the runtime.
#[derive(Clone, Debug)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_tx: broadcast::Sender<MatchEvent>,
}

impl RuntimeHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<Command>,
        event_tx: broadcast::Sender<MatchEvent>,
    ) -> Self {
        Self {
            command_tx,
            event_tx,
        }
    }

    /// Starts a fresh match.
    pub async fn start(&self) -> Result<()> {
        self.send_with_reply(|reply| Command::Start { reply }).await
    }

    /// Abandons the current match (whatever its phase) and starts over.
    pub async fn restart(&self) -> Result<()> {
        self.send_with_reply(|reply| Command::Restart { reply })
            .await
    }

    /// Submits a player decision for the current message.
    ///
    /// Decisions sent while the match is not playing, or with no current
    /// message, are silently dropped; this still returns `Ok`.
    pub async fn submit_action(&self, action: Action) -> Result<()> {
        self.send_with_reply(|reply| Command::SubmitAction { action, reply })
            .await
    }

    /// Queries a consistent snapshot of match state, score, and leaderboard.
    pub async fn snapshot(&self) -> Result<MatchSnapshot> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::QuerySnapshot { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        Ok(reply_rx.await?)
    }

    /// Subscribes to the match event stream.
    pub fn subscribe(&self) -> broadcast::Receiver<MatchEvent> {
        self.event_tx.subscribe()
    }

    async fn send_with_reply(
        &self,
        make: impl FnOnce(oneshot::Sender<Result<()>>) -> Command,
    ) -> Result<()> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(make(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await?
    }
}
