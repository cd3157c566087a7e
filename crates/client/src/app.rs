//! Event loop orchestrating runtime events, user input, and rendering.
//!
//! This module coordinates three concerns:
//! - Runtime event consumption (match state updates)
//! - Keyboard input processing (decisions and screen navigation)
//! - Rendering from the latest cached snapshot

use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use tokio::{
    sync::broadcast::error::RecvError,
    time::{self, Duration},
};

use mailstorm_runtime::{MatchEvent, Runtime, RuntimeHandle};

use crate::{
    input::{InputHandler, KeyAction},
    presentation::{
        terminal::{self, TerminalGuard, Tui},
        ui,
    },
    state::AppState,
};

const FRAME_INTERVAL_MS: u64 = 16;

pub struct App {
    runtime: Runtime,
    handle: RuntimeHandle,
    input: InputHandler,
    app_state: AppState,
}

impl App {
    pub fn new(runtime: Runtime) -> Self {
        let handle = runtime.handle();

        Self {
            runtime,
            handle,
            input: InputHandler::new(),
            app_state: AppState::new(),
        }
    }

    pub async fn run(mut self) -> Result<()> {
        // Extracted to a local so the select arm does not borrow `self`.
        let mut events = self.runtime.subscribe_events();

        let mut terminal = terminal::init()?;
        let guard = TerminalGuard;

        self.refresh_view(&mut terminal).await?;

        loop {
            tokio::select! {
                result = events.recv() => {
                    if self.handle_runtime_event(result, &mut terminal).await? {
                        break;
                    }
                }
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    if self.handle_input_tick(&mut terminal).await? {
                        break;
                    }
                }
            }
        }

        drop(guard);

        // The worker stops once every handle is gone.
        let App {
            runtime, handle, ..
        } = self;
        drop(handle);
        runtime.shutdown().await?;
        Ok(())
    }

    async fn handle_runtime_event(
        &mut self,
        result: Result<MatchEvent, RecvError>,
        terminal: &mut Tui,
    ) -> Result<bool> {
        match result {
            // Every event invalidates the cached snapshot; at one tick per
            // 100ms re-querying on each is cheap.
            Ok(_) => {
                self.refresh_view(terminal).await?;
                Ok(false)
            }
            Err(RecvError::Closed) => {
                tracing::warn!("event stream closed");
                Ok(true)
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "dropped stale events");
                Ok(false)
            }
        }
    }

    async fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if !term_event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        match term_event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_press(key, terminal).await
            }
            TermEvent::Resize(_, _) => {
                self.refresh_view(terminal).await?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    async fn handle_key_press(&mut self, key: KeyEvent, terminal: &mut Tui) -> Result<bool> {
        match self.input.handle_key(key, self.app_state.phase()) {
            KeyAction::Quit => Ok(true),
            KeyAction::Start => {
                self.handle.start().await?;
                self.refresh_view(terminal).await?;
                Ok(false)
            }
            KeyAction::Restart => {
                self.handle.restart().await?;
                self.refresh_view(terminal).await?;
                Ok(false)
            }
            KeyAction::Submit(action) => {
                self.handle.submit_action(action).await?;
                self.refresh_view(terminal).await?;
                Ok(false)
            }
            KeyAction::None => Ok(false),
        }
    }

    async fn refresh_view(&mut self, terminal: &mut Tui) -> Result<()> {
        let snapshot = self.handle.snapshot().await?;
        self.app_state.update(snapshot);
        ui::render(terminal, &self.app_state)
    }
}
