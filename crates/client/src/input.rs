//! Input processing for the terminal client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent};

use mailstorm_core::{Action, Phase};

/// High-level outcome of processing a keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Begin the match from the start screen.
    Start,
    /// Abandon or replay, depending on the current phase.
    Restart,
    /// Submit the decision for the message on screen.
    Submit(Action),
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into client commands, phase-aware.
///
/// The same key can mean different things across screens: Enter starts a
/// match from the start screen but is inert mid-match, and `r` replays
/// only once the end screen is up.
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent, phase: Phase) -> KeyAction {
        if key.code == KeyCode::Char('q') {
            return KeyAction::Quit;
        }

        match phase {
            Phase::Start => self.handle_start_screen(key),
            Phase::Playing => self.handle_match(key),
            Phase::End => self.handle_end_screen(key),
        }
    }

    fn handle_start_screen(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Enter | KeyCode::Char('s') => KeyAction::Start,
            _ => KeyAction::None,
        }
    }

    fn handle_match(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            // Decision hotkeys, numeric and mnemonic
            KeyCode::Char('1') | KeyCode::Char('h') => KeyAction::Submit(Action::Handle),
            KeyCode::Char('2') | KeyCode::Char('d') => KeyAction::Submit(Action::Delegate),
            KeyCode::Char('3') | KeyCode::Char('f') => KeyAction::Submit(Action::Defer),
            KeyCode::Char('4') | KeyCode::Char('i') => KeyAction::Submit(Action::Ignore),
            KeyCode::Char('r') => KeyAction::Restart,
            _ => KeyAction::None,
        }
    }

    fn handle_end_screen(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Enter | KeyCode::Char('r') => KeyAction::Restart,
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn quit_works_in_every_phase() {
        let input = InputHandler::new();
        for phase in [Phase::Start, Phase::Playing, Phase::End] {
            assert_eq!(input.handle_key(key(KeyCode::Char('q')), phase), KeyAction::Quit);
        }
    }

    #[test]
    fn enter_starts_only_from_the_start_screen() {
        let input = InputHandler::new();
        assert_eq!(
            input.handle_key(key(KeyCode::Enter), Phase::Start),
            KeyAction::Start
        );
        assert_eq!(
            input.handle_key(key(KeyCode::Enter), Phase::Playing),
            KeyAction::None
        );
        assert_eq!(
            input.handle_key(key(KeyCode::Enter), Phase::End),
            KeyAction::Restart
        );
    }

    #[test]
    fn decision_keys_map_to_actions_mid_match() {
        let input = InputHandler::new();
        let cases = [
            (KeyCode::Char('1'), Action::Handle),
            (KeyCode::Char('h'), Action::Handle),
            (KeyCode::Char('2'), Action::Delegate),
            (KeyCode::Char('d'), Action::Delegate),
            (KeyCode::Char('3'), Action::Defer),
            (KeyCode::Char('f'), Action::Defer),
            (KeyCode::Char('4'), Action::Ignore),
            (KeyCode::Char('i'), Action::Ignore),
        ];
        for (code, action) in cases {
            assert_eq!(
                input.handle_key(key(code), Phase::Playing),
                KeyAction::Submit(action)
            );
        }
    }

    #[test]
    fn decision_keys_are_inert_outside_the_match() {
        let input = InputHandler::new();
        assert_eq!(
            input.handle_key(key(KeyCode::Char('1')), Phase::Start),
            KeyAction::None
        );
        assert_eq!(
            input.handle_key(key(KeyCode::Char('h')), Phase::End),
            KeyAction::None
        );
    }

    #[test]
    fn restart_is_available_mid_match_and_after() {
        let input = InputHandler::new();
        assert_eq!(
            input.handle_key(key(KeyCode::Char('r')), Phase::Playing),
            KeyAction::Restart
        );
        assert_eq!(
            input.handle_key(key(KeyCode::Char('r')), Phase::End),
            KeyAction::Restart
        );
    }
}
