//! Tick-driven match state machine.
//!
//! [`MatchEngine`] is the authoritative reducer for [`MatchState`]. The
//! runtime drives it with the clock tick, the delivery check, and player
//! actions, and every mutation of the aggregate flows through it. Effects
//! arithmetic lives in [`effects`]; termination rules in [`terminal`].

mod effects;
mod error;
pub mod terminal;

pub use effects::{DelayTrigger, apply_action, apply_delayed};
pub use error::ActionError;

use crate::action::Action;
use crate::config::MatchConfig;
use crate::message::{Message, MessageId};
use crate::state::{HistoryEntry, MatchState, Phase};

/// What a clock tick did to the match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Phase was not `playing`; nothing happened.
    Idle,
    /// Clock advanced, match continues.
    Running,
    /// This tick ended the match.
    Ended,
}

/// Match engine that advances time, delivers messages, and applies actions.
///
/// Borrows the state mutably for the duration of one operation so that the
/// single-writer rule is enforced by the type system.
pub struct MatchEngine<'a> {
    state: &'a mut MatchState,
}

impl<'a> MatchEngine<'a> {
    pub fn new(state: &'a mut MatchState) -> Self {
        Self { state }
    }

    /// Starts (or restarts) the match with the given message pool.
    ///
    /// Resets every piece of per-match bookkeeping: meters, history,
    /// schedule cursor, and fired delay checkpoints. Messages are consumed
    /// from the front of `messages` in delivery order.
    pub fn start(&mut self, messages: Vec<Message>) {
        let config = self.state.config;
        *self.state = MatchState::new(config);
        self.state.queue = messages.into();
        self.state.phase = Phase::Playing;
    }

    /// Advances the match clock by `dt` seconds.
    ///
    /// Order within one tick: countdown, delayed-effect checkpoints, inbox
    /// pressure, then the terminal-condition check, so that the check sees
    /// every meter movement from this time slice.
    pub fn tick(&mut self, dt: f64) -> TickOutcome {
        if self.state.phase != Phase::Playing {
            return TickOutcome::Idle;
        }

        self.state.time_remaining = (self.state.time_remaining - dt).max(0.0);
        let elapsed = self.state.elapsed();

        let mut meters = self.state.meters;

        // Each checkpoint fires exactly once per match, no matter how many
        // ticks straddle it.
        for (index, trigger) in DelayTrigger::ALL.iter().enumerate() {
            if elapsed >= trigger.at() && !self.state.fired_triggers[index] {
                meters = apply_delayed(meters, &self.state.history, *trigger, elapsed);
                self.state.fired_triggers[index] = true;
            }
        }

        // Passive pressure scales with how many messages are waiting.
        let waiting = self.state.waiting_count();
        if waiting > 0 {
            let scale = dt * waiting as f64;
            meters = meters
                .with_stress(MatchConfig::WAIT_STRESS_PER_SECOND * scale)
                .with_business(MatchConfig::WAIT_BUSINESS_PER_SECOND * scale);
        }

        self.state.meters = meters;
        debug_assert!(self.state.meters.in_bounds());

        if let Some(reason) = terminal::critical_end_reason(&meters) {
            return self.end(reason);
        }

        if self.state.time_remaining <= 0.0 {
            self.state.time_remaining = 0.0;
            return self.end(terminal::TIME_UP_REASON);
        }

        TickOutcome::Running
    }

    /// Delivers at most one due message from the queue.
    ///
    /// The earliest undelivered schedule timestamp that has passed releases
    /// the head of the queue: it becomes the current message if none is
    /// set, otherwise it joins the inbox tail. Returns the delivered id.
    pub fn check_delivery(&mut self) -> Option<MessageId> {
        if self.state.phase != Phase::Playing || self.state.queue.is_empty() {
            return None;
        }

        let elapsed = self.state.elapsed();
        self.state.schedule.take_due(elapsed)?;

        let message = self.state.queue.pop_front()?;
        let id = message.id.clone();

        if self.state.current_message.is_none() {
            self.state.current_message = Some(message);
        } else {
            self.state.inbox.push_back(message);
        }

        Some(id)
    }

    /// Applies a player decision to the current message.
    ///
    /// Immediate meter effects land, the decision is appended to history
    /// with the current elapsed time, and the inbox head (if any) is
    /// promoted into focus. Rejected while not playing or with no current
    /// message; rejection leaves the state untouched.
    pub fn apply_player_action(&mut self, action: Action) -> Result<(), ActionError> {
        if self.state.phase != Phase::Playing {
            return Err(ActionError::NotPlaying {
                phase: self.state.phase,
            });
        }

        let Some(message) = self.state.current_message.take() else {
            return Err(ActionError::NoCurrentMessage);
        };

        self.state.meters = apply_action(self.state.meters, action, &message);

        let timestamp = self.state.elapsed();
        self.state.history.push(HistoryEntry {
            message,
            action,
            timestamp,
        });

        self.state.current_message = self.state.inbox.pop_front();

        Ok(())
    }

    fn end(&mut self, reason: &str) -> TickOutcome {
        self.state.phase = Phase::End;
        self.state.end_reason = Some(reason.to_string());
        TickOutcome::Ended
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{EmotionalWeight, ImpactArea, Urgency};
    use crate::state::Meters;

    fn message(id: &str, urgency: Urgency) -> Message {
        Message::new(
            id,
            "Quarterly numbers need sign-off",
            urgency,
            ImpactArea::Money,
            EmotionalWeight::Neutral,
        )
    }

    fn playing_state() -> MatchState {
        let mut state = MatchState::default();
        MatchEngine::new(&mut state).start(vec![
            message("msg-001", Urgency::Medium),
            message("msg-002", Urgency::Medium),
            message("msg-003", Urgency::High),
        ]);
        state
    }

    #[test]
    fn start_resets_all_per_match_bookkeeping() {
        let mut state = playing_state();
        {
            let mut engine = MatchEngine::new(&mut state);
            engine.tick(5.0);
            engine.check_delivery();
            engine.apply_player_action(Action::Handle).unwrap();
        }
        assert!(!state.history.is_empty());

        MatchEngine::new(&mut state).start(vec![message("msg-001", Urgency::Low)]);
        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(state.meters, Meters::INITIAL);
        assert!(state.history.is_empty());
        assert!(state.current_message.is_none());
        assert_eq!(state.time_remaining, state.config().total_time);
        assert_eq!(state.fired_triggers, [false; 4]);
    }

    #[test]
    fn tick_is_a_no_op_outside_the_playing_phase() {
        let mut state = MatchState::default();
        assert_eq!(MatchEngine::new(&mut state).tick(0.1), TickOutcome::Idle);
        assert_eq!(state.time_remaining, state.config().total_time);
    }

    #[test]
    fn delivery_installs_then_piles_up() {
        let mut state = playing_state();
        let mut engine = MatchEngine::new(&mut state);

        engine.tick(2.0);
        assert_eq!(engine.check_delivery(), Some(MessageId::new("msg-001")));
        // Second due timestamp is at 5.5 s; nothing more yet.
        assert_eq!(engine.check_delivery(), None);

        engine.tick(4.0);
        assert_eq!(engine.check_delivery(), Some(MessageId::new("msg-002")));

        assert_eq!(state.current_message.as_ref().unwrap().id.as_str(), "msg-001");
        assert_eq!(state.inbox.len(), 1);
    }

    #[test]
    fn action_promotes_the_inbox_head() {
        let mut state = playing_state();
        let mut engine = MatchEngine::new(&mut state);
        engine.tick(2.0);
        engine.check_delivery();
        engine.tick(4.0);
        engine.check_delivery();

        engine.apply_player_action(Action::Delegate).unwrap();

        assert_eq!(state.history.len(), 1);
        assert_eq!(state.history[0].action, Action::Delegate);
        assert_eq!(state.current_message.as_ref().unwrap().id.as_str(), "msg-002");
        assert!(state.inbox.is_empty());
    }

    #[test]
    fn action_without_current_message_is_rejected_untouched() {
        let mut state = playing_state();
        let before = state.clone();
        let result = MatchEngine::new(&mut state).apply_player_action(Action::Handle);
        assert_eq!(result, Err(ActionError::NoCurrentMessage));
        assert_eq!(state, before);
    }

    #[test]
    fn action_after_the_end_is_rejected() {
        let mut state = playing_state();
        state.phase = Phase::End;
        let result = MatchEngine::new(&mut state).apply_player_action(Action::Handle);
        assert_eq!(result, Err(ActionError::NotPlaying { phase: Phase::End }));
    }

    #[test]
    fn inbox_pressure_accrues_per_waiting_message() {
        let mut state = playing_state();
        state.queue.clear();
        state.current_message = Some(message("msg-birthday", Urgency::Low));
        state.inbox.push_back(message("msg-outage", Urgency::High));

        let mut engine = MatchEngine::new(&mut state);
        for _ in 0..100 {
            engine.tick(0.1);
        }

        // 2 waiting messages for 10 s: stress +14, business -8.
        assert!((state.meters.ceo_stress - 44.0).abs() < 1e-6);
        assert!((state.meters.business_health - 52.0).abs() < 1e-6);
        assert_eq!(state.meters.team_trust, 70.0);
    }

    #[test]
    fn delay_checkpoints_fire_exactly_once() {
        let mut state = playing_state();
        state.queue.clear();
        state.history.push(HistoryEntry {
            message: message("msg-handled", Urgency::Medium),
            action: Action::Handle,
            timestamp: 100.0,
        });

        let mut engine = MatchEngine::new(&mut state);
        engine.tick(121.0);
        let after_first = state.meters.business_health;
        assert_eq!(after_first, 75.0);

        // Many more ticks straddling the same checkpoint change nothing.
        let mut engine = MatchEngine::new(&mut state);
        engine.tick(0.1);
        engine.tick(0.1);
        assert_eq!(state.meters.business_health, after_first);
    }

    #[test]
    fn ignore_penalty_applies_once_at_the_final_checkpoint() {
        let mut state = playing_state();
        state.queue.clear();
        state.history.push(HistoryEntry {
            message: message("msg-dropped", Urgency::Medium),
            action: Action::Ignore,
            timestamp: 250.0,
        });
        state.time_remaining = 1.0;
        // The earlier checkpoints fired long ago in this match.
        state.fired_triggers = [true, true, true, false];

        let mut engine = MatchEngine::new(&mut state);
        // Crossing 300 s elapsed fires the final checkpoint and ends the
        // match in the same tick.
        assert_eq!(engine.tick(1.0), TickOutcome::Ended);
        assert_eq!(state.meters.team_trust, 55.0);
        assert_eq!(state.meters.business_health, 50.0);
        assert_eq!(state.end_reason.as_deref(), Some(terminal::TIME_UP_REASON));
    }

    #[test]
    fn two_critical_meters_end_the_match_early() {
        let mut state = playing_state();
        state.queue.clear();
        state.meters = Meters::new(70.0, 5.0, 95.0);

        let mut engine = MatchEngine::new(&mut state);
        assert_eq!(engine.tick(0.1), TickOutcome::Ended);
        assert_eq!(
            state.end_reason.as_deref(),
            Some("You burned out while the business was collapsing.")
        );
        assert_eq!(state.phase, Phase::End);
    }

    #[test]
    fn countdown_floors_at_zero_with_time_up_reason() {
        let mut state = playing_state();
        state.queue.clear();
        state.time_remaining = 0.05;

        let mut engine = MatchEngine::new(&mut state);
        assert_eq!(engine.tick(0.1), TickOutcome::Ended);
        assert_eq!(state.time_remaining, 0.0);
        assert_eq!(state.end_reason.as_deref(), Some(terminal::TIME_UP_REASON));
    }
}
