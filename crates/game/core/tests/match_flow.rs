//! Full-match scenarios driving the engine the way the runtime does:
//! alternating clock ticks and delivery checks at a fixed cadence.

use mailstorm_core::{
    Action, EmotionalWeight, ImpactArea, MatchConfig, MatchEngine, MatchState, Message, Phase,
    TickOutcome, Urgency, player_profile, reflection, score, terminal,
};

fn pool(count: usize) -> Vec<Message> {
    (0..count)
        .map(|i| {
            Message::new(
                format!("msg-{i:03}"),
                "The board wants an answer today",
                match i % 3 {
                    0 => Urgency::High,
                    1 => Urgency::Medium,
                    _ => Urgency::Low,
                },
                match i % 3 {
                    0 => ImpactArea::People,
                    1 => ImpactArea::Product,
                    _ => ImpactArea::Money,
                },
                EmotionalWeight::Neutral,
            )
        })
        .collect()
}

/// Runs the match to completion, deciding every message with `decide`.
fn run_match(
    state: &mut MatchState,
    decide: impl Fn(&Message) -> Option<Action>,
) -> TickOutcome {
    let dt = state.config().tick_seconds;
    let mut outcome = TickOutcome::Running;

    // Generous upper bound so a logic bug cannot spin forever.
    for _ in 0..10_000_000 {
        let mut engine = MatchEngine::new(state);
        engine.check_delivery();
        outcome = engine.tick(dt);
        if outcome != TickOutcome::Running {
            break;
        }

        if let Some(action) = state.current_message.as_ref().and_then(&decide) {
            MatchEngine::new(state).apply_player_action(action).unwrap();
        }
    }

    outcome
}

#[test]
fn untended_inbox_runs_to_time_up_on_a_short_match() {
    let mut state = MatchState::new(MatchConfig::with_total_time(30.0));
    MatchEngine::new(&mut state).start(pool(8));

    let outcome = run_match(&mut state, |_| None);

    assert_eq!(outcome, TickOutcome::Ended);
    assert_eq!(state.phase, Phase::End);
    assert_eq!(state.time_remaining, 0.0);
    assert_eq!(state.end_reason.as_deref(), Some(terminal::TIME_UP_REASON));
    // 30 s schedule: 1.5, 5.5, ..., 29.5. All eight delivered, none decided.
    assert_eq!(state.waiting_count(), 8);
    assert!(state.history.is_empty());
    // Pressure moved stress up and business down, never out of bounds.
    assert!(state.meters.ceo_stress > 30.0);
    assert!(state.meters.business_health < 60.0);
    assert!(state.meters.in_bounds());
}

#[test]
fn deciding_every_message_keeps_the_inbox_clear() {
    let mut state = MatchState::new(MatchConfig::with_total_time(30.0));
    MatchEngine::new(&mut state).start(pool(8));

    run_match(&mut state, |_| Some(Action::Handle));

    assert_eq!(state.phase, Phase::End);
    assert_eq!(state.history.len(), 8);
    assert_eq!(state.waiting_count(), 0);
    // Timestamps mirror the delivery order and never decrease.
    assert!(
        state
            .history
            .windows(2)
            .all(|w| w[0].timestamp <= w[1].timestamp)
    );
}

#[test]
fn finished_match_scores_and_reflects() {
    let mut state = MatchState::new(MatchConfig::with_total_time(30.0));
    MatchEngine::new(&mut state).start(pool(8));
    run_match(&mut state, |_| Some(Action::Delegate));

    let profile = player_profile(&state.history);
    assert!(profile.caution > 0.0);
    assert_eq!(profile.speed_focus, 0.0);

    let summary = reflection(&state.meters, &profile, &state.start_meters);
    assert!(!summary.is_empty());

    let final_score = score(&state.meters, state.duration());
    assert!(final_score > 0);
}

#[test]
fn restart_after_end_yields_a_fresh_playable_match() {
    let mut state = MatchState::new(MatchConfig::with_total_time(30.0));
    MatchEngine::new(&mut state).start(pool(8));
    run_match(&mut state, |_| None);
    assert_eq!(state.phase, Phase::End);

    MatchEngine::new(&mut state).start(pool(8));
    assert_eq!(state.phase, Phase::Playing);
    assert_eq!(state.waiting_count(), 0);
    assert!(state.end_reason.is_none());

    // The fresh match plays normally.
    let outcome = run_match(&mut state, |_| Some(Action::Defer));
    assert_eq!(outcome, TickOutcome::Ended);
    assert_eq!(state.history.len(), 8);
}
