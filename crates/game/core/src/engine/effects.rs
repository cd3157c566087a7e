//! Pure meter arithmetic for immediate and delayed action effects.

use crate::action::Action;
use crate::config::MatchConfig;
use crate::message::Message;
use crate::state::{HistoryEntry, Meters};

/// Fixed base effect of an action before urgency scaling.
#[derive(Clone, Copy, Debug)]
struct BaseEffect {
    stress: f64,
    business: f64,
    team: f64,
}

const fn base_effect(action: Action) -> BaseEffect {
    match action {
        Action::Handle => BaseEffect {
            stress: 10.0,
            business: 0.0,
            team: 0.0,
        },
        // Delegating relieves you but visibly costs some trust immediately.
        Action::Delegate => BaseEffect {
            stress: -5.0,
            business: 0.0,
            team: -4.0,
        },
        // Deferring nudges both business and trust down a bit.
        Action::Defer => BaseEffect {
            stress: -3.0,
            business: -3.0,
            team: -2.0,
        },
        // Ignoring clearly hurts both business and trust.
        Action::Ignore => BaseEffect {
            stress: -8.0,
            business: -5.0,
            team: -5.0,
        },
    }
}

/// Applies the immediate effect of deciding `message` with `action`.
///
/// The base effect is scaled uniformly by the message's urgency multiplier
/// and each meter is clamped independently.
pub fn apply_action(meters: Meters, action: Action, message: &Message) -> Meters {
    let scale = message.urgency.multiplier();
    let effect = base_effect(action);

    meters
        .with_team(effect.team * scale)
        .with_business(effect.business * scale)
        .with_stress(effect.stress * scale)
}

/// Fixed match-clock checkpoints at which delayed consequences land.
///
/// Consequences are tied to these absolute checkpoints, not to a fixed
/// delay after the originating action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DelayTrigger {
    /// 120 s: handled messages pay off in business health.
    TwoMinutes,
    /// 180 s: delegation erodes team trust.
    ThreeMinutes,
    /// 240 s: deferred work catches up with the business.
    FourMinutes,
    /// 300 s: ignored messages cost both trust and health.
    Final,
}

impl DelayTrigger {
    /// All checkpoints in firing order.
    pub const ALL: [DelayTrigger; 4] = [
        DelayTrigger::TwoMinutes,
        DelayTrigger::ThreeMinutes,
        DelayTrigger::FourMinutes,
        DelayTrigger::Final,
    ];

    /// Elapsed match time (seconds) at which this checkpoint fires.
    pub const fn at(self) -> f64 {
        match self {
            DelayTrigger::TwoMinutes => 120.0,
            DelayTrigger::ThreeMinutes => 180.0,
            DelayTrigger::FourMinutes => 240.0,
            DelayTrigger::Final => 300.0,
        }
    }
}

/// Applies the delayed consequences due at `trigger`.
///
/// Only history entries whose age at `elapsed` is within
/// [`MatchConfig::DELAY_WINDOW`] are reconsidered. Each action kind lands
/// at exactly one checkpoint; ignores additionally land whenever the match
/// has run past the final checkpoint, whichever trigger is firing.
pub fn apply_delayed(
    meters: Meters,
    history: &[HistoryEntry],
    trigger: DelayTrigger,
    elapsed: f64,
) -> Meters {
    let mut updated = meters;

    let recent = history
        .iter()
        .filter(|entry| elapsed - entry.timestamp <= MatchConfig::DELAY_WINDOW);

    for entry in recent {
        let scale = entry.message.urgency.multiplier();

        match entry.action {
            Action::Handle => {
                if trigger == DelayTrigger::TwoMinutes {
                    updated = updated.with_business(15.0 * scale);
                }
            }
            Action::Delegate => {
                if trigger == DelayTrigger::ThreeMinutes {
                    updated = updated.with_team(-8.0 * scale);
                }
            }
            Action::Defer => {
                if trigger == DelayTrigger::FourMinutes {
                    updated = updated.with_business(-10.0 * scale);
                }
            }
            Action::Ignore => {
                if trigger == DelayTrigger::Final || elapsed >= DelayTrigger::Final.at() {
                    updated = updated.with_team(-15.0 * scale).with_business(-10.0 * scale);
                }
            }
        }
    }

    updated
}
