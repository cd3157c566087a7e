//! Early-termination rules and their narrative reasons.

use crate::config::MatchConfig;
use crate::state::Meters;

/// Reason used when the countdown simply runs out.
pub const TIME_UP_REASON: &str = "Time is up. Five minutes of decisions are behind you.";

/// Which meters sit in their critical zone.
///
/// Stress is critical high; trust and health are critical low.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CriticalMeters {
    pub stress: bool,
    pub team: bool,
    pub business: bool,
}

impl CriticalMeters {
    pub fn classify(meters: &Meters) -> Self {
        Self {
            stress: meters.ceo_stress >= MatchConfig::STRESS_CRITICAL,
            team: meters.team_trust <= MatchConfig::TRUST_CRITICAL,
            business: meters.business_health <= MatchConfig::HEALTH_CRITICAL,
        }
    }

    pub fn count(&self) -> usize {
        usize::from(self.stress) + usize::from(self.team) + usize::from(self.business)
    }
}

/// Returns the end reason if two or more meters are critical.
///
/// Most specific combination first, generic text as the fallback.
pub fn critical_end_reason(meters: &Meters) -> Option<&'static str> {
    let critical = CriticalMeters::classify(meters);
    if critical.count() < 2 {
        return None;
    }

    let reason = match (critical.stress, critical.team, critical.business) {
        (true, true, true) => "You burned out, lost the team, and the business stalled.",
        (true, true, false) => "You burned out and your team lost trust.",
        (true, false, true) => "You burned out while the business was collapsing.",
        (false, true, true) => "The company ran out of trust and health.",
        _ => "Two of your metrics reached critical levels.",
    };

    Some(reason)
}
