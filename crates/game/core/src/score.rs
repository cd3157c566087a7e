//! End-of-match scoring and narrative reflection.

use crate::action::Action;
use crate::message::ImpactArea;
use crate::state::{HistoryEntry, Meters};

/// Total time a full match lasts, used to normalize the survival bonus.
const SCORE_TOTAL_TIME: f64 = 300.0;

/// Urgency-weighted tendencies accumulated over the whole history.
///
/// Purely additive and order-independent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerProfile {
    /// Handled now + ignored: acting fast, for better or worse.
    pub speed_focus: f64,
    /// Deferred + delegated: buying time.
    pub caution: f64,
    /// People messages met with involvement.
    pub team_focus: f64,
    /// Money/product messages handled personally.
    pub business_focus: f64,
}

/// Accumulates the player profile from the decision history.
pub fn player_profile(history: &[HistoryEntry]) -> PlayerProfile {
    let mut profile = PlayerProfile::default();

    for entry in history {
        let weight = entry.message.urgency.profile_weight();

        if matches!(entry.action, Action::Handle | Action::Ignore) {
            profile.speed_focus += weight;
        }
        if matches!(entry.action, Action::Defer | Action::Delegate) {
            profile.caution += weight;
        }
        if entry.message.impact_area == ImpactArea::People
            && matches!(entry.action, Action::Handle | Action::Delegate)
        {
            profile.team_focus += weight;
        }
        if matches!(
            entry.message.impact_area,
            ImpactArea::Money | ImpactArea::Product
        ) && entry.action == Action::Handle
        {
            profile.business_focus += weight;
        }
    }

    profile
}

/// Picks the narrative summary for a finished match.
///
/// A fixed decision list evaluated top to bottom; the first matching
/// archetype wins.
pub fn reflection(meters: &Meters, profile: &PlayerProfile, start_meters: &Meters) -> &'static str {
    let team_delta = meters.team_trust - start_meters.team_trust;
    let business_delta = meters.business_health - start_meters.business_health;
    let stress = meters.ceo_stress;

    // High business, low team
    if business_delta > 10.0 && team_delta < -10.0 {
        return "You chose profit. Your team noticed.";
    }

    // High team, low business
    if team_delta > 5.0 && business_delta < -10.0 {
        return "You protected your people. The numbers suffered.";
    }

    // High stress, low both
    if stress > 80.0 && (meters.team_trust < 40.0 || meters.business_health < 40.0) {
        return "You didn't survive. You crashed.";
    }

    // Balanced approach
    if team_delta.abs() < 15.0 && business_delta.abs() < 15.0 && stress < 70.0 {
        return "You made real trade-offs. That's leadership.";
    }

    // Speed focus
    if profile.speed_focus > profile.caution * 1.5 {
        return "You prioritized speed over everything. The cost was high.";
    }

    // Caution focus
    if profile.caution > profile.speed_focus * 1.5 {
        return "You were cautious. Too cautious. Momentum was lost.";
    }

    // Early end (meters at 0)
    if meters.team_trust == 0.0 || meters.business_health == 0.0 {
        return "You didn't make it. Sometimes one decision ends everything.";
    }

    // High stress
    if stress > 90.0 {
        return "You burned out but stayed profitable.";
    }

    "You survived. Barely."
}

/// Overall numeric score for a match, higher is better.
///
/// Weighted blend of final trust, health, low stress, and time survived,
/// scaled to an easy-to-read range.
pub fn score(meters: &Meters, duration_seconds: f64) -> u32 {
    let team_norm = meters.team_trust / 100.0;
    let business_norm = meters.business_health / 100.0;
    let stress_norm = 1.0 - meters.ceo_stress / 100.0;
    let time_norm = (duration_seconds / SCORE_TOTAL_TIME).clamp(0.0, 1.0);

    let quality =
        0.35 * team_norm + 0.35 * business_norm + 0.20 * stress_norm + 0.10 * time_norm;

    (quality * 1000.0).round().max(0.0) as u32
}
