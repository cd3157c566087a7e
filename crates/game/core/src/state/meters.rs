//! Bounded company-health meters.

/// Lower bound for every meter.
pub const METER_MIN: f64 = 0.0;
/// Upper bound for every meter.
pub const METER_MAX: f64 = 100.0;

/// Three bounded scalars tracking the state of the company and its leader.
///
/// Every mutation goes through the `with_*` helpers, which clamp to
/// `[0, 100]`; observable state is never out of range, not even transiently.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Meters {
    pub team_trust: f64,
    pub business_health: f64,
    pub ceo_stress: f64,
}

impl Meters {
    /// Meter values at the start of every match.
    pub const INITIAL: Self = Self {
        team_trust: 70.0,
        business_health: 60.0,
        ceo_stress: 30.0,
    };

    pub fn new(team_trust: f64, business_health: f64, ceo_stress: f64) -> Self {
        Self {
            team_trust: clamp(team_trust),
            business_health: clamp(business_health),
            ceo_stress: clamp(ceo_stress),
        }
    }

    /// Returns a copy with `delta` added to team trust, clamped.
    pub fn with_team(self, delta: f64) -> Self {
        Self {
            team_trust: clamp(self.team_trust + delta),
            ..self
        }
    }

    /// Returns a copy with `delta` added to business health, clamped.
    pub fn with_business(self, delta: f64) -> Self {
        Self {
            business_health: clamp(self.business_health + delta),
            ..self
        }
    }

    /// Returns a copy with `delta` added to CEO stress, clamped.
    pub fn with_stress(self, delta: f64) -> Self {
        Self {
            ceo_stress: clamp(self.ceo_stress + delta),
            ..self
        }
    }

    /// True when every meter lies within `[0, 100]`.
    pub fn in_bounds(&self) -> bool {
        let ok = |v: f64| (METER_MIN..=METER_MAX).contains(&v);
        ok(self.team_trust) && ok(self.business_health) && ok(self.ceo_stress)
    }
}

impl Default for Meters {
    fn default() -> Self {
        Self::INITIAL
    }
}

fn clamp(value: f64) -> f64 {
    value.clamp(METER_MIN, METER_MAX)
}
