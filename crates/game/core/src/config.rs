/// Match configuration constants and tunable parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchConfig {
    /// Total match duration in seconds.
    pub total_time: f64,
    /// Fixed simulation step in seconds for both the clock tick and the
    /// delivery check.
    pub tick_seconds: f64,
}

impl MatchConfig {
    // ===== fixed rules shared by every match =====
    /// Passive stress gain per second per waiting message.
    pub const WAIT_STRESS_PER_SECOND: f64 = 0.7;
    /// Passive business erosion per second per waiting message (negative).
    pub const WAIT_BUSINESS_PER_SECOND: f64 = -0.4;

    /// CEO stress at or above this is critical.
    pub const STRESS_CRITICAL: f64 = 95.0;
    /// Team trust at or below this is critical.
    pub const TRUST_CRITICAL: f64 = 5.0;
    /// Business health at or below this is critical.
    pub const HEALTH_CRITICAL: f64 = 5.0;

    /// Only history entries at most this old (seconds) are reconsidered
    /// when a delayed-effect checkpoint fires.
    pub const DELAY_WINDOW: f64 = 120.0;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TOTAL_TIME: f64 = 300.0;
    pub const DEFAULT_TICK_SECONDS: f64 = 0.1;

    pub fn new() -> Self {
        Self {
            total_time: Self::DEFAULT_TOTAL_TIME,
            tick_seconds: Self::DEFAULT_TICK_SECONDS,
        }
    }

    pub fn with_total_time(total_time: f64) -> Self {
        Self {
            total_time,
            ..Self::new()
        }
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new()
    }
}
