//! Deterministic message delivery schedule.
//!
//! The cadence accelerates over the match: one message every 4 s in the
//! first minute, every 3 s up to the three-minute mark, then every 2 s
//! until time runs out. No randomness; the same duration always produces
//! the same timestamps.

/// Seconds into the match at which the first message arrives.
const FIRST_DELIVERY_AT: f64 = 1.5;

/// Strictly increasing delivery timestamps plus the delivery cursor.
///
/// The cursor only ever moves forward, so a timestamp can never be
/// delivered twice regardless of how often the periodic check runs.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeliverySchedule {
    times: Vec<f64>,
    next: usize,
}

impl DeliverySchedule {
    /// Generates the schedule for a match of `total_time` seconds.
    ///
    /// Every timestamp lies in `[FIRST_DELIVERY_AT, total_time)`. A
    /// non-positive duration yields an empty schedule rather than an error;
    /// an empty schedule simply never delivers.
    pub fn generate(total_time: f64) -> Self {
        let mut times = Vec::new();

        if total_time > 0.0 {
            let mut time = FIRST_DELIVERY_AT;
            while time < total_time {
                times.push(time);
                time += Self::gap_at(time);
            }
        }

        debug_assert!(times.windows(2).all(|w| w[0] < w[1]));
        Self { times, next: 0 }
    }

    /// Inter-arrival gap chosen by the current timestamp's bracket.
    fn gap_at(time: f64) -> f64 {
        if time < 60.0 {
            4.0
        } else if time < 180.0 {
            3.0
        } else {
            2.0
        }
    }

    /// Number of deliveries the schedule will ever produce.
    ///
    /// The runtime validates the message catalog against this.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// All timestamps, in delivery order.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Consumes and returns the earliest undelivered timestamp that is due
    /// at `elapsed` seconds, if any. At most one timestamp per call.
    pub fn take_due(&mut self, elapsed: f64) -> Option<f64> {
        let time = *self.times.get(self.next)?;
        if time <= elapsed {
            self.next += 1;
            Some(time)
        } else {
            None
        }
    }
}
