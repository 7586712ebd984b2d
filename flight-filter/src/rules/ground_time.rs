//! Excessive ground time rule.

use chrono::Duration;

use super::{Rule, RuleConfig};
use crate::domain::{Flight, FlightTime};

/// Flags flights whose total ground time strictly exceeds a threshold.
///
/// Ground time is summed over adjacent segment pairs in itinerary order.
/// Segments are not sorted first, and a single-segment flight never
/// matches.
#[derive(Debug, Clone, Copy)]
pub struct LongGroundTimeRule {
    max_ground_time: Duration,
}

impl LongGroundTimeRule {
    /// Create a rule with the given threshold.
    pub fn new(max_ground_time: Duration) -> Self {
        Self { max_ground_time }
    }
}

impl Default for LongGroundTimeRule {
    fn default() -> Self {
        Self::new(RuleConfig::default().max_ground_time())
    }
}

impl Rule for LongGroundTimeRule {
    fn description(&self) -> &str {
        "Общее время, проведённое на земле, превышает два часа:"
    }

    fn matches(&self, flight: &Flight, _now: FlightTime) -> bool {
        flight.total_ground_time() > self.max_ground_time
    }
}
