//! Inverted segment rule.

use super::Rule;
use crate::domain::{Flight, FlightTime, Segment};

/// Flags flights with any segment arriving strictly before it departs.
///
/// Purely structural; `now` is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrivalBeforeDepartureRule;

impl Rule for ArrivalBeforeDepartureRule {
    fn description(&self) -> &str {
        "Имеются сегменты с датой прилёта раньше даты вылета:"
    }

    fn matches(&self, flight: &Flight, _now: FlightTime) -> bool {
        flight.segments().iter().any(Segment::is_inverted)
    }
}
