//! Departure-in-the-past rule.

use super::Rule;
use crate::domain::{Flight, FlightTime};

/// Flags flights with any segment departing strictly before `now`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepartureBeforeNowRule;

impl Rule for DepartureBeforeNowRule {
    fn description(&self) -> &str {
        "Вылет до текущего момента времени:"
    }

    fn matches(&self, flight: &Flight, now: FlightTime) -> bool {
        flight.segments().iter().any(|s| s.departure() < now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Segment;
    use crate::sample::flight_from_timestamps;

    fn time(s: &str) -> FlightTime {
        FlightTime::parse(s).unwrap()
    }

    fn flight(times: &[&str]) -> Flight {
        let times: Vec<_> = times.iter().map(|s| time(s)).collect();
        flight_from_timestamps(&times).unwrap()
    }

    #[test]
    fn future_departure_does_not_match() {
        let f = flight(&["2024-03-18T10:00", "2024-03-18T12:00"]);
        assert!(!DepartureBeforeNowRule.matches(&f, time("2024-03-15T10:00")));
    }

    #[test]
    fn past_departure_matches() {
        let f = flight(&["2024-03-12T10:00", "2024-03-18T10:00"]);
        assert!(DepartureBeforeNowRule.matches(&f, time("2024-03-15T10:00")));
    }

    #[test]
    fn departure_exactly_now_does_not_match() {
        let f = flight(&["2024-03-15T10:00", "2024-03-15T12:00"]);
        assert!(!DepartureBeforeNowRule.matches(&f, time("2024-03-15T10:00")));
    }

    #[test]
    fn now_within_departure_minute_does_not_match() {
        // The clock is truncated to the minute before comparing
        let raw = chrono::NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(10, 0, 45)
            .unwrap();
        let f = flight(&["2024-03-15T10:00", "2024-03-15T12:00"]);
        assert!(!DepartureBeforeNowRule.matches(&f, FlightTime::new(raw)));
        assert!(DepartureBeforeNowRule.matches(&f, time("2024-03-15T10:01")));
    }

    #[test]
    fn any_segment_in_the_past_matches() {
        // Second segment departs before now even though the first does not
        let f = Flight::new(vec![
            Segment::new(time("2024-03-16T10:00"), time("2024-03-16T12:00")),
            Segment::new(time("2024-03-14T10:00"), time("2024-03-14T12:00")),
        ]);
        assert!(DepartureBeforeNowRule.matches(&f, time("2024-03-15T10:00")));
    }

    #[test]
    fn empty_flight_does_not_match() {
        let f = Flight::new(vec![]);
        assert!(!DepartureBeforeNowRule.matches(&f, time("2024-03-15T10:00")));
    }
}
