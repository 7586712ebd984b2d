//! Flight type.
//!
//! A `Flight` is a full itinerary: one or more segments in the order they
//! are flown.

use std::fmt;

use chrono::Duration;

use super::Segment;

/// A complete itinerary.
///
/// Segments are kept in itinerary order as given. Neither chronological
/// order nor non-emptiness is enforced here; the rules inspect whatever
/// was built.
///
/// # Examples
///
/// ```
/// use flight_filter::domain::{Flight, FlightTime, Segment};
///
/// let t = |s| FlightTime::parse(s).unwrap();
/// let flight = Flight::new(vec![
///     Segment::new(t("2024-03-15T10:00"), t("2024-03-15T12:00")),
///     Segment::new(t("2024-03-15T13:00"), t("2024-03-15T15:00")),
/// ]);
///
/// assert_eq!(flight.segment_count(), 2);
/// assert_eq!(
///     flight.to_string(),
///     "[2024-03-15T10:00|2024-03-15T12:00] [2024-03-15T13:00|2024-03-15T15:00]"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Flight {
    segments: Vec<Segment>,
}

impl Flight {
    /// Creates a flight owning the given segments.
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Returns all segments in order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the number of segments.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Ground time at each connection.
    ///
    /// Yields, for every adjacent pair of segments, the time from the
    /// arrival of the earlier to the departure of the later. Segments are
    /// not reordered, so an out-of-order itinerary produces negative values.
    pub fn ground_times(&self) -> impl Iterator<Item = Duration> + '_ {
        self.segments
            .windows(2)
            .map(|pair| pair[1].departure().signed_duration_since(pair[0].arrival()))
    }

    /// Sum of all connection ground times. Zero for a single segment.
    pub fn total_ground_time(&self) -> Duration {
        self.ground_times().sum()
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FlightTime;

    fn time(s: &str) -> FlightTime {
        FlightTime::parse(s).unwrap()
    }

    fn seg(dep: &str, arr: &str) -> Segment {
        Segment::new(time(dep), time(arr))
    }

    #[test]
    fn single_segment_has_no_ground_time() {
        let flight = Flight::new(vec![seg("2024-03-15T10:00", "2024-03-15T12:00")]);
        assert_eq!(flight.ground_times().count(), 0);
        assert_eq!(flight.total_ground_time(), Duration::zero());
    }

    #[test]
    fn ground_times_per_connection() {
        let flight = Flight::new(vec![
            seg("2024-03-15T10:00", "2024-03-15T12:00"),
            seg("2024-03-15T13:00", "2024-03-15T14:00"),
            seg("2024-03-15T16:00", "2024-03-15T17:00"),
        ]);
        let gaps: Vec<_> = flight.ground_times().collect();
        assert_eq!(gaps, vec![Duration::hours(1), Duration::hours(2)]);
        assert_eq!(flight.total_ground_time(), Duration::hours(3));
    }

    #[test]
    fn out_of_order_segments_yield_negative_ground_time() {
        let flight = Flight::new(vec![
            seg("2024-03-15T13:00", "2024-03-15T14:00"),
            seg("2024-03-15T10:00", "2024-03-15T12:00"),
        ]);
        assert_eq!(flight.total_ground_time(), Duration::hours(-4));
    }

    #[test]
    fn empty_flight() {
        let flight = Flight::new(vec![]);
        assert_eq!(flight.segment_count(), 0);
        assert_eq!(flight.total_ground_time(), Duration::zero());
        assert_eq!(flight.to_string(), "");
    }

    #[test]
    fn display_single_segment() {
        let flight = Flight::new(vec![seg("2024-03-15T10:00", "2024-03-15T12:00")]);
        assert_eq!(flight.to_string(), "[2024-03-15T10:00|2024-03-15T12:00]");
    }
}
