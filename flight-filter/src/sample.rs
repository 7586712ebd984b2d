//! Sample flight data.
//!
//! Builds a fixed list of six itineraries relative to a reference instant.
//! Each one exercises a different rule outcome: normal flights, a flight
//! departing in the past, an inverted segment, and two itineraries with
//! too much time on the ground.

use chrono::Duration;
use tracing::debug;

use crate::domain::{DomainError, Flight, FlightTime, Segment};

/// Offset of the reference instant from the current time.
pub const SAMPLE_LEAD_TIME_DAYS: i64 = 3;

/// Build a flight by pairing consecutive timestamps into segments.
///
/// Timestamps 0 and 1 form the first segment, 2 and 3 the second, and so on.
///
/// # Errors
///
/// Returns [`DomainError::OddTimestampCount`] if the number of timestamps
/// is odd.
///
/// # Examples
///
/// ```
/// use flight_filter::domain::FlightTime;
/// use flight_filter::sample::flight_from_timestamps;
///
/// let t = |s| FlightTime::parse(s).unwrap();
/// let flight = flight_from_timestamps(&[
///     t("2024-03-15T10:00"), t("2024-03-15T12:00"),
///     t("2024-03-15T13:00"), t("2024-03-15T15:00"),
/// ]).unwrap();
/// assert_eq!(flight.segment_count(), 2);
///
/// assert!(flight_from_timestamps(&[t("2024-03-15T10:00")]).is_err());
/// ```
pub fn flight_from_timestamps(times: &[FlightTime]) -> Result<Flight, DomainError> {
    if times.len() % 2 != 0 {
        return Err(DomainError::OddTimestampCount(times.len()));
    }

    let segments = times
        .chunks_exact(2)
        .map(|pair| Segment::new(pair[0], pair[1]))
        .collect();

    Ok(Flight::new(segments))
}

/// Build the sample flights around `reference`.
///
/// `reference` plays the role of "three days from now"; every timestamp is
/// an offset from it.
pub fn sample_flights_at(reference: FlightTime) -> Result<Vec<Flight>, DomainError> {
    let at = |hours: i64| reference + Duration::hours(hours);

    let flights = vec![
        // Normal flight, two hours long
        flight_from_timestamps(&[at(0), at(2)])?,
        // Normal multi-segment flight
        flight_from_timestamps(&[at(0), at(2), at(3), at(5)])?,
        // Departs in the past
        flight_from_timestamps(&[reference - Duration::days(6), reference])?,
        // Arrives before it departs
        flight_from_timestamps(&[at(0), at(-6)])?,
        // More than two hours on the ground
        flight_from_timestamps(&[at(0), at(2), at(5), at(6)])?,
        // More than two hours on the ground across two connections
        flight_from_timestamps(&[at(0), at(2), at(3), at(4), at(6), at(7)])?,
    ];

    debug!(flights = flights.len(), %reference, "Built sample flights");
    Ok(flights)
}

/// Build the sample flights relative to the current time.
pub fn sample_flights() -> Result<Vec<Flight>, DomainError> {
    sample_flights_at(FlightTime::now() + Duration::days(SAMPLE_LEAD_TIME_DAYS))
}
