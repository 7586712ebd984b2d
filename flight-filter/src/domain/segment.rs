//! Flight segment type.

use std::fmt;

use chrono::Duration;

use super::FlightTime;

/// One leg of a flight.
///
/// Both timestamps are required. Arrival is not checked against
/// departure; an inverted segment is a valid value for the rules to flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    departure: FlightTime,
    arrival: FlightTime,
}

impl Segment {
    /// Creates a new segment.
    pub fn new(departure: FlightTime, arrival: FlightTime) -> Self {
        Self { departure, arrival }
    }

    /// Returns the departure time.
    pub fn departure(&self) -> FlightTime {
        self.departure
    }

    /// Returns the arrival time.
    pub fn arrival(&self) -> FlightTime {
        self.arrival
    }

    /// Time in the air. Negative for an inverted segment.
    pub fn duration(&self) -> Duration {
        self.arrival.signed_duration_since(self.departure)
    }

    /// Returns true if the segment arrives strictly before it departs.
    pub fn is_inverted(&self) -> bool {
        self.duration() < Duration::zero()
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}|{}]", self.departure, self.arrival)
    }
}
