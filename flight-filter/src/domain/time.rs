//! Flight timestamps.
//!
//! Schedules are expressed in local wall-clock time with minute precision.
//! `FlightTime` wraps a `NaiveDateTime` and drops seconds and sub-seconds
//! at construction, so every value handled by the rules is already a
//! whole minute.

use chrono::{Duration, Local, NaiveDateTime, Timelike};
use std::fmt;
use std::ops::{Add, Sub};

/// Rendering and parsing format: `YYYY-MM-DDThh:mm`.
const FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Error returned when parsing an invalid timestamp string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A minute-precision local timestamp.
///
/// # Examples
///
/// ```
/// use flight_filter::domain::FlightTime;
///
/// let t = FlightTime::parse("2024-03-15T14:30").unwrap();
/// assert_eq!(t.to_string(), "2024-03-15T14:30");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FlightTime(NaiveDateTime);

impl FlightTime {
    /// Create a timestamp, truncating to the start of its minute.
    pub fn new(datetime: NaiveDateTime) -> Self {
        let truncated = datetime
            .with_second(0)
            .and_then(|dt| dt.with_nanosecond(0))
            .unwrap_or(datetime);
        Self(truncated)
    }

    /// The current local time, truncated to the minute.
    pub fn now() -> Self {
        Self::new(Local::now().naive_local())
    }

    /// Parse a timestamp in `YYYY-MM-DDThh:mm` format.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_filter::domain::FlightTime;
    ///
    /// assert!(FlightTime::parse("2024-03-15T00:00").is_ok());
    /// assert!(FlightTime::parse("2024-03-15 00:00").is_err());
    /// assert!(FlightTime::parse("2024-03-15T24:00").is_err());
    /// assert!(FlightTime::parse("2024-03-15T10:00:30").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        if s.len() != 16 {
            return Err(TimeError::new("expected YYYY-MM-DDThh:mm format"));
        }
        NaiveDateTime::parse_from_str(s, FORMAT)
            .map(Self)
            .map_err(|_| TimeError::new("expected YYYY-MM-DDThh:mm format"))
    }

    /// Converts to a NaiveDateTime.
    pub fn to_datetime(&self) -> NaiveDateTime {
        self.0
    }

    /// Add a duration, returning `None` on overflow.
    ///
    /// The result is truncated to the minute.
    pub fn checked_add(&self, duration: Duration) -> Option<Self> {
        self.0.checked_add_signed(duration).map(Self::new)
    }

    /// Subtract a duration, returning `None` on overflow.
    pub fn checked_sub(&self, duration: Duration) -> Option<Self> {
        self.0.checked_sub_signed(duration).map(Self::new)
    }

    /// Returns the duration between two times.
    ///
    /// Returns a negative duration if `other` is after `self`.
    pub fn signed_duration_since(&self, other: Self) -> Duration {
        self.0.signed_duration_since(other.0)
    }
}

impl Add<Duration> for FlightTime {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self::Output {
        self.checked_add(rhs).expect("time overflow")
    }
}

impl Sub<Duration> for FlightTime {
    type Output = Self;

    fn sub(self, rhs: Duration) -> Self::Output {
        self.checked_sub(rhs).expect("time overflow")
    }
}

impl fmt::Debug for FlightTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FlightTime({})", self.0.format(FORMAT))
    }
}

impl fmt::Display for FlightTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}
