//! Domain types for flight itineraries.
//!
//! A `Flight` is an ordered list of `Segment`s, each with a departure and
//! an arrival `FlightTime`. Values are immutable once built.

mod error;
mod flight;
mod segment;
mod time;

pub use error::DomainError;
pub use flight::Flight;
pub use segment::Segment;
pub use time::{FlightTime, TimeError};
