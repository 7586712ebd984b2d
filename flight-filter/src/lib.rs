//! Flight anomaly filter.
//!
//! Builds a small sample of flight itineraries and reports which of them
//! trip each validation rule: departures in the past, segments that arrive
//! before they depart, and too much total time on the ground.

pub mod domain;
pub mod report;
pub mod rules;
pub mod sample;
