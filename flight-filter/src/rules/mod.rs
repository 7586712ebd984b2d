//! Validation rules over flights.
//!
//! Each rule is an independent predicate with a human-readable
//! description. Rules that depend on the wall clock receive the reference
//! instant from the caller, so one evaluation pass compares every flight
//! against the same "now".

mod arrival;
mod config;
mod departure;
mod ground_time;

pub use arrival::ArrivalBeforeDepartureRule;
pub use config::RuleConfig;
pub use departure::DepartureBeforeNowRule;
pub use ground_time::LongGroundTimeRule;

use crate::domain::{Flight, FlightTime};

/// A named predicate that flags anomalous flights.
pub trait Rule {
    /// Human-readable description, printed as the heading of the rule's
    /// matches.
    fn description(&self) -> &str;

    /// Returns true if `flight` triggers this rule when evaluated at `now`.
    fn matches(&self, flight: &Flight, now: FlightTime) -> bool;
}

/// The standard rule set, in reporting order.
pub fn default_rules(config: &RuleConfig) -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(DepartureBeforeNowRule),
        Box::new(ArrivalBeforeDepartureRule),
        Box::new(LongGroundTimeRule::new(config.max_ground_time())),
    ]
}

/// Returns the flights matching `rule`, preserving input order.
pub fn filter_flights<'a>(
    flights: &'a [Flight],
    rule: &dyn Rule,
    now: FlightTime,
) -> Vec<&'a Flight> {
    flights
        .iter()
        .filter(|flight| rule.matches(flight, now))
        .collect()
}
