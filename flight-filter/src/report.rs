//! Rule evaluation and text rendering.
//!
//! One evaluation pass runs every rule over the full flight list against a
//! single reference instant. The result renders as plain text: a blank
//! line and the rule description, then one line per matching flight.

use std::io::{self, Write};

use tracing::debug;

use crate::domain::{Flight, FlightTime};
use crate::rules::{Rule, filter_flights};

/// The flights matched by one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatches<'a> {
    /// Description of the rule
    pub description: &'a str,
    /// Matching flights, in input order
    pub flights: Vec<&'a Flight>,
}

/// Evaluate each rule, in order, against every flight.
pub fn evaluate<'a>(
    flights: &'a [Flight],
    rules: &'a [Box<dyn Rule>],
    now: FlightTime,
) -> Vec<RuleMatches<'a>> {
    rules
        .iter()
        .map(|rule| {
            let matched = filter_flights(flights, &**rule, now);
            debug!(
                rule = rule.description(),
                matched = matched.len(),
                total = flights.len(),
                %now,
                "Rule evaluated"
            );
            RuleMatches {
                description: rule.description(),
                flights: matched,
            }
        })
        .collect()
}

/// Write the report for an evaluation pass.
pub fn render<W: Write>(results: &[RuleMatches<'_>], out: &mut W) -> io::Result<()> {
    for result in results {
        writeln!(out)?;
        writeln!(out, "{}", result.description)?;
        for flight in &result.flights {
            writeln!(out, "{flight}")?;
        }
    }
    Ok(())
}
