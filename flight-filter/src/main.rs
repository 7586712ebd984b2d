use std::io;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use flight_filter::domain::FlightTime;
use flight_filter::report::{evaluate, render};
use flight_filter::rules::{RuleConfig, default_rules};
use flight_filter::sample::sample_flights;

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let flights = match sample_flights() {
        Ok(flights) => flights,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let rules = default_rules(&RuleConfig::default());
    let now = FlightTime::now();
    let results = evaluate(&flights, &rules, now);

    if let Err(e) = render(&results, &mut io::stdout().lock()) {
        eprintln!("Error: failed to write report: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
