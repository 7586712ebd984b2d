//! Rule configuration.

use chrono::Duration;

/// Tunable thresholds for the rule set.
#[derive(Debug, Clone)]
pub struct RuleConfig {
    /// Total ground time (minutes) above which a flight is flagged.
    pub max_ground_time_mins: i64,
}

impl RuleConfig {
    /// Create a new configuration with the given threshold.
    pub fn new(max_ground_time_mins: i64) -> Self {
        Self {
            max_ground_time_mins,
        }
    }

    /// Returns the ground time threshold as a Duration.
    pub fn max_ground_time(&self) -> Duration {
        Duration::minutes(self.max_ground_time_mins)
    }
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            max_ground_time_mins: 120, // 2 hours
        }
    }
}
