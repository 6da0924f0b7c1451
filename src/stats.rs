//! Trial bookkeeping: goal-reached counts and rates across episodes.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Goal-reached statistics across the configured run of trials.
///
/// Purely observational: never feeds back into the Q-table or policy.
/// Counters reset only when the agent is reconstructed, not between
/// episodes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrialStats {
    goals_reached: u32,
    total_trials: u32,
    rate: f64,
}

impl TrialStats {
    /// Create stats normalized against `total_trials` configured trials.
    pub fn new(total_trials: u32) -> Self {
        Self {
            goals_reached: 0,
            total_trials,
            rate: 0.0,
        }
    }

    /// Record one tick; counts a goal when location and destination
    /// coincide.
    pub fn on_step(&mut self, location: Position, destination: Position) {
        if location == destination {
            self.goals_reached += 1;
            self.rate = f64::from(self.goals_reached) / f64::from(self.total_trials);
        }
    }

    /// Number of trials that reached the goal.
    pub fn goals_reached(&self) -> u32 {
        self.goals_reached
    }

    /// Goal-reached count as a fraction of the configured trial total.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Configured trial total used for normalization.
    pub fn total_trials(&self) -> u32 {
        self.total_trials
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_only_on_arrival() {
        let mut stats = TrialStats::new(10);
        stats.on_step(Position::new(1, 1), Position::new(2, 2));
        assert_eq!(stats.goals_reached(), 0);
        assert_eq!(stats.rate(), 0.0);

        stats.on_step(Position::new(2, 2), Position::new(2, 2));
        assert_eq!(stats.goals_reached(), 1);
        assert!((stats.rate() - 0.1).abs() < 1e-12);

        stats.on_step(Position::new(2, 2), Position::new(2, 2));
        assert_eq!(stats.goals_reached(), 2);
        assert!((stats.rate() - 0.2).abs() < 1e-12);
    }
}
