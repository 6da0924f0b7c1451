//! Decaying ε-exploration schedule.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Exploration probability with per-step exponential decay toward a floor.
///
/// The rate starts at the configured maximum and is advanced once per
/// decision step, whether or not exploration actually triggered that step.
/// It never resets within one agent lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExplorationSchedule {
    rate: f64,
    decay: f64,
    floor: f64,
}

impl ExplorationSchedule {
    /// Create a schedule starting at `max`.
    pub fn new(max: f64, decay: f64, floor: f64) -> Self {
        Self {
            rate: max,
            decay,
            floor,
        }
    }

    /// Current exploration probability.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Advance one decision step: rate ← max(rate − rate·decay, floor).
    pub fn advance(&mut self) {
        self.rate = (self.rate - self.rate * self.decay).max(self.floor);
    }

    /// Draw one uniform sample; true with probability ≈ rate.
    pub fn should_explore<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        rng.random::<f64>() > 1.0 - self.rate
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_decay_is_monotone_and_floored() {
        let mut schedule = ExplorationSchedule::new(0.8, 0.00085, 0.01);
        let mut previous = schedule.rate();
        for _ in 0..20_000 {
            schedule.advance();
            assert!(schedule.rate() <= previous);
            assert!(schedule.rate() >= 0.01);
            previous = schedule.rate();
        }
        assert!(
            (schedule.rate() - 0.01).abs() < 1e-9,
            "rate should have reached the floor, got {}",
            schedule.rate()
        );
    }

    #[test]
    fn test_single_step_decay() {
        let mut schedule = ExplorationSchedule::new(0.8, 0.00085, 0.01);
        schedule.advance();
        assert!((schedule.rate() - (0.8 - 0.8 * 0.00085)).abs() < 1e-12);
    }

    #[test]
    fn test_should_explore_frequency_tracks_rate() {
        let schedule = ExplorationSchedule::new(0.3, 0.0, 0.01);
        let mut rng = StdRng::seed_from_u64(9);
        let trials = 20_000;
        let explored = (0..trials)
            .filter(|_| schedule.should_explore(&mut rng))
            .count();
        let frequency = explored as f64 / trials as f64;
        assert!(
            (frequency - 0.3).abs() < 0.02,
            "explore frequency should be near the rate, got {frequency}"
        );
    }
}
