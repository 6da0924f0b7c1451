//! Agent configuration.

use serde::{Deserialize, Serialize};

use crate::{
    encoder::EncodingVariant,
    error::{Error, Result},
};

/// Configuration for creating a [`crate::LearningAgent`].
///
/// All parameters are fixed at construction and immutable mid-run.
///
/// # Examples
///
/// ```
/// use gridcab::{AgentConfig, EncodingVariant};
///
/// let config = AgentConfig::new(EncodingVariant::Waypoint)
///     .with_seed(42)
///     .with_learning(0.5, 0.99)
///     .with_exploration(0.6, 0.05, 0.001)
///     .with_trials(100);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// State encoding variant.
    pub encoding: EncodingVariant,
    /// Initial exploration probability (ε max).
    pub exploration_max: f64,
    /// Exploration floor (ε min).
    pub exploration_min: f64,
    /// Per-step relative decay of the exploration rate.
    pub exploration_decay: f64,
    /// Learning rate α.
    pub learning_rate: f64,
    /// Discount rate γ.
    pub discount_rate: f64,
    /// Trial count used to normalize the goal-reached rate.
    pub trials: u32,
    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl AgentConfig {
    /// Create a configuration with the given encoding and default learning
    /// parameters (ε 0.8 → 0.01 at decay 0.00085, α = γ = 0.9, 200 trials).
    pub fn new(encoding: EncodingVariant) -> Self {
        Self {
            encoding,
            exploration_max: 0.8,
            exploration_min: 0.01,
            exploration_decay: 0.00085,
            learning_rate: 0.9,
            discount_rate: 0.9,
            trials: 200,
            seed: None,
        }
    }

    /// Set learning rate α and discount rate γ.
    pub fn with_learning(mut self, learning_rate: f64, discount_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self.discount_rate = discount_rate;
        self
    }

    /// Set the exploration schedule (max, floor, per-step decay).
    pub fn with_exploration(mut self, max: f64, min: f64, decay: f64) -> Self {
        self.exploration_max = max;
        self.exploration_min = min;
        self.exploration_decay = decay;
        self
    }

    /// Set the trial count used for rate normalization.
    pub fn with_trials(mut self, trials: u32) -> Self {
        self.trials = trials;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate all parameter ranges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] naming the offending
    /// parameter.
    pub fn validate(&self) -> Result<()> {
        fn invalid(message: impl Into<String>) -> Error {
            Error::InvalidConfiguration {
                message: message.into(),
            }
        }

        if !(self.exploration_max > 0.0 && self.exploration_max <= 1.0) {
            return Err(invalid(format!(
                "exploration_max must be in (0, 1], got {}",
                self.exploration_max
            )));
        }
        if !(self.exploration_min > 0.0 && self.exploration_min <= self.exploration_max) {
            return Err(invalid(format!(
                "exploration_min must be in (0, exploration_max], got {}",
                self.exploration_min
            )));
        }
        if !(self.exploration_decay >= 0.0 && self.exploration_decay < 1.0) {
            return Err(invalid(format!(
                "exploration_decay must be in [0, 1), got {}",
                self.exploration_decay
            )));
        }
        if !(self.learning_rate > 0.0 && self.learning_rate <= 1.0) {
            return Err(invalid(format!(
                "learning_rate must be in (0, 1], got {}",
                self.learning_rate
            )));
        }
        if !(self.discount_rate >= 0.0 && self.discount_rate <= 1.0) {
            return Err(invalid(format!(
                "discount_rate must be in [0, 1], got {}",
                self.discount_rate
            )));
        }
        if self.trials == 0 {
            return Err(invalid("trials must be at least 1"));
        }
        Ok(())
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::new(EncodingVariant::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AgentConfig::default().validate().is_ok());
    }

    #[test]
    fn test_boundary_rates_are_valid() {
        let config = AgentConfig::default().with_learning(1.0, 0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_parameters() {
        let cases = [
            AgentConfig::default().with_exploration(0.0, 0.01, 0.001),
            AgentConfig::default().with_exploration(1.5, 0.01, 0.001),
            AgentConfig::default().with_exploration(0.8, 0.9, 0.001),
            AgentConfig::default().with_exploration(0.8, 0.01, 1.0),
            AgentConfig::default().with_learning(0.0, 0.9),
            AgentConfig::default().with_learning(0.9, 1.5),
            AgentConfig::default().with_trials(0),
        ];
        for config in cases {
            assert!(
                matches!(
                    config.validate(),
                    Err(Error::InvalidConfiguration { .. })
                ),
                "expected rejection for {config:?}"
            );
        }
    }
}
