//! The learning agent: ties encoder, Q-table, exploration, and stats
//! together behind the two per-tick entry points.

use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

use crate::{
    config::AgentConfig,
    encoder::StateEncoder,
    error::Result,
    exploration::ExplorationSchedule,
    observation::Observation,
    q_table::QTable,
    stats::TrialStats,
    types::{Action, StateKey},
};

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Serializable snapshot of everything a trained agent owns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct AgentState {
    pub config: AgentConfig,
    pub q_table: QTable,
    pub exploration: ExplorationSchedule,
    pub stats: TrialStats,
}

/// Tabular Q-learning agent for the grid world.
///
/// The simulation collaborator drives it with exactly two calls per tick,
/// in order: [`choose_action`](Self::choose_action) to obtain the action
/// for the current observation, then [`learn`](Self::learn) once the
/// reward and follow-up observation are known. All learning state (Q-table,
/// greedy cache, exploration rate, trial counters) is exclusively owned by
/// the agent instance; the inspection accessors exist for debugging and
/// reporting only.
///
/// # Examples
///
/// ```no_run
/// use gridcab::{
///     Action, AgentConfig, EncodingVariant, GridSize, Heading, LightColor,
///     LearningAgent, Observation, Position,
/// };
///
/// let mut agent =
///     LearningAgent::new(AgentConfig::new(EncodingVariant::Geometric).with_seed(7)).unwrap();
///
/// let before = Observation::new(
///     Position::new(3, 2),
///     Position::new(2, 2),
///     GridSize::new(5, 5),
///     Heading::North,
///     LightColor::Green,
/// );
/// let action = agent.choose_action(&before).unwrap();
/// // ... the simulation executes the action and reports back ...
/// # let (reward, after) = (2.0, before);
/// agent.learn(&before, action, reward, &after).unwrap();
/// ```
pub struct LearningAgent {
    config: AgentConfig,
    encoder: Box<dyn StateEncoder>,
    q_table: QTable,
    exploration: ExplorationSchedule,
    stats: TrialStats,
    rng: StdRng,
}

impl LearningAgent {
    /// Create a new agent from a validated configuration.
    ///
    /// The Q-table is pre-populated with the full enumerated key space of
    /// the configured encoding, zero-initialized.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] when a parameter is
    /// out of range.
    pub fn new(config: AgentConfig) -> Result<Self> {
        config.validate()?;
        let encoder = config.encoding.encoder();
        let q_table = QTable::new(
            config.learning_rate,
            config.discount_rate,
            encoder.enumerate_keys(),
        );
        let exploration = ExplorationSchedule::new(
            config.exploration_max,
            config.exploration_decay,
            config.exploration_min,
        );
        let stats = TrialStats::new(config.trials);
        let rng = build_rng(config.seed);
        Ok(Self {
            config,
            encoder,
            q_table,
            exploration,
            stats,
            rng,
        })
    }

    /// Pick an action for the current observation.
    ///
    /// Encodes the observation, advances the exploration schedule (decay
    /// happens on every decision step), and either returns the cached
    /// greedy action or explores. Exploration, and any state whose greedy
    /// action is still unset, picks uniformly among the four actions
    /// excluding the cached best when one exists, so an exploratory step is
    /// guaranteed to try something different.
    ///
    /// # Errors
    ///
    /// Fails on a malformed observation; the tick is aborted with the
    /// schedule, statistics, and Q-table untouched.
    pub fn choose_action(&mut self, observation: &Observation) -> Result<Action> {
        let state = self.encoder.encode(observation)?;
        self.stats
            .on_step(observation.location, observation.destination);
        Ok(self.select(&state))
    }

    fn select(&mut self, state: &StateKey) -> Action {
        self.exploration.advance();
        let cached = self.q_table.cached_action(state);
        let explore = cached.is_none() || self.exploration.should_explore(&mut self.rng);

        if let (Some(best), false) = (cached, explore) {
            return best;
        }

        let candidates: Vec<Action> = Action::ALL
            .into_iter()
            .filter(|action| Some(*action) != cached)
            .collect();
        // One to three actions may be excluded, never all four.
        *candidates.choose(&mut self.rng).unwrap()
    }

    /// Apply the Q-learning update for one executed action.
    ///
    /// Encodes both observations and revises the Q-value for the earlier
    /// state, then refreshes that state's greedy cache.
    ///
    /// # Errors
    ///
    /// Fails on a malformed observation; the Q-table is untouched in that
    /// case.
    pub fn learn(
        &mut self,
        before: &Observation,
        action: Action,
        reward: f64,
        after: &Observation,
    ) -> Result<()> {
        let state = self.encoder.encode(before)?;
        let next_state = self.encoder.encode(after)?;
        self.q_table
            .update(&state, action, reward, &next_state, &mut self.rng);
        Ok(())
    }

    /// Encode an observation with this agent's configured encoder.
    ///
    /// Exposed for inspection and testing; carries no side effects.
    pub fn encode(&self, observation: &Observation) -> Result<StateKey> {
        self.encoder.encode(observation)
    }

    /// The configuration the agent was built with.
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Read-only view of the Q-table and greedy cache.
    pub fn q_table(&self) -> &QTable {
        &self.q_table
    }

    /// Q-values for one state, in action-index order.
    pub fn q_values(&self, state: &StateKey) -> [f64; crate::types::ACTION_COUNT] {
        self.q_table.action_values(state)
    }

    /// Cached greedy action for one state, `None` until first update.
    pub fn policy_action(&self, state: &StateKey) -> Option<Action> {
        self.q_table.cached_action(state)
    }

    /// Current exploration probability.
    pub fn exploration_rate(&self) -> f64 {
        self.exploration.rate()
    }

    /// Goal-reached statistics.
    pub fn stats(&self) -> &TrialStats {
        &self.stats
    }

    pub(crate) fn export_state(&self) -> AgentState {
        AgentState {
            config: self.config,
            q_table: self.q_table.clone(),
            exploration: self.exploration,
            stats: self.stats,
        }
    }

    pub(crate) fn from_state(state: AgentState) -> Self {
        let encoder = state.config.encoding.encoder();
        let rng = build_rng(state.config.seed);
        Self {
            config: state.config,
            encoder,
            q_table: state.q_table,
            exploration: state.exploration,
            stats: state.stats,
            rng,
        }
    }
}
