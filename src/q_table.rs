//! Q-table and greedy-policy cache for temporal difference learning.

use std::collections::HashMap;

use rand::{Rng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

use crate::types::{ACTION_COUNT, Action, StateKey};

/// Q-table mapping state keys to per-action value estimates, with a cached
/// greedy action per state.
///
/// The table is pre-populated with the full enumerated key space of the
/// configured encoder, zero-initialized. A write against a key that was
/// somehow never enumerated auto-initializes it to zeros rather than
/// failing, keeping the learning loop robust; the policy cache stays `None`
/// for any state that has never been updated, which is how inspectors tell
/// "never visited, defaulted" apart from "learned".
///
/// The policy cache is recomputed on every Q-value write for the written
/// state (recompute-on-write), so it always indexes a maximal entry of the
/// corresponding Q-row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QTable {
    /// Q-values: state -> one estimate per action, in action-index order.
    q_values: HashMap<StateKey, [f64; ACTION_COUNT]>,
    /// Greedy cache: state -> best action, `None` until first update.
    policy: HashMap<StateKey, Option<Action>>,
    /// Learning rate α
    learning_rate: f64,
    /// Discount factor γ
    discount_rate: f64,
}

impl QTable {
    /// Create a Q-table over the given enumerated key space.
    pub fn new(learning_rate: f64, discount_rate: f64, keys: Vec<StateKey>) -> Self {
        let q_values = keys
            .iter()
            .map(|key| (key.clone(), [0.0; ACTION_COUNT]))
            .collect();
        let policy = keys.into_iter().map(|key| (key, None)).collect();
        Self {
            q_values,
            policy,
            learning_rate,
            discount_rate,
        }
    }

    /// Q-values for a state in action-index order; zeros if never stored.
    pub fn action_values(&self, state: &StateKey) -> [f64; ACTION_COUNT] {
        self.q_values
            .get(state)
            .copied()
            .unwrap_or([0.0; ACTION_COUNT])
    }

    /// Maximum Q-value over all actions in a state.
    pub fn max_q(&self, state: &StateKey) -> f64 {
        self.action_values(state)
            .into_iter()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Cached greedy action for a state, `None` if the state was never
    /// updated.
    pub fn cached_action(&self, state: &StateKey) -> Option<Action> {
        self.policy.get(state).copied().flatten()
    }

    /// Whether a state has received at least one learning update.
    pub fn visited(&self, state: &StateKey) -> bool {
        self.cached_action(state).is_some()
    }

    /// Q-learning update: off-policy TD control.
    ///
    /// Q(s,a) ← (1 − α) Q(s,a) + α [r + γ max_a' Q(s',a')]
    ///
    /// Afterwards the greedy cache for `state` is recomputed as a uniform
    /// random choice among all currently-maximal actions, so persistent
    /// first-index bias cannot build up when several actions are equally
    /// good.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        state: &StateKey,
        action: Action,
        reward: f64,
        next_state: &StateKey,
        rng: &mut R,
    ) {
        let best_next = self.max_q(next_state);
        let target = reward + self.discount_rate * best_next;

        let values = self
            .q_values
            .entry(state.clone())
            .or_insert([0.0; ACTION_COUNT]);
        let column = action.index();
        values[column] = (1.0 - self.learning_rate) * values[column] + self.learning_rate * target;

        let values = *values;
        let max = values.into_iter().fold(f64::NEG_INFINITY, f64::max);
        let maximal: Vec<Action> = Action::ALL
            .into_iter()
            .filter(|candidate| values[candidate.index()] == max)
            .collect();
        // `maximal` always holds at least the action just written.
        let chosen = *maximal.choose(rng).unwrap();
        self.policy.insert(state.clone(), Some(chosen));
    }

    /// Number of states in the table.
    pub fn len(&self) -> usize {
        self.q_values.len()
    }

    /// Whether the table holds no states.
    pub fn is_empty(&self) -> bool {
        self.q_values.is_empty()
    }

    /// Iterate over all state keys in the table.
    pub fn states(&self) -> impl Iterator<Item = &StateKey> {
        self.q_values.keys()
    }
}
