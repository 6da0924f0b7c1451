//! Tabular Q-learning decision core for a grid-world driving agent.
//!
//! This crate provides:
//! - Two state encoders reducing world observations to compact discrete keys
//! - A Q-table with a greedy-policy cache and randomized tie-breaking
//! - A decaying ε-exploration schedule
//! - A learning agent exposing the two per-tick entry points
//!   (`choose_action` / `learn`) and inspection accessors
//! - Versioned persistence of trained agents
//!
//! The grid simulation, route planner, reward computation, and rendering
//! are external collaborators; the core owns no world state.

pub mod agent;
pub mod config;
pub mod encoder;
pub mod error;
pub mod exploration;
pub mod observation;
pub mod q_table;
pub mod serialization;
pub mod stats;
pub mod types;

pub use agent::LearningAgent;
pub use config::AgentConfig;
pub use encoder::{EncodingVariant, GeometricEncoder, StateEncoder, WaypointEncoder};
pub use error::{Error, Result};
pub use exploration::ExplorationSchedule;
pub use observation::Observation;
pub use q_table::QTable;
pub use serialization::SavedAgent;
pub use stats::TrialStats;
pub use types::{
    ACTION_COUNT, Action, GridSize, Heading, LightColor, Position, StateKey, Waypoint,
};
