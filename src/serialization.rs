//! Serialization support for trained agents.

use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{
    agent::{AgentState, LearningAgent},
    error::Error,
};

/// Versioned on-disk snapshot of a trained [`LearningAgent`].
///
/// Encoded with MessagePack. The snapshot carries the full configuration,
/// Q-table, greedy cache, exploration rate, and trial statistics, so a
/// restored agent resumes exactly where the saved one stopped (modulo the
/// RNG stream, which restarts from the configured seed).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedAgent {
    pub version: u32,
    state: AgentState,
}

impl SavedAgent {
    pub const VERSION: u32 = 1;

    /// Snapshot a live agent.
    pub fn from_agent(agent: &LearningAgent) -> Self {
        Self {
            version: Self::VERSION,
            state: agent.export_state(),
        }
    }

    /// Rebuild a live agent from the snapshot.
    pub fn into_agent(self) -> Result<LearningAgent> {
        if self.version != Self::VERSION {
            return Err(Error::UnsupportedVersion {
                found: self.version,
                expected: Self::VERSION,
            }
            .into());
        }
        Ok(LearningAgent::from_state(self.state))
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path.as_ref())
            .with_context(|| format!("Failed to create file: {}", path.as_ref().display()))?;
        let mut writer = BufWriter::new(file);

        rmp_serde::encode::write(&mut writer, self).context("Failed to serialize agent")?;

        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())
            .with_context(|| format!("Failed to open file: {}", path.as_ref().display()))?;
        let reader = BufReader::new(file);

        rmp_serde::decode::from_read(reader).context("Failed to deserialize agent")
    }
}
