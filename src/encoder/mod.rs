//! State encoders: observation → discrete state key.
//!
//! An encoder reduces the raw observation bundle to one of a small,
//! enumerable set of state keys. Two variants are provided:
//!
//! - [`GeometricEncoder`]: toroidal direction-to-destination in the agent's
//!   local frame, combined with the light color and a coarse oncoming flag
//!   (25 keys).
//! - [`WaypointEncoder`]: the planner's suggested move combined with the
//!   light color and the full {oncoming, left, right} occupancy pattern
//!   (49 keys).
//!
//! Encoding is a deterministic, stateless function of the current
//! observation only; it must never depend on history. Both variants map
//! literal arrival at the destination cell to the single terminal
//! [`StateKey::goal`] key.

pub mod geometric;
pub mod waypoint;

use serde::{Deserialize, Serialize};

use crate::{error::Result, observation::Observation, types::StateKey};

pub use geometric::GeometricEncoder;
pub use waypoint::WaypointEncoder;

/// Strategy interface for reducing observations to state keys.
///
/// Implementations must be total over valid observations and produce only
/// keys from their own enumerated key space, so the Q-table can be
/// pre-populated at construction.
pub trait StateEncoder: Send {
    /// Encode an observation into its state key.
    ///
    /// # Errors
    ///
    /// Fails loudly on malformed observations (out-of-grid positions, or a
    /// missing waypoint for the waypoint variant) instead of defaulting.
    fn encode(&self, observation: &Observation) -> Result<StateKey>;

    /// Enumerate the full key space of this encoder, terminal key included.
    fn enumerate_keys(&self) -> Vec<StateKey>;
}

/// Which state encoding the agent uses, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncodingVariant {
    /// Relative-direction encoding, 25 keys.
    Geometric,
    /// Planner-waypoint encoding, 49 keys.
    Waypoint,
}

impl EncodingVariant {
    /// Build the encoder for this variant.
    pub fn encoder(self) -> Box<dyn StateEncoder> {
        match self {
            EncodingVariant::Geometric => Box::new(GeometricEncoder),
            EncodingVariant::Waypoint => Box::new(WaypointEncoder),
        }
    }
}

impl Default for EncodingVariant {
    fn default() -> Self {
        EncodingVariant::Geometric
    }
}

/// Occupancy suffix over the {oncoming, left, right} sensed lanes.
pub(crate) fn occupancy_label(oncoming: bool, left: bool, right: bool) -> &'static str {
    match (oncoming, left, right) {
        (false, false, false) => "CLEAR",
        (true, false, false) => "O",
        (false, true, false) => "L",
        (false, false, true) => "R",
        (true, true, false) => "OL",
        (true, false, true) => "OR",
        (false, true, true) => "LR",
        (true, true, true) => "OLR",
    }
}

/// All eight occupancy suffixes in enumeration order.
pub(crate) const OCCUPANCY_LABELS: [&str; 8] =
    ["CLEAR", "O", "L", "R", "OL", "OR", "LR", "OLR"];
