//! Relative-direction state encoding on a toroidal grid.

use crate::{
    encoder::StateEncoder,
    error::Result,
    observation::Observation,
    types::{LightColor, StateKey},
};

/// Directional labels by local octant, starting dead ahead and rotating
/// clockwise: which of {forward, right, back, left} point at the goal.
const DIRECTION_LABELS: [&str; 8] = ["Fo", "Fo/Ri", "Ri", "Ri/Ba", "Ba", "Ba/Le", "Le", "Fo/Le"];

/// Traffic suffixes in enumeration order.
const TRAFFIC_SUFFIXES: [&str; 3] = ["RED", "GREEN-OCC", "GREEN-CLEAR"];

/// Geometric state encoding (25 keys).
///
/// Projects the wrap-around direction from the agent to its destination
/// into the agent's local forward/back/left/right frame (8 octants), then
/// appends a traffic suffix: `-RED`, `-GREEN-OCC` (green with oncoming
/// traffic), or `-GREEN-CLEAR`. Literal arrival at the destination cell
/// maps to the terminal `GOAL` key regardless of heading or traffic.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeometricEncoder;

/// Signed vertical wrap distance to the destination; positive is north
/// (decreasing row). Picks the shorter wrap direction, ties favor north.
fn signed_vertical(loc_row: u32, dest_row: u32, height: u32) -> i64 {
    let extent = i64::from(height);
    let north = (i64::from(loc_row) - i64::from(dest_row)).rem_euclid(extent);
    let south = (i64::from(dest_row) - i64::from(loc_row)).rem_euclid(extent);
    if north <= south { north } else { -south }
}

/// Signed horizontal wrap distance to the destination; positive is east
/// (increasing column). Picks the shorter wrap direction, ties favor east.
fn signed_horizontal(loc_col: u32, dest_col: u32, width: u32) -> i64 {
    let extent = i64::from(width);
    let east = (i64::from(dest_col) - i64::from(loc_col)).rem_euclid(extent);
    let west = (i64::from(loc_col) - i64::from(dest_col)).rem_euclid(extent);
    if east <= west { east } else { -west }
}

/// Compass octant of the destination in global coordinates
/// (0 = N, 1 = NE, ..., 7 = NW).
fn global_octant(vertical: i64, horizontal: i64) -> u8 {
    match (vertical.signum(), horizontal.signum()) {
        (1, 0) => 0,
        (1, 1) => 1,
        (0, 1) => 2,
        (-1, 1) => 3,
        (-1, 0) => 4,
        (-1, -1) => 5,
        (0, -1) => 6,
        (1, -1) => 7,
        // Distinct in-bounds cells always differ on at least one axis after
        // the wrap, so (0, 0) cannot reach here; arrival is handled upstream.
        _ => unreachable!("zero displacement on both axes"),
    }
}

fn traffic_suffix(light: LightColor, oncoming: bool) -> &'static str {
    match (light, oncoming) {
        (LightColor::Red, _) => "RED",
        (LightColor::Green, true) => "GREEN-OCC",
        (LightColor::Green, false) => "GREEN-CLEAR",
    }
}

impl StateEncoder for GeometricEncoder {
    fn encode(&self, observation: &Observation) -> Result<StateKey> {
        observation.validate()?;

        if observation.at_destination() {
            return Ok(StateKey::goal());
        }

        let vertical = signed_vertical(
            observation.location.row,
            observation.destination.row,
            observation.grid.height,
        );
        let horizontal = signed_horizontal(
            observation.location.col,
            observation.destination.col,
            observation.grid.width,
        );

        // Rotate the global octant into the agent's local frame.
        let global = global_octant(vertical, horizontal);
        let local = (global + 8 - observation.heading.octant()) % 8;

        let direction = DIRECTION_LABELS[usize::from(local)];
        let traffic = traffic_suffix(observation.light, observation.oncoming);
        Ok(StateKey::new(format!("{direction}-{traffic}")))
    }

    fn enumerate_keys(&self) -> Vec<StateKey> {
        let mut keys = vec![StateKey::goal()];
        for direction in DIRECTION_LABELS {
            for traffic in TRAFFIC_SUFFIXES {
                keys.push(StateKey::new(format!("{direction}-{traffic}")));
            }
        }
        keys
    }
}
