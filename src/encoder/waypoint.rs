//! Planner-waypoint state encoding.

use crate::{
    encoder::{OCCUPANCY_LABELS, StateEncoder, occupancy_label},
    error::{Error, Result},
    observation::Observation,
    types::{LightColor, StateKey, Waypoint},
};

/// Waypoint state encoding (49 keys).
///
/// Combines the planner's suggested move with the light color and the full
/// occupancy pattern over the {oncoming, left, right} sensed lanes, e.g.
/// `Le-GREEN-OL`. Arrival at the destination cell maps to the terminal
/// `GOAL` key; an observation without a waypoint anywhere else is rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct WaypointEncoder;

fn light_label(light: LightColor) -> &'static str {
    match light {
        LightColor::Red => "RED",
        LightColor::Green => "GREEN",
    }
}

impl StateEncoder for WaypointEncoder {
    fn encode(&self, observation: &Observation) -> Result<StateKey> {
        observation.validate()?;

        if observation.at_destination() {
            return Ok(StateKey::goal());
        }

        let waypoint = observation.waypoint.ok_or(Error::MissingWaypoint)?;
        let occupancy = occupancy_label(
            observation.oncoming,
            observation.left_occupied,
            observation.right_occupied,
        );
        Ok(StateKey::new(format!(
            "{}-{}-{occupancy}",
            waypoint.label(),
            light_label(observation.light),
        )))
    }

    fn enumerate_keys(&self) -> Vec<StateKey> {
        let mut keys = vec![StateKey::goal()];
        for waypoint in Waypoint::ALL {
            for light in ["RED", "GREEN"] {
                for occupancy in OCCUPANCY_LABELS {
                    keys.push(StateKey::new(format!(
                        "{}-{light}-{occupancy}",
                        waypoint.label()
                    )));
                }
            }
        }
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GridSize, Heading, Position};

    fn observe(waypoint: Option<Waypoint>, light: LightColor) -> Observation {
        let mut observation = Observation::new(
            Position::new(0, 0),
            Position::new(2, 2),
            GridSize::new(5, 5),
            Heading::North,
            light,
        );
        observation.waypoint = waypoint;
        observation
    }

    #[test]
    fn test_basic_key() {
        let observation = observe(Some(Waypoint::Forward), LightColor::Green);
        let key = WaypointEncoder.encode(&observation).unwrap();
        assert_eq!(key.as_str(), "Fo-GREEN-CLEAR");
    }

    #[test]
    fn test_occupancy_pattern() {
        let observation = observe(Some(Waypoint::Left), LightColor::Red)
            .with_oncoming(true)
            .with_lanes(false, true);
        let key = WaypointEncoder.encode(&observation).unwrap();
        assert_eq!(key.as_str(), "Le-RED-OR");
    }

    #[test]
    fn test_arrival_without_waypoint_is_goal() {
        let mut observation = observe(None, LightColor::Green);
        observation.location = observation.destination;
        assert!(WaypointEncoder.encode(&observation).unwrap().is_goal());
    }

    #[test]
    fn test_missing_waypoint_away_from_destination_errors() {
        let observation = observe(None, LightColor::Green);
        assert!(matches!(
            WaypointEncoder.encode(&observation),
            Err(Error::MissingWaypoint)
        ));
    }

    #[test]
    fn test_key_space_cardinality() {
        let keys = WaypointEncoder.enumerate_keys();
        assert_eq!(keys.len(), 49);
        let unique: std::collections::HashSet<_> = keys.iter().collect();
        assert_eq!(unique.len(), 49);
    }
}
