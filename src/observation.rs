//! Per-tick observation bundle delivered by the simulation collaborator.

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    types::{GridSize, Heading, LightColor, Position, Waypoint},
};

/// Everything the decision core is allowed to see on one tick.
///
/// The simulation owns all world state; this bundle is a read-only snapshot
/// handed over once per tick. The lane-occupancy flags and the suggested
/// waypoint are only consulted by the waypoint encoding variant.
///
/// # Examples
///
/// ```
/// use gridcab::{GridSize, Heading, LightColor, Observation, Position};
///
/// let observation = Observation::new(
///     Position::new(3, 2),
///     Position::new(2, 2),
///     GridSize::new(5, 5),
///     Heading::North,
///     LightColor::Green,
/// );
/// assert!(observation.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// Current cell of the agent.
    pub location: Position,
    /// Destination cell of the current trial.
    pub destination: Position,
    /// Extent of the toroidal grid both positions live on.
    pub grid: GridSize,
    /// Current heading of the agent.
    pub heading: Heading,
    /// Traffic-light color at the agent's intersection.
    pub light: LightColor,
    /// Whether an oncoming vehicle is present.
    pub oncoming: bool,
    /// Whether the left sensed lane is occupied.
    pub left_occupied: bool,
    /// Whether the right sensed lane is occupied.
    pub right_occupied: bool,
    /// Planner's suggested next move; `None` once the agent has arrived.
    pub waypoint: Option<Waypoint>,
}

impl Observation {
    /// Create an observation with clear lanes, no oncoming traffic, and no
    /// waypoint. Use the `with_*` builders to fill in the rest.
    pub fn new(
        location: Position,
        destination: Position,
        grid: GridSize,
        heading: Heading,
        light: LightColor,
    ) -> Self {
        Observation {
            location,
            destination,
            grid,
            heading,
            light,
            oncoming: false,
            left_occupied: false,
            right_occupied: false,
            waypoint: None,
        }
    }

    /// Set the oncoming-vehicle flag.
    pub fn with_oncoming(mut self, oncoming: bool) -> Self {
        self.oncoming = oncoming;
        self
    }

    /// Set the left/right lane occupancy flags.
    pub fn with_lanes(mut self, left_occupied: bool, right_occupied: bool) -> Self {
        self.left_occupied = left_occupied;
        self.right_occupied = right_occupied;
        self
    }

    /// Set the planner's suggested waypoint.
    pub fn with_waypoint(mut self, waypoint: Waypoint) -> Self {
        self.waypoint = Some(waypoint);
        self
    }

    /// Whether the agent is literally on its destination cell.
    ///
    /// This is the authoritative terminal condition for both encoders.
    pub fn at_destination(&self) -> bool {
        self.location == self.destination
    }

    /// Check that both positions lie inside the grid.
    ///
    /// A malformed observation must fail loudly here rather than be
    /// silently bucketed, since a bogus state key would corrupt the
    /// Q-table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PositionOutOfBounds`] naming the offending position.
    pub fn validate(&self) -> Result<()> {
        for position in [self.location, self.destination] {
            if !self.grid.contains(position) {
                return Err(Error::PositionOutOfBounds {
                    position,
                    grid: self.grid,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Observation {
        Observation::new(
            Position::new(1, 1),
            Position::new(3, 3),
            GridSize::new(5, 5),
            Heading::North,
            LightColor::Green,
        )
    }

    #[test]
    fn test_validate_accepts_in_bounds() {
        assert!(base().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_location_out_of_bounds() {
        let mut observation = base();
        observation.location = Position::new(5, 0);
        assert!(matches!(
            observation.validate(),
            Err(Error::PositionOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_destination_out_of_bounds() {
        let mut observation = base();
        observation.destination = Position::new(0, 9);
        assert!(matches!(
            observation.validate(),
            Err(Error::PositionOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_at_destination() {
        let mut observation = base();
        assert!(!observation.at_destination());
        observation.location = observation.destination;
        assert!(observation.at_destination());
    }
}
