//! Key-space coverage: every enumerated key is reachable from some valid
//! observation, and nothing outside the enumeration is ever produced.

use std::collections::HashSet;

use gridcab::{
    GeometricEncoder, GridSize, Heading, LightColor, Observation, Position, StateEncoder, Waypoint,
    WaypointEncoder,
};

const HEADINGS: [Heading; 4] = [Heading::North, Heading::South, Heading::East, Heading::West];
const LIGHTS: [LightColor; 2] = [LightColor::Red, LightColor::Green];

#[test]
fn geometric_key_space_is_exactly_reachable() {
    let encoder = GeometricEncoder;
    let enumerated: HashSet<String> = encoder
        .enumerate_keys()
        .into_iter()
        .map(|key| key.into_string())
        .collect();
    assert_eq!(enumerated.len(), 25);

    let grid = GridSize::new(5, 5);
    let mut reached = HashSet::new();
    for loc_row in 0..5 {
        for loc_col in 0..5 {
            for dest_row in 0..5 {
                for dest_col in 0..5 {
                    for heading in HEADINGS {
                        for light in LIGHTS {
                            for oncoming in [false, true] {
                                let observation = Observation::new(
                                    Position::new(loc_row, loc_col),
                                    Position::new(dest_row, dest_col),
                                    grid,
                                    heading,
                                    light,
                                )
                                .with_oncoming(oncoming);
                                let key = encoder.encode(&observation).unwrap();
                                reached.insert(key.into_string());
                            }
                        }
                    }
                }
            }
        }
    }

    assert_eq!(reached, enumerated);
}

#[test]
fn waypoint_key_space_is_exactly_reachable() {
    let encoder = WaypointEncoder;
    let enumerated: HashSet<String> = encoder
        .enumerate_keys()
        .into_iter()
        .map(|key| key.into_string())
        .collect();
    assert_eq!(enumerated.len(), 49);

    let grid = GridSize::new(5, 5);
    let mut reached = HashSet::new();

    // Arrival yields the terminal key.
    let arrived = Observation::new(
        Position::new(2, 2),
        Position::new(2, 2),
        grid,
        Heading::North,
        LightColor::Green,
    );
    reached.insert(encoder.encode(&arrived).unwrap().into_string());

    for waypoint in Waypoint::ALL {
        for light in LIGHTS {
            for oncoming in [false, true] {
                for left in [false, true] {
                    for right in [false, true] {
                        let observation = Observation::new(
                            Position::new(0, 0),
                            Position::new(2, 2),
                            grid,
                            Heading::North,
                            light,
                        )
                        .with_waypoint(waypoint)
                        .with_oncoming(oncoming)
                        .with_lanes(left, right);
                        let key = encoder.encode(&observation).unwrap();
                        reached.insert(key.into_string());
                    }
                }
            }
        }
    }

    assert_eq!(reached, enumerated);
}

#[test]
fn encoders_are_stateless_and_deterministic() {
    let grid = GridSize::new(8, 6);
    let observation = Observation::new(
        Position::new(5, 1),
        Position::new(0, 7),
        grid,
        Heading::West,
        LightColor::Red,
    )
    .with_waypoint(Waypoint::Right)
    .with_oncoming(true)
    .with_lanes(true, false);

    let geometric = GeometricEncoder.encode(&observation).unwrap();
    let waypoint = WaypointEncoder.encode(&observation).unwrap();
    for _ in 0..20 {
        assert_eq!(GeometricEncoder.encode(&observation).unwrap(), geometric);
        assert_eq!(WaypointEncoder.encode(&observation).unwrap(), waypoint);
    }
}
