//! Core domain types: actions, headings, grid coordinates, and state keys.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of actions available to the agent in every state.
pub const ACTION_COUNT: usize = 4;

/// An action the agent can take on a single tick.
///
/// The index mapping {Wait: 0, Left: 1, Forward: 2, Right: 3} is an
/// implementation convention used for Q-table columns; it carries no
/// semantic meaning but must stay consistent between table indices and
/// action decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Stay in place for this tick.
    Wait,
    /// Turn left and advance.
    Left,
    /// Advance in the current heading.
    Forward,
    /// Turn right and advance.
    Right,
}

impl Action {
    /// All actions in index order.
    pub const ALL: [Action; ACTION_COUNT] =
        [Action::Wait, Action::Left, Action::Forward, Action::Right];

    /// Fixed Q-table column index for this action.
    pub fn index(self) -> usize {
        match self {
            Action::Wait => 0,
            Action::Left => 1,
            Action::Forward => 2,
            Action::Right => 3,
        }
    }

    /// Decode a Q-table column index back into an action.
    pub fn from_index(index: usize) -> Option<Action> {
        Action::ALL.get(index).copied()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Wait => "wait",
            Action::Left => "left",
            Action::Forward => "forward",
            Action::Right => "right",
        };
        write!(f, "{name}")
    }
}

/// One of the four cardinal headings the agent can face.
///
/// North is decreasing row, east is increasing column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Heading {
    North,
    South,
    East,
    West,
}

impl Heading {
    /// Unit step (d_row, d_col) for one move in this heading.
    pub fn unit_vector(self) -> (i32, i32) {
        match self {
            Heading::North => (-1, 0),
            Heading::South => (1, 0),
            Heading::East => (0, 1),
            Heading::West => (0, -1),
        }
    }

    /// Compass octant this heading points at (N = 0, E = 2, S = 4, W = 6).
    pub(crate) fn octant(self) -> u8 {
        match self {
            Heading::North => 0,
            Heading::East => 2,
            Heading::South => 4,
            Heading::West => 6,
        }
    }
}

/// Color of the traffic light at the agent's current intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightColor {
    Red,
    Green,
}

/// Suggested next move from the external route planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Waypoint {
    Forward,
    Left,
    Right,
}

impl Waypoint {
    /// All waypoint directions, used when enumerating the key space.
    pub const ALL: [Waypoint; 3] = [Waypoint::Forward, Waypoint::Left, Waypoint::Right];

    pub(crate) fn label(self) -> &'static str {
        match self {
            Waypoint::Forward => "Fo",
            Waypoint::Left => "Le",
            Waypoint::Right => "Ri",
        }
    }
}

/// A cell on the grid, addressed as (row, col).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: u32,
    pub col: u32,
}

impl Position {
    /// Create a new position.
    pub fn new(row: u32, col: u32) -> Self {
        Position { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Extent of the toroidal grid (width = columns, height = rows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    pub width: u32,
    pub height: u32,
}

impl GridSize {
    /// Create a new grid extent.
    pub fn new(width: u32, height: u32) -> Self {
        GridSize { width, height }
    }

    /// Whether the position lies inside the grid bounds.
    pub fn contains(&self, position: Position) -> bool {
        position.col < self.width && position.row < self.height
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A discrete state key produced by a state encoder.
///
/// Keys are opaque to the learning machinery but carry a human-readable
/// label (e.g. `Fo-GREEN-CLEAR` or `GOAL`) for inspection and debugging.
/// Only encoders construct keys, so a `StateKey` in circulation is always
/// a member of its encoder's enumerated key space.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateKey(String);

impl StateKey {
    /// Label of the single terminal "arrived at destination" state.
    pub const GOAL_LABEL: &'static str = "GOAL";

    pub(crate) fn new(label: impl Into<String>) -> Self {
        StateKey(label.into())
    }

    /// The terminal state key.
    pub fn goal() -> Self {
        StateKey::new(Self::GOAL_LABEL)
    }

    /// Whether this is the terminal state key.
    pub fn is_goal(&self) -> bool {
        self.0 == Self::GOAL_LABEL
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for StateKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
