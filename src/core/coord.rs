//! Cell coordinates and cardinal directions.
//!
//! `Coord` is the identity key for every position-based lookup: walls,
//! targets, discs, and the magnet are all keyed by it. Coordinates are
//! 0-indexed with the origin at the top-left; `y` grows downward.
//!
//! Components are signed so that stepping off the top or left edge of the
//! board produces an ordinary out-of-bounds coordinate instead of an
//! underflow. Bounds checks live in `PuzzleState::in_bounds`.

use serde::{Deserialize, Serialize};

/// A cell coordinate on the board.
///
/// Two coordinates are equal iff both components are equal; `Coord` is the
/// hash key for all occupancy sets.
///
/// ```
/// use magnet_maze::core::{Coord, Direction};
///
/// let c = Coord::new(3, 1);
/// assert_eq!(c.step(Direction::Up), Coord::new(3, 0));
/// assert_eq!(c.step(Direction::Up).step(Direction::Up), Coord::new(3, -1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighboring cell one step in `dir`.
    #[must_use]
    pub const fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four cardinal directions a push ray extends in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in the order rays are resolved.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The unit offset for this direction.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        })
    }
}
