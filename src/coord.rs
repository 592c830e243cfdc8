//! Grid coordinates.
//!
//! On the wire a `Coord` is a positional `[x, y]` array, unlike every other
//! nested object in the protocol, which is field-keyed.

use core::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::action::Direction;

/// A position in the world. The engine decides which positions are valid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(i64, i64)", into = "(i64, i64)")]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl Coord {
    pub const fn new(x: i64, y: i64) -> Self {
        Coord { x, y }
    }

    /// The neighbour one step in `dir`, or `None` if it falls outside the
    /// `i64` range.
    pub fn checked_step(self, dir: Direction) -> Option<Coord> {
        let offset = Coord::from(dir);
        Some(Coord::new(
            self.x.checked_add(offset.x)?,
            self.y.checked_add(offset.y)?,
        ))
    }
}

impl From<(i64, i64)> for Coord {
    fn from((x, y): (i64, i64)) -> Self {
        Coord::new(x, y)
    }
}

impl From<Coord> for (i64, i64) {
    fn from(coord: Coord) -> Self {
        (coord.x, coord.y)
    }
}

/// The unit offset one step in `dir`.
impl From<Direction> for Coord {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Left => Coord::new(-1, 0),
            Direction::Right => Coord::new(1, 0),
            Direction::Up => Coord::new(0, -1),
            Direction::Down => Coord::new(0, 1),
        }
    }
}

/// Steps one tile in a direction. Overflows like plain `i64` addition; use
/// [`Coord::checked_step`] when the coordinate may sit at the edge of the range.
impl Add<Direction> for Coord {
    type Output = Coord;

    fn add(self, rhs: Direction) -> Coord {
        let offset = Coord::from(rhs);
        Coord::new(self.x + offset.x, self.y + offset.y)
    }
}

impl AddAssign<Direction> for Coord {
    fn add_assign(&mut self, rhs: Direction) {
        *self = *self + rhs;
    }
}

impl core::fmt::Display for Coord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
