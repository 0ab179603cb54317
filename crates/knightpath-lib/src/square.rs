use std::fmt;
use std::hash::{Hash, Hasher};

use crate::board::Board;
use crate::coord::{encode, Coord};
use crate::error::Result;

/// Immutable position bound to the board it was validated against.
///
/// Equality and hashing only consider the coordinate. Path reconstruction
/// state lives in the path finder, never on the square.
#[derive(Debug, Clone, Copy)]
pub struct Square<'b> {
    coord: Coord,
    board: &'b Board,
}

impl<'b> Square<'b> {
    /// Bind `coord` to `board`, failing with
    /// [`Error::OutOfBoundsCoordinate`](crate::Error::OutOfBoundsCoordinate)
    /// when it lies outside the board.
    pub fn new(coord: Coord, board: &'b Board) -> Result<Self> {
        let coord = board.check_bounds(coord)?;
        Ok(Self { coord, board })
    }

    pub fn x(&self) -> i32 {
        self.coord.x
    }

    pub fn y(&self) -> i32 {
        self.coord.y
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn board(&self) -> &'b Board {
        self.board
    }

    /// File-letter/rank-digit notation for this square.
    pub fn notation(&self) -> String {
        encode(self.coord)
    }
}

impl PartialEq for Square<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Eq for Square<'_> {}

impl Hash for Square<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coord.hash(state);
    }
}

impl fmt::Display for Square<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation())
    }
}
