use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::coord::{decode, Coord, FILE_LETTERS, MAX_RANK_DIGIT};
use crate::error::{Error, Result};
use crate::square::Square;

/// Bounded lattice plus the set of squares a knight may not land on.
///
/// Ranges are inclusive on both ends and fixed at construction. Squares borrow
/// the board they were created from; the board never owns them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    files: (i32, i32),
    ranks: (i32, i32),
    restricted: HashSet<Coord>,
}

impl Board {
    /// Create a board spanning `files.0..=files.1` by `ranks.0..=ranks.1`
    /// with no restricted squares.
    pub fn new(files: (i32, i32), ranks: (i32, i32)) -> Self {
        Self {
            files,
            ranks,
            restricted: HashSet::new(),
        }
    }

    /// Inclusive file (x) range.
    pub fn files(&self) -> (i32, i32) {
        self.files
    }

    /// Inclusive rank (y) range.
    pub fn ranks(&self) -> (i32, i32) {
        self.ranks
    }

    /// Replace the restricted set with the decoded `coordinates`.
    ///
    /// Tokens that fail to decode or fall outside the board are dropped. The
    /// returned value is the number of squares actually restricted.
    pub fn set_restricted_squares<I, S>(&mut self, coordinates: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut restricted = HashSet::new();
        for text in coordinates {
            let text = text.as_ref();
            match decode(text).and_then(|coord| self.check_bounds(coord)) {
                Ok(coord) => {
                    restricted.insert(coord);
                }
                Err(err) => warn!(token = text, error = %err, "ignoring restricted square"),
            }
        }
        self.restricted = restricted;
        self.restricted.len()
    }

    /// Whether `coord` lies within both inclusive ranges.
    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        (self.files.0..=self.files.1).contains(&coord.x)
            && (self.ranks.0..=self.ranks.1).contains(&coord.y)
    }

    /// Whether `coord` is a member of the restricted set.
    pub fn is_restricted(&self, coord: Coord) -> bool {
        self.restricted.contains(&coord)
    }

    /// Restricted squares in ascending `(x, y)` order.
    pub fn restricted_squares(&self) -> Vec<Coord> {
        let mut squares: Vec<Coord> = self.restricted.iter().copied().collect();
        squares.sort();
        squares
    }

    /// Bind `coord` to this board, failing if it is out of bounds.
    pub fn square(&self, coord: Coord) -> Result<Square<'_>> {
        Square::new(coord, self)
    }

    /// Decode `text` and bind the result to this board.
    pub fn square_from_str(&self, text: &str) -> Result<Square<'_>> {
        self.square(decode(text)?)
    }

    pub(crate) fn check_bounds(&self, coord: Coord) -> Result<Coord> {
        if self.is_in_bounds(coord) {
            Ok(coord)
        } else {
            Err(Error::OutOfBoundsCoordinate {
                x: coord.x,
                y: coord.y,
                files: self.files,
                ranks: self.ranks,
            })
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        BoardConfig::default().into_board()
    }
}

/// Board dimensions used to build a [`Board`].
///
/// The default spans `0..=8` on both axes, a 9×9 lattice with files `a..=i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub files: (i32, i32),
    pub ranks: (i32, i32),
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            files: (0, 8),
            ranks: (0, 8),
        }
    }
}

impl BoardConfig {
    /// Override the upper file and rank bounds, keeping the lower bounds.
    pub fn with_upper_bounds(mut self, max_file: Option<i32>, max_rank: Option<i32>) -> Self {
        if let Some(max_file) = max_file {
            self.files.1 = max_file;
        }
        if let Some(max_rank) = max_rank {
            self.ranks.1 = max_rank;
        }
        self
    }

    /// Reject empty ranges and ranges the coordinate notation cannot express.
    pub fn validate(&self) -> Result<()> {
        check_axis("file", self.files, FILE_LETTERS - 1)?;
        check_axis("rank", self.ranks, MAX_RANK_DIGIT)
    }

    /// Validate and build an empty board.
    pub fn build(&self) -> Result<Board> {
        self.validate()?;
        Ok(self.into_board())
    }

    fn into_board(self) -> Board {
        Board::new(self.files, self.ranks)
    }
}

fn check_axis(axis: &str, (min, max): (i32, i32), limit: i32) -> Result<()> {
    if min > max {
        return Err(Error::InvalidBoard {
            message: format!("{axis} range {min}..={max} is empty"),
        });
    }
    if min < 0 || max > limit {
        return Err(Error::InvalidBoard {
            message: format!("{axis} range {min}..={max} exceeds notation limits 0..={limit}"),
        });
    }
    Ok(())
}
