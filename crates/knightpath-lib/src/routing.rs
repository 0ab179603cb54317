//! Path planning façade.
//!
//! Turns coordinate text into a board, a start and a target, runs the path
//! finder, and hands back plain coordinates that outlive the board.
//!
//! # Example
//!
//! ```
//! use knightpath_lib::{plan_path, BoardConfig, PathRequest};
//!
//! let request = PathRequest::parse_line("a1 c2 b3")?;
//! let plan = plan_path(&BoardConfig::default(), &request)?;
//! assert_eq!(plan.move_count(), Some(1));
//! # Ok::<(), knightpath_lib::Error>(())
//! ```

use serde::Serialize;

use crate::board::BoardConfig;
use crate::coord::Coord;
use crate::error::{Error, Result};
use crate::path::find_shortest_path;

/// High-level path planning request in coordinate notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRequest {
    pub start: String,
    pub target: String,
    pub restricted: Vec<String>,
}

impl PathRequest {
    /// Convenience constructor for a request without restricted squares.
    pub fn new(start: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            target: target.into(),
            restricted: Vec::new(),
        }
    }

    /// Add restricted squares to the request.
    pub fn with_restricted<I, S>(mut self, squares: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.restricted.extend(squares.into_iter().map(Into::into));
        self
    }

    /// Build a request from `[start, target, restricted...]` tokens.
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tokens = tokens.into_iter().map(Into::into);
        let start = tokens
            .next()
            .ok_or(Error::MissingCoordinate { role: "start" })?;
        let target = tokens
            .next()
            .ok_or(Error::MissingCoordinate { role: "target" })?;
        Ok(Self {
            start,
            target,
            restricted: tokens.collect(),
        })
    }

    /// Split a whitespace-separated input line into a request.
    pub fn parse_line(line: &str) -> Result<Self> {
        Self::from_tokens(line.split_whitespace())
    }
}

/// Planned path returned by the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathPlan {
    pub start: Coord,
    pub target: Coord,
    /// Squares that were actually restricted after dropping unusable tokens.
    pub restricted: Vec<Coord>,
    /// Start to target inclusive; empty when the target is unreachable.
    pub steps: Vec<Coord>,
}

impl PathPlan {
    /// Whether a path to the target exists.
    pub fn found(&self) -> bool {
        !self.steps.is_empty()
    }

    /// Number of knight moves in the path, or `None` when unreachable.
    pub fn move_count(&self) -> Option<usize> {
        self.steps.len().checked_sub(1)
    }
}

/// Compute the shortest knight path described by `request`.
///
/// Start and target must decode and lie on the board; restricted tokens that
/// do not are ignored.
pub fn plan_path(config: &BoardConfig, request: &PathRequest) -> Result<PathPlan> {
    let mut board = config.build()?;
    board.set_restricted_squares(&request.restricted);

    let start = board.square_from_str(&request.start)?;
    let target = board.square_from_str(&request.target)?;

    let steps = find_shortest_path(&start, &target)
        .iter()
        .map(|square| square.coord())
        .collect();

    Ok(PathPlan {
        start: start.coord(),
        target: target.coord(),
        restricted: board.restricted_squares(),
        steps,
    })
}
