//! Knight path library entry points.
//!
//! This crate models a bounded board with restricted squares, generates
//! knight moves on it, and finds shortest knight paths with breadth-first
//! search. Higher-level consumers (the CLI) should only depend on the
//! functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod board;
pub mod coord;
pub mod error;
pub mod moves;
pub mod output;
pub mod path;
pub mod routing;
pub mod square;

pub use board::{Board, BoardConfig};
pub use coord::{decode, encode, Coord};
pub use error::{Error, Result};
pub use moves::{is_knight_offset, knight_moves, KNIGHT_OFFSETS};
pub use output::{PathEndpoint, PathRenderMode, PathStep, PathSummary};
pub use path::find_shortest_path;
pub use routing::{plan_path, PathPlan, PathRequest};
pub use square::Square;
