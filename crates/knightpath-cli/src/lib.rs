//! Knight path CLI library.
//!
//! Output rendering and logging setup shared by the `knightpath` binary and
//! its tests.

pub mod logging;
pub mod output;
