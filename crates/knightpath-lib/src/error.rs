use thiserror::Error;

/// Convenient result alias for the knight path library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// An unreachable target is not represented here: the path finder reports it
/// as an empty path so callers can tell it apart from bad input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Raised when coordinate text cannot be decoded into a square.
    #[error("malformed coordinate '{text}': {reason}")]
    MalformedCoordinate { text: String, reason: String },

    /// Raised when a square is constructed outside of the board's bounds.
    #[error(
        "coordinate ({x}, {y}) is out of bounds for board files {}..={} and ranks {}..={}",
        .files.0, .files.1, .ranks.0, .ranks.1
    )]
    OutOfBoundsCoordinate {
        x: i32,
        y: i32,
        files: (i32, i32),
        ranks: (i32, i32),
    },

    /// Raised when a request lacks the start or target coordinate.
    #[error("missing {role} coordinate")]
    MissingCoordinate { role: &'static str },

    /// Raised when a board configuration cannot be used.
    #[error("invalid board configuration: {message}")]
    InvalidBoard { message: String },
}

impl Error {
    pub(crate) fn malformed(text: &str, reason: impl Into<String>) -> Self {
        Error::MalformedCoordinate {
            text: text.to_string(),
            reason: reason.into(),
        }
    }
}
