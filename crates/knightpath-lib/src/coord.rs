//! Coordinate codec.
//!
//! Squares are written as a file letter followed by a single rank digit, for
//! example `a1` or `H8`. The letter maps to `x` through its zero-based
//! position in the alphabet and the digit maps directly to `y`. The codec only
//! deals with notation; whether a coordinate lies on a particular board is the
//! board's concern.

use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of file letters the notation can express (`a` through `z`).
pub const FILE_LETTERS: i32 = 26;

/// Highest rank expressible with a single decimal digit.
pub const MAX_RANK_DIGIT: i32 = 9;

/// Integer lattice position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise addition, `None` if either axis overflows.
    #[inline]
    pub fn checked_add(self, rhs: Coord) -> Option<Coord> {
        Some(Coord::new(
            self.x.checked_add(rhs.x)?,
            self.y.checked_add(rhs.y)?,
        ))
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Self::Output {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(*self))
    }
}

impl FromStr for Coord {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        decode(s)
    }
}

/// Decode notation such as `c5` into a coordinate.
///
/// The file letter is case-insensitive. The text must be exactly two
/// characters long.
pub fn decode(text: &str) -> Result<Coord> {
    let mut chars = text.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(Error::malformed(text, "expected exactly two characters"));
    };

    let x = file_index(file)
        .ok_or_else(|| Error::malformed(text, format!("'{file}' is not a file letter")))?;
    let y = rank
        .to_digit(10)
        .ok_or_else(|| Error::malformed(text, format!("'{rank}' is not a rank digit")))?;

    Ok(Coord::new(x, y as i32))
}

/// Encode a coordinate as notation, e.g. `(7, 8)` becomes `h8`.
///
/// Bounds are not checked. Files outside `a..=z` are written as `?` and ranks
/// are written in full decimal, so only coordinates inside the alphabet and
/// the single-digit range survive a round trip through [`decode`].
pub fn encode(coord: Coord) -> String {
    format!("{}{}", file_letter(coord.x), coord.y)
}

fn file_index(letter: char) -> Option<i32> {
    if letter.is_ascii_alphabetic() {
        Some(i32::from(letter.to_ascii_lowercase() as u8 - b'a'))
    } else {
        None
    }
}

fn file_letter(x: i32) -> char {
    if (0..FILE_LETTERS).contains(&x) {
        char::from(b'a' + x as u8)
    } else {
        '?'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_lower_and_upper_case_files() {
        assert_eq!(decode("a1").unwrap(), Coord::new(0, 1));
        assert_eq!(decode("H8").unwrap(), Coord::new(7, 8));
        assert_eq!(decode("z0").unwrap(), Coord::new(25, 0));
    }

    #[test]
    fn rejects_wrong_length() {
        for text in ["", "a", "a10", "abc"] {
            let err = decode(text).expect_err("length must be two");
            assert!(matches!(err, Error::MalformedCoordinate { .. }), "{text}");
        }
    }

    #[test]
    fn rejects_non_digit_rank_and_non_letter_file() {
        assert!(matches!(
            decode("aa"),
            Err(Error::MalformedCoordinate { .. })
        ));
        assert!(matches!(
            decode("11"),
            Err(Error::MalformedCoordinate { .. })
        ));
        assert!(matches!(
            decode("é1"),
            Err(Error::MalformedCoordinate { .. })
        ));
    }

    #[test]
    fn encode_does_not_validate() {
        assert_eq!(encode(Coord::new(3, 4)), "d4");
        assert_eq!(encode(Coord::new(0, 12)), "a12");
        assert_eq!(encode(Coord::new(-1, 0)), "?0");
    }

    #[test]
    fn display_and_from_str_use_notation() {
        let coord: Coord = "e2".parse().unwrap();
        assert_eq!(coord, Coord::new(4, 2));
        assert_eq!(coord.to_string(), "e2");
    }
}
