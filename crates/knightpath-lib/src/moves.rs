//! Knight move generation.

use crate::coord::Coord;
use crate::square::Square;

/// Knight displacements in enumeration order.
///
/// When several shortest paths exist, this order together with FIFO queue
/// order decides which one the path finder returns.
pub const KNIGHT_OFFSETS: [Coord; 8] = [
    Coord::new(2, 1),
    Coord::new(2, -1),
    Coord::new(-2, 1),
    Coord::new(-2, -1),
    Coord::new(1, 2),
    Coord::new(-1, 2),
    Coord::new(1, -2),
    Coord::new(-1, -2),
];

/// Squares reachable from `square` in one knight move.
///
/// Candidates off the board, beyond the `i32` range, or on a restricted
/// square are skipped; the rest are returned in [`KNIGHT_OFFSETS`] order,
/// bound to the same board.
pub fn knight_moves<'b>(square: &Square<'b>) -> Vec<Square<'b>> {
    let board = square.board();
    KNIGHT_OFFSETS
        .iter()
        .filter_map(|&offset| square.coord().checked_add(offset))
        .filter(|&candidate| !board.is_restricted(candidate))
        .filter_map(|candidate| Square::new(candidate, board).ok())
        .collect()
}

/// Whether `from` and `to` are exactly one knight move apart.
pub fn is_knight_offset(from: Coord, to: Coord) -> bool {
    let dx = (to.x - from.x).abs();
    let dy = (to.y - from.y).abs();
    (dx == 1 && dy == 2) || (dx == 2 && dy == 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    fn notations(squares: &[Square<'_>]) -> Vec<String> {
        squares.iter().map(Square::notation).collect()
    }

    #[test]
    fn centre_square_has_eight_moves_in_offset_order() {
        let board = Board::default();
        let d4 = board.square_from_str("d4").unwrap();
        assert_eq!(
            notations(&knight_moves(&d4)),
            ["f5", "f3", "b5", "b3", "e6", "c6", "e2", "c2"]
        );
    }

    #[test]
    fn corner_square_is_clipped_to_board() {
        let board = Board::default();
        let a0 = board.square_from_str("a0").unwrap();
        assert_eq!(notations(&knight_moves(&a0)), ["c1", "b2"]);
    }

    #[test]
    fn restricted_squares_are_never_generated() {
        let mut board = Board::default();
        board.set_restricted_squares(["f5", "c2"]);
        let d4 = board.square_from_str("d4").unwrap();
        let moves = knight_moves(&d4);
        assert_eq!(moves.len(), 6);
        assert!(moves.iter().all(|sq| !board.is_restricted(sq.coord())));
    }

    #[test]
    fn squares_at_integer_limits_skip_overflowing_offsets() {
        let board = Board::new((i32::MAX - 2, i32::MAX), (0, 8));
        let edge = board.square(Coord::new(i32::MAX, 0)).unwrap();
        let moves: Vec<Coord> = knight_moves(&edge).iter().map(Square::coord).collect();
        assert_eq!(
            moves,
            [Coord::new(i32::MAX - 2, 1), Coord::new(i32::MAX - 1, 2)]
        );

        let low = Board::new((0, 8), (i32::MIN, i32::MIN + 2));
        let corner = low.square(Coord::new(0, i32::MIN)).unwrap();
        assert_eq!(knight_moves(&corner).len(), 2);
    }

    #[test]
    fn knight_offset_predicate() {
        assert!(is_knight_offset(Coord::new(0, 0), Coord::new(1, 2)));
        assert!(is_knight_offset(Coord::new(3, 3), Coord::new(1, 2)));
        assert!(!is_knight_offset(Coord::new(0, 0), Coord::new(2, 2)));
        assert!(!is_knight_offset(Coord::new(0, 0), Coord::new(0, 0)));
    }
}
