use std::collections::{HashMap, VecDeque};

use tracing::debug;

use crate::coord::Coord;
use crate::moves::knight_moves;
use crate::square::Square;

/// Find the shortest knight path from `start` to `target` with breadth-first
/// search.
///
/// The returned squares run from `start` to `target` inclusive. An empty
/// vector means the target cannot be reached. Only generated moves are
/// filtered against the restricted set, so a restricted `start` still begins
/// the search while a restricted `target` is unreachable unless it equals
/// `start`.
///
/// Among several shortest paths the one discovered first wins: neighbours are
/// expanded in [`KNIGHT_OFFSETS`](crate::moves::KNIGHT_OFFSETS) order and the
/// frontier is consumed first-in first-out.
pub fn find_shortest_path<'b>(start: &Square<'b>, target: &Square<'b>) -> Vec<Square<'b>> {
    // Each square is recorded once, at first discovery, with the square it
    // was reached from.
    let mut parents: HashMap<Coord, Option<Square<'b>>> = HashMap::new();
    let mut queue = VecDeque::new();

    parents.insert(start.coord(), None);
    queue.push_back(*start);

    debug!(start = %start, target = %target, "starting knight path search");

    let mut expanded = 0usize;
    while let Some(current) = queue.pop_front() {
        if current == *target {
            let path = reconstruct_path(&parents, current);
            debug!(expanded, moves = path.len() - 1, "knight path found");
            return path;
        }

        expanded += 1;
        for next in knight_moves(&current) {
            if parents.contains_key(&next.coord()) {
                continue;
            }
            parents.insert(next.coord(), Some(current));
            queue.push_back(next);
        }
    }

    debug!(expanded, "search space exhausted without reaching target");
    Vec::new()
}

fn reconstruct_path<'b>(
    parents: &HashMap<Coord, Option<Square<'b>>>,
    goal: Square<'b>,
) -> Vec<Square<'b>> {
    let mut path = vec![goal];
    let mut current = parents.get(&goal.coord()).copied().flatten();
    while let Some(square) = current {
        path.push(square);
        current = parents.get(&square.coord()).copied().flatten();
    }
    path.reverse();
    path
}
