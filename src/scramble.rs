//! Random scrambles built from legal moves.
//!
//! Scrambling by shuffling cell values can produce permutations no move
//! sequence reaches; walking the solved board through random legal moves
//! keeps every output reachable by construction.

use rand::Rng;

use crate::board::{Board, Move};

/// Applies `steps` uniformly random legal moves to the solved board,
/// never immediately undoing the previous move. Returns the scrambled
/// board together with the moves that produced it.
pub fn walk<R: Rng>(side: usize, steps: usize, rng: &mut R) -> (Board, Vec<Move>) {
    let mut board = Board::solved(side);
    let mut moves = Vec::with_capacity(steps);
    let mut last: Option<Move> = None;

    for _ in 0..steps {
        let mut options: Vec<(Move, Board)> = board
            .successors()
            .into_iter()
            .filter(|(mv, _)| last.map_or(true, |prev| *mv != prev.opposite()))
            .collect();
        let pick = rng.gen_range(0..options.len());
        let (mv, next) = options.swap_remove(pick);

        moves.push(mv);
        last = Some(mv);
        board = next;
    }

    (board, moves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristic;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn zero_steps_leaves_the_board_solved() {
        let mut rng = StdRng::seed_from_u64(0);
        let (board, moves) = walk(4, 0, &mut rng);
        assert_eq!(board, Board::solved(4));
        assert!(moves.is_empty());
    }

    #[test]
    fn walks_are_replayable_and_reachable() {
        for side in [3usize, 4, 5] {
            let mut rng = StdRng::seed_from_u64(side as u64);
            let (board, moves) = walk(side, 100, &mut rng);

            assert_eq!(Board::solved(side).replay(&moves).unwrap(), board);
            assert!(board.solvable_to(side * side - 1));
        }
    }

    #[test]
    fn a_move_is_never_followed_by_its_opposite() {
        let mut rng = StdRng::seed_from_u64(9);
        let (_, moves) = walk(4, 500, &mut rng);
        for pair in moves.windows(2) {
            assert_ne!(pair[1], pair[0].opposite());
        }
    }

    #[test]
    fn heuristic_never_exceeds_the_walk_length() {
        let mut rng = StdRng::seed_from_u64(3);
        for steps in [1usize, 5, 20, 60] {
            let (board, _) = walk(4, steps, &mut rng);
            assert!(heuristic::manhattan(&board) as usize <= steps);
        }
    }
}
