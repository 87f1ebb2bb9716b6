//! Layered decomposition orchestrator.
//!
//! Boards up to 3x3 go straight to optimal A*. Anything larger is solved
//! ring by ring: weighted IDA* pins the outermost unsolved row and column
//! against a partial goal, the terminal of each phase seeds the next, and
//! the residual 3x3 core is finished with exact A*. The concatenated move
//! sequence is valid but not globally optimal.

use thiserror::Error;
use tracing::debug;

use crate::board::{Board, BoardError, Move};
use crate::goal::{self, MatchMode};
use crate::search::{self, Arena, Scoring, SearchError};

#[derive(Debug, Error)]
pub enum SolveError {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error("configuration cannot reach the requested goal arrangement")]
    Unsolvable,
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Solves `board`, leaving the empty cell at the bottom-right corner.
/// Returns the moves of the empty cell in execution order; an empty
/// sequence means the board was already solved.
pub fn solve(board: &Board) -> Result<Vec<Move>, SolveError> {
    solve_to(board, board.cells().len() - 1)
}

/// Solves `board`, leaving the empty cell at `goal_empty`.
///
/// Because tile ids pin every tile's home to its own index, the bottom-right
/// cell is the only `goal_empty` with a consistent goal arrangement; any
/// other target evicts the tile living there and is rejected as
/// [`SolveError::Unsolvable`].
pub fn solve_to(board: &Board, goal_empty: usize) -> Result<Vec<Move>, SolveError> {
    if !board.solvable_to(goal_empty) {
        return Err(SolveError::Unsolvable);
    }

    let side = board.side();
    let mut moves: Vec<Move> = Vec::new();
    let mut current = board.clone();

    // Each phase pins one more outer ring; the terminal board carries its
    // full cell contents forward as the next root.
    for ring in (4..=side).rev() {
        let goal = goal::ring_goal(side, ring, goal_empty);
        let (arena, terminal) =
            search::idastar(current.clone(), &goal, MatchMode::Partial, Scoring::Weighted)?;
        let phase = arena.path_moves(terminal);
        debug!(ring, phase_moves = phase.len(), "ring phase complete");
        current = arena.node(terminal).board.clone();
        moves.extend(phase);
    }

    let goal = goal::exact_goal(side, goal_empty);
    let mut arena = Arena::new();
    let root = arena.root(current);
    let terminal = search::astar(&mut arena, root, &goal, MatchMode::Exact, Scoring::Optimal)?;
    debug!(final_moves = arena.node(terminal).g, "exact phase complete");
    moves.extend(arena.path_moves(terminal));

    Ok(moves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::EMPTY;
    use crate::scramble;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn a_solved_board_needs_no_moves() {
        let board = Board::from_cells(3, vec![0, 1, 2, 3, 4, 5, 6, 7, EMPTY]).unwrap();
        assert!(solve(&board).unwrap().is_empty());
    }

    #[test]
    fn a_single_move_is_inverted() {
        let board = Board::solved(3).apply(Move::Up).unwrap();
        assert_eq!(solve(&board).unwrap(), vec![Move::Down]);
    }

    #[test]
    fn three_by_three_solutions_replay_to_solved() {
        for seed in 0..4u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let (board, _) = scramble::walk(3, 50, &mut rng);
            let moves = solve(&board).unwrap();
            assert_eq!(board.replay(&moves).unwrap(), Board::solved(3));
        }
    }

    #[test]
    fn four_by_four_decomposition_replays_to_solved() {
        let mut rng = StdRng::seed_from_u64(21);
        let (board, walked) = scramble::walk(4, 40, &mut rng);
        let moves = solve(&board).unwrap();
        assert!(!moves.is_empty());
        assert!(!walked.is_empty());
        assert_eq!(board.replay(&moves).unwrap(), Board::solved(4));
    }

    #[test]
    fn five_by_five_decomposition_replays_to_solved() {
        let mut rng = StdRng::seed_from_u64(5);
        let (board, _) = scramble::walk(5, 24, &mut rng);
        let moves = solve(&board).unwrap();
        assert_eq!(board.replay(&moves).unwrap(), Board::solved(5));
    }

    #[test]
    fn swapped_tiles_are_rejected_up_front() {
        let board = Board::from_cells(3, vec![1, 0, 2, 3, 4, 5, 6, 7, EMPTY]).unwrap();
        assert!(matches!(solve(&board), Err(SolveError::Unsolvable)));
    }

    #[test]
    fn impossible_goal_empty_is_rejected() {
        let board = Board::solved(4);
        assert!(matches!(solve_to(&board, 3), Err(SolveError::Unsolvable)));
    }
}
