//! Manhattan-distance estimate of the remaining moves.
//!
//! Each tile contributes the taxicab distance between its current cell and
//! its home cell (`id / side`, `id % side`). The sum never overestimates
//! the true remaining move count, since one move shifts one tile one cell.

use crate::board::Board;

/// Full evaluation over every tile. Sentinel cells contribute nothing.
pub fn manhattan(board: &Board) -> u32 {
    let n = board.side();
    let mut h = 0u32;
    for (index, &cell) in board.cells().iter().enumerate() {
        if cell >= 0 {
            h += tile_distance(index, cell as usize, n);
        }
    }
    h
}

/// Evaluation of a child produced by one empty-cell move, given the
/// parent's value.
///
/// Only the tile that slid into the parent's empty cell changed position:
/// it moved from the child's empty cell to the parent's. Swapping that one
/// contribution must agree with [`manhattan`] on every reachable board.
pub fn incremental(parent: &Board, parent_h: u32, child: &Board) -> u32 {
    let n = parent.side();
    let moved = child.cells()[parent.empty_index()];
    debug_assert!(moved >= 0, "the cell vacated by the empty must hold a tile");

    let home = moved as usize;
    let old = tile_distance(child.empty_index(), home, n);
    let new = tile_distance(parent.empty_index(), home, n);
    parent_h - old + new
}

fn tile_distance(index: usize, home: usize, n: usize) -> u32 {
    let d = (index / n).abs_diff(home / n) + (index % n).abs_diff(home % n);
    d as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Move, EMPTY};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn solved_board_scores_zero() {
        assert_eq!(manhattan(&Board::solved(3)), 0);
        assert_eq!(manhattan(&Board::solved(5)), 0);
    }

    #[test]
    fn one_move_scores_one() {
        let board = Board::solved(3).apply(Move::Up).unwrap();
        assert_eq!(manhattan(&board), 1);
    }

    #[test]
    fn distances_accumulate_per_tile() {
        // tile 0 sits at the far corner (distance 4); everything else is home
        let board = Board::from_cells(3, vec![EMPTY, 1, 2, 3, 4, 5, 6, 7, 0]).unwrap();
        assert_eq!(manhattan(&board), 4);

        // swap tiles 1 and 3: each is one row and one column from home
        let board = Board::from_cells(3, vec![0, 3, 2, 1, 4, 5, 6, 7, EMPTY]).unwrap();
        assert_eq!(manhattan(&board), 4);
    }

    #[test]
    fn incremental_matches_full_recomputation_on_random_walks() {
        for side in [3usize, 4, 5] {
            let mut rng = StdRng::seed_from_u64(side as u64);
            let mut board = Board::solved(side);
            let mut h = manhattan(&board);
            for _ in 0..300 {
                let mut successors = board.successors();
                let pick = rng.gen_range(0..successors.len());
                let (_, child) = successors.swap_remove(pick);

                let updated = incremental(&board, h, &child);
                assert_eq!(updated, manhattan(&child));

                board = child;
                h = updated;
            }
        }
    }

    #[test]
    fn sentinel_cells_are_skipped() {
        let pattern = Board::pattern(3, vec![0, 1, 2, crate::board::FREE, 4, 5, 6, 7, EMPTY], 8);
        assert_eq!(manhattan(&pattern), 0);
    }
}
