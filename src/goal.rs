//! Goal patterns and the predicates that match boards against them.
//!
//! A goal is itself a [`Board`], used only as a pattern: its cells may hold
//! `FREE`, which matches any candidate value. Partial goals are what let
//! the layered solver pin an outer ring while leaving the interior open.

use crate::board::{Board, Cell, EMPTY, FREE};

/// How a candidate board is compared against a goal pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchMode {
    /// Cell-for-cell identical.
    Exact,
    /// `FREE` goal cells impose no constraint; every other cell must match.
    Partial,
}

/// Whether `candidate` satisfies `goal` under `mode`.
pub fn matches(candidate: &Board, goal: &Board, mode: MatchMode) -> bool {
    match mode {
        MatchMode::Exact => candidate.cells() == goal.cells(),
        MatchMode::Partial => candidate
            .cells()
            .iter()
            .zip(goal.cells())
            .all(|(&cell, &want)| want == FREE || cell == want),
    }
}

/// The fully pinned goal: every tile home, the empty cell at `goal_empty`.
pub fn exact_goal(side: usize, goal_empty: usize) -> Board {
    let mut cells: Vec<Cell> = (0..(side * side) as Cell).collect();
    cells[goal_empty] = EMPTY;
    Board::pattern(side, cells, goal_empty)
}

/// The partial goal for one decomposition phase.
///
/// With `ring` cells of the board still unsolved per side, rows and columns
/// `0..=side-ring` are pinned to their home values and the interior stays
/// `FREE`. The cell the empty must reach is overlaid with `EMPTY` unless it
/// falls in the free interior.
pub fn ring_goal(side: usize, ring: usize, goal_empty: usize) -> Board {
    let pinned = side - ring;
    let mut cells: Vec<Cell> = vec![FREE; side * side];
    for (index, cell) in cells.iter_mut().enumerate() {
        if index / side <= pinned || index % side <= pinned {
            *cell = index as Cell;
        }
    }
    if cells[goal_empty] != FREE {
        cells[goal_empty] = EMPTY;
    }
    Board::pattern(side, cells, goal_empty)
}
