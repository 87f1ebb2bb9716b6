//! Board representation for generalized sliding-tile puzzles.
//!
//! A board is a flat vector of `side * side` cells. Each tile carries the
//! linear index of its home cell, so a solved board reads `0, 1, 2, ...`
//! with the empty cell last. `EMPTY` marks the single empty cell; `FREE`
//! appears only in goal patterns and matches any value there.

use std::fmt;
use std::hash::{Hash, Hasher};

use thiserror::Error;

/// A single cell value: a tile id, `EMPTY`, or (in goal patterns) `FREE`.
pub type Cell = i16;

/// Sentinel for the one empty cell.
pub const EMPTY: Cell = -1;

/// Sentinel for a "match anything" cell in goal patterns.
pub const FREE: Cell = -2;

/// A move of the empty cell. Direction names describe where the empty cell
/// goes, not the tile sliding into its place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// The move that undoes this one.
    pub fn opposite(self) -> Move {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Move::Up => 'U',
            Move::Down => 'D',
            Move::Left => 'L',
            Move::Right => 'R',
        };
        write!(f, "{letter}")
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("expected {side}x{side} = {expected} cells, got {got}")]
    WrongLength {
        side: usize,
        expected: usize,
        got: usize,
    },
    #[error("cells are not a permutation of the empty cell and tiles 0..={max_tile}")]
    NotAPermutation { max_tile: usize },
    #[error("board has no empty cell")]
    NoEmptyCell,
}

/// One puzzle configuration.
///
/// Equality and hashing consider only the cell contents, so configurations
/// reached by different paths deduplicate in closed sets.
#[derive(Clone, Debug)]
pub struct Board {
    side: usize,
    cells: Vec<Cell>,
    empty: usize,
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cells.hash(state);
    }
}

impl Board {
    /// The solved board: every tile home, the empty cell bottom-right.
    pub fn solved(side: usize) -> Board {
        let len = side * side;
        let mut cells: Vec<Cell> = (0..len as Cell).collect();
        cells[len - 1] = EMPTY;
        Board {
            side,
            cells,
            empty: len - 1,
        }
    }

    /// Validates and wraps a raw cell vector.
    ///
    /// The cells must contain exactly one `EMPTY` and each tile id
    /// `0..=side*side-2` exactly once.
    pub fn from_cells(side: usize, cells: Vec<Cell>) -> Result<Board, BoardError> {
        let expected = side * side;
        if side < 2 || cells.len() != expected {
            return Err(BoardError::WrongLength {
                side,
                expected,
                got: cells.len(),
            });
        }

        let max_tile = expected - 2;
        let mut seen = vec![false; expected - 1];
        let mut empty = None;
        for (index, &cell) in cells.iter().enumerate() {
            if cell == EMPTY {
                if empty.is_some() {
                    return Err(BoardError::NotAPermutation { max_tile });
                }
                empty = Some(index);
            } else if (0..=max_tile as Cell).contains(&cell) && !seen[cell as usize] {
                seen[cell as usize] = true;
            } else {
                return Err(BoardError::NotAPermutation { max_tile });
            }
        }

        let empty = empty.ok_or(BoardError::NoEmptyCell)?;
        Ok(Board { side, cells, empty })
    }

    /// Builds a goal pattern without permutation validation (`FREE` cells
    /// are allowed; `empty` records where the empty cell must end up).
    pub(crate) fn pattern(side: usize, cells: Vec<Cell>, empty: usize) -> Board {
        Board { side, cells, empty }
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn empty_index(&self) -> usize {
        self.empty
    }

    /// Where the empty cell lands after `mv`, or `None` if the move would
    /// leave the board.
    fn empty_after(&self, mv: Move) -> Option<usize> {
        let n = self.side;
        let row = self.empty / n;
        let col = self.empty % n;
        match mv {
            Move::Up if row > 0 => Some(self.empty - n),
            Move::Down if row + 1 < n => Some(self.empty + n),
            Move::Left if col > 0 => Some(self.empty - 1),
            Move::Right if col + 1 < n => Some(self.empty + 1),
            _ => None,
        }
    }

    /// The board after moving the empty cell, as a fresh copy with one swap.
    pub fn apply(&self, mv: Move) -> Option<Board> {
        let target = self.empty_after(mv)?;
        let mut cells = self.cells.clone();
        cells.swap(self.empty, target);
        Some(Board {
            side: self.side,
            cells,
            empty: target,
        })
    }

    /// All legal single moves and their resulting boards, at most four.
    ///
    /// An out-of-range empty index yields nothing; callers treat that as an
    /// internal-consistency fault, and validated boards never hit it.
    pub fn successors(&self) -> Vec<(Move, Board)> {
        if self.empty >= self.cells.len() {
            return Vec::new();
        }
        Move::ALL
            .iter()
            .filter_map(|&mv| self.apply(mv).map(|board| (mv, board)))
            .collect()
    }

    /// Applies a whole move sequence, failing on the first illegal move.
    pub fn replay(&self, moves: &[Move]) -> Option<Board> {
        let mut board = self.clone();
        for &mv in moves {
            board = board.apply(mv)?;
        }
        Some(board)
    }

    /// Whether the solved arrangement with the empty cell at `goal_empty`
    /// is reachable from this configuration.
    ///
    /// Every move transposes the empty cell with one tile and changes the
    /// empty cell's taxicab distance to its target by one, so the two
    /// parities must agree.
    pub fn solvable_to(&self, goal_empty: usize) -> bool {
        let len = self.cells.len();
        if goal_empty >= len {
            return false;
        }

        let mut destinations: Vec<usize> = Vec::with_capacity(len);
        for &cell in &self.cells {
            let dest = if cell == EMPTY {
                goal_empty
            } else {
                cell as usize
            };
            destinations.push(dest);
        }

        // A destination collision means some tile has no home under this
        // goal (tile ids only ever leave the last cell free).
        let mut taken = vec![false; len];
        for &dest in &destinations {
            if taken[dest] {
                return false;
            }
            taken[dest] = true;
        }

        let n = self.side;
        let empty_dist = (self.empty / n).abs_diff(goal_empty / n)
            + (self.empty % n).abs_diff(goal_empty % n);
        permutation_swaps(&destinations) % 2 == empty_dist % 2
    }
}

/// Number of transpositions in a permutation, via cycle decomposition.
fn permutation_swaps(perm: &[usize]) -> usize {
    let mut visited = vec![false; perm.len()];
    let mut swaps = 0;
    for start in 0..perm.len() {
        if visited[start] {
            continue;
        }
        let mut cursor = start;
        let mut cycle_len = 0;
        while !visited[cursor] {
            visited[cursor] = true;
            cursor = perm[cursor];
            cycle_len += 1;
        }
        swaps += cycle_len - 1;
    }
    swaps
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.cells.len().saturating_sub(2)).to_string().len();
        for row in self.cells.chunks(self.side) {
            for (col, &cell) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                match cell {
                    EMPTY => write!(f, "{:>width$}", ".")?,
                    FREE => write!(f, "{:>width$}", "*")?,
                    tile => write!(f, "{tile:>width$}")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
