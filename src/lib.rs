//! Sliding-Tile Puzzle Solver Library
//!
//! Solves generalized N x N sliding-tile puzzles (the 8-, 15- and
//! 24-puzzle and up) by searching over moves of the empty cell. Boards up
//! to 3x3 are solved optimally with A*; larger boards are decomposed ring
//! by ring with weighted IDA* before an exact A* finish, trading global
//! optimality for bounded runtime.

pub mod board;
pub mod goal;
pub mod heuristic;
pub mod scramble;
pub mod search;
pub mod solver;

pub use board::{Board, BoardError, Cell, Move, EMPTY, FREE};
pub use solver::{solve, solve_to, SolveError};
