//! Sliding-Tile Puzzle Solver
//!
//! Solves N x N sliding-tile puzzles from the command line: scramble a
//! board, solve a hand-entered configuration, or run a scramble-solve-
//! replay demonstration. Moves are printed as U/D/L/R and describe the
//! empty cell's movement.

use std::error::Error;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use tileslide::board::{Board, Cell, Move};
use tileslide::{scramble, solver};

/// Solves sliding-tile puzzles and prints the move sequence.
#[derive(Parser)]
#[command(name = "tileslide")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a board given as comma-separated cells (-1 marks the empty).
    Solve {
        /// Cell values in row-major order, e.g. "3,1,2,0,-1,5,6,4,7".
        cells: String,
    },
    /// Print a freshly scrambled board.
    Scramble {
        #[arg(long, default_value_t = 4)]
        size: usize,
        #[arg(long, default_value_t = 80)]
        moves: usize,
        /// Seed for a reproducible scramble.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Scramble a board, solve it, and verify the solution by replay.
    Demo {
        #[arg(long, default_value_t = 4)]
        size: usize,
        #[arg(long, default_value_t = 80)]
        moves: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Some(Command::Solve { cells }) => run_solve(&cells),
        Some(Command::Scramble { size, moves, seed }) => run_scramble(size, moves, seed),
        Some(Command::Demo { size, moves, seed }) => run_demo(size, moves, seed),
        None => run_demo(4, 80, None),
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Parses a comma-separated cell list, inferring the board side.
fn parse_board(input: &str) -> Result<Board, Box<dyn Error>> {
    let cells = input
        .split(',')
        .map(|token| token.trim().parse::<Cell>())
        .collect::<Result<Vec<Cell>, _>>()?;

    let side = (cells.len() as f64).sqrt() as usize;
    Ok(Board::from_cells(side, cells)?)
}

fn format_moves(moves: &[Move]) -> String {
    moves
        .iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn run_solve(input: &str) -> Result<(), Box<dyn Error>> {
    let board = parse_board(input)?;
    print!("{board}");

    let moves = solver::solve(&board)?;
    if moves.is_empty() {
        println!("Already solved.");
    } else {
        println!("Solved in {} moves: {}", moves.len(), format_moves(&moves));
    }
    Ok(())
}

/// Rejects board sizes too small to scramble or solve.
fn check_size(size: usize) -> Result<(), Box<dyn Error>> {
    if size < 2 {
        return Err(format!("board size must be at least 2, got {size}").into());
    }
    Ok(())
}

fn run_scramble(size: usize, moves: usize, seed: Option<u64>) -> Result<(), Box<dyn Error>> {
    check_size(size)?;
    let mut rng = rng_from(seed);
    let (board, _) = scramble::walk(size, moves, &mut rng);
    print!("{board}");
    println!("{}", format_cells(&board));
    Ok(())
}

fn run_demo(size: usize, moves: usize, seed: Option<u64>) -> Result<(), Box<dyn Error>> {
    check_size(size)?;
    let mut rng = rng_from(seed);
    let (board, walked) = scramble::walk(size, moves, &mut rng);
    println!("Scrambled with {} moves:", walked.len());
    print!("{board}");

    let solution = solver::solve(&board)?;
    println!("Solved in {} moves: {}", solution.len(), format_moves(&solution));

    let replayed = board
        .replay(&solution)
        .ok_or("solution replay left the board")?;
    println!("Replayed:");
    print!("{replayed}");

    if replayed == Board::solved(size) {
        println!("Verified.");
        Ok(())
    } else {
        Err("replayed board is not solved".into())
    }
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// The board as a cell list `run_solve` accepts back.
fn format_cells(board: &Board) -> String {
    board
        .cells()
        .iter()
        .map(|cell| cell.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_board_roundtrips_through_format_cells() {
        let board = parse_board("3,1,2,0,-1,5,6,4,7").unwrap();
        assert_eq!(board.side(), 3);
        assert_eq!(format_cells(&board), "3,1,2,0,-1,5,6,4,7");
    }

    #[test]
    fn parse_board_rejects_bad_input() {
        assert!(parse_board("0,1,2").is_err());
        assert!(parse_board("a,b,c").is_err());
        assert!(parse_board("0,0,1,2,3,4,5,6,-1").is_err());
    }

    #[test]
    fn sizes_below_two_are_rejected_before_scrambling() {
        assert!(run_scramble(0, 0, Some(1)).is_err());
        assert!(run_scramble(1, 10, Some(1)).is_err());
        assert!(run_demo(1, 5, Some(1)).is_err());
    }

    #[test]
    fn test_solve_snapshot() {
        // solved board scrambled by Up then Left; the unique optimal
        // solution moves the empty Right then Down
        let board = parse_board("0,1,2,3,-1,4,6,7,5").unwrap();
        let moves = solver::solve(&board).unwrap();

        let output = format!("{}\n{}\n", board, format_moves(&moves));
        insta::assert_snapshot!(output, @r"
        0 1 2
        3 . 4
        6 7 5

        R D
        ");
    }
}
