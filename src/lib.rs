#![warn(missing_docs)]
//! A sudoku solving and generation library
//!
//! ## Overview
//!
//! The [`Board`] tracks assignments together with the remaining candidates
//! of every open cell. The [`Solver`] enumerates all solutions of a board
//! lazily, interleaving candidate-based deduction with randomized
//! backtracking; the [`Generator`] builds on it to produce puzzles with a
//! guaranteed unique solution by randomly removing clues from a full
//! solution.
//!
//! ## Example
//!
//! ```
//! use sudokugen::{Board, Solver};
//!
//! let puzzle = "\
//!   3| 2 |6
//! 9  |3 5|  1
//!   1|8 6|4
//! ---+---+---
//!   8|1 2|9
//! 7  |   |  8
//!   6|7 8|2
//! ---+---+---
//!   2|6 9|5
//! 8  |2 3|  9
//!   5| 1 |3";
//!
//! let board = Board::from_str(puzzle).unwrap();
//! let mut solver = Solver::new(board);
//!
//! // pull solutions until the search space is exhausted
//! while let Some(solution) = solver.next_solution() {
//!     println!("{}", solution);
//! }
//! ```

pub mod bitset;
pub mod board;
mod errors;
mod generator;
mod helper;
mod solver;

pub use crate::bitset::Set;
pub use crate::board::{Board, Cell, CellState, Digit};
pub use crate::errors::{GenerationError, InvalidValue, LoadError};
pub use crate::generator::Generator;
pub use crate::solver::Solver;
