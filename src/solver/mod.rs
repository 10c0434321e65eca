//! The backtracking search engine.
//!
//! The solver keeps its backtracking state as data instead of call-stack
//! recursion: a LIFO stack of deferred assignments. Each entry names a
//! parent board (shared read-only between siblings), a cell and a candidate
//! digit; evaluating it deep-copies the parent and attempts the assignment.
//! This makes the search restartable — every call to
//! [`Solver::next_solution`] picks up exactly where the last one left off —
//! and keeps abandoned branches from ever touching live boards.

pub(crate) mod rules;

use std::rc::Rc;

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Cell, Digit};

/// A deferred step of the search: either the starting board or a trial
/// assignment on top of a previously explored board.
enum Frame {
    Start(Board),
    Attempt {
        parent: Rc<Board>,
        cell: Cell,
        digit: Digit,
    },
}

impl Frame {
    /// Produces the board this frame stands for, or `None` if the deferred
    /// assignment turns out to be illegal.
    fn materialize(self) -> Option<Board> {
        match self {
            Frame::Start(board) => Some(board),
            Frame::Attempt { parent, cell, digit } => {
                let mut board = (*parent).clone();
                match board.try_assign(cell, digit) {
                    true => Some(board),
                    false => None,
                }
            }
        }
    }
}

/// Enumerates the solutions of a starting board, one pull at a time.
///
/// Every call to [`next_solution`](Solver::next_solution) returns one more
/// complete board satisfying all constraints, without ever repeating a
/// solution, until the search space is exhausted. The order of solutions
/// depends on the injected random source; within one `Solver` the
/// enumeration is stable.
///
/// An unsolvable board is not an error: the first pull simply returns
/// `None`.
pub struct Solver<R: Rng = StdRng> {
    frontier: Vec<Frame>,
    rng: R,
}

impl Solver<StdRng> {
    /// Creates a solver over `board` with a random search order.
    pub fn new(board: Board) -> Solver<StdRng> {
        Solver::with_rng(board, StdRng::from_entropy())
    }
}

impl<R: Rng> Solver<R> {
    /// Creates a solver over `board` using `rng` to order guesses.
    /// Seeding the generator makes the enumeration reproducible.
    pub fn with_rng(board: Board, rng: R) -> Solver<R> {
        Solver {
            frontier: vec![Frame::Start(board)],
            rng,
        }
    }

    /// Returns the next solution, or `None` once no further solutions
    /// are reachable from the starting board.
    pub fn next_solution(&mut self) -> Option<Board> {
        while let Some(frame) = self.frontier.pop() {
            let mut board = match frame.materialize() {
                Some(board) => board,
                None => continue,
            };
            if rules::simplify(&mut board).is_err() {
                // contradiction, the branch dies and its siblings take over
                continue;
            }
            if board.is_solved() {
                return Some(board);
            }

            let cell = match board.most_constrained_cell() {
                Some(cell) => cell,
                None => continue,
            };
            let mut digits: Vec<Digit> = board.candidates(cell).into_iter().collect();
            digits.shuffle(&mut self.rng);
            trace!(
                "branching on cell {} with {} candidates",
                cell.get(),
                digits.len()
            );
            let parent = Rc::new(board);
            for digit in digits {
                self.frontier.push(Frame::Attempt {
                    parent: Rc::clone(&parent),
                    cell,
                    digit,
                });
            }
        }
        debug!("search stack exhausted, no further solutions");
        None
    }
}

impl<R: Rng> Iterator for Solver<R> {
    type Item = Board;

    fn next(&mut self) -> Option<Board> {
        self.next_solution()
    }
}
