//! Puzzle generation by randomized clue removal.
//!
//! A generator starts from a random full solution and walks a space of
//! progressively reduced boards. Clue removal is only ever accepted while
//! the board keeps exactly one solution — that property is what makes the
//! result a proper puzzle, and it is re-verified from scratch for every
//! candidate board rather than argued incrementally.

use std::rc::Rc;

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Cell};
use crate::errors::GenerationError;
use crate::solver::Solver;

/// One pending reduction: a board that is yet to be verified, and the
/// position in the removal order from which its own reductions may start.
/// The position bound guarantees that no combination of cleared cells is
/// ever produced twice.
struct Reduction {
    board: Board,
    next: usize,
}

/// Produces puzzle boards with exactly one solution, one pull at a time.
///
/// The first pull returns the full solution itself; every further pull
/// returns a board derived from an earlier one by clearing a single cell,
/// re-verified for uniqueness. Pulls walk removal paths depth-first in a
/// randomized order, so clue counts decrease along a path and jump back up
/// when a path bottoms out. Exhaustion (`None`) is only reached after the
/// whole reduction space has been tried.
pub struct Generator<R: Rng = StdRng> {
    solution: Rc<Board>,
    stack: Vec<Reduction>,
    order: Vec<Cell>,
    rng: R,
}

impl Generator<StdRng> {
    /// Creates a generator seeded with a random full solution.
    pub fn new() -> Result<Generator<StdRng>, GenerationError> {
        Generator::with_rng(StdRng::from_entropy())
    }
}

impl<R: Rng> Generator<R> {
    /// Creates a generator that takes all its randomness — the full
    /// solution, the removal order and the walk order — from `rng`.
    ///
    /// Fails with [`GenerationError`] only if the solver cannot complete an
    /// empty board, which would mean the solving engine itself is defective.
    pub fn with_rng(mut rng: R) -> Result<Generator<R>, GenerationError> {
        let mut solver = Solver::with_rng(Board::new(), StdRng::seed_from_u64(rng.gen()));
        let solution = solver.next_solution().ok_or(GenerationError(()))?;
        debug!("generated full solution {}", solution.to_str_line());

        let mut order: Vec<Cell> = Cell::all().collect();
        order.shuffle(&mut rng);

        let solution = Rc::new(solution);
        let stack = vec![Reduction {
            board: (*solution).clone(),
            next: 0,
        }];
        Ok(Generator {
            solution,
            stack,
            order,
            rng,
        })
    }

    /// The full solution all generated puzzles are derived from.
    pub fn solution(&self) -> &Board {
        &self.solution
    }

    /// Returns the next uniquely solvable board, or `None` once the
    /// reduction space is exhausted.
    pub fn next_puzzle(&mut self) -> Option<Board> {
        while let Some(Reduction { board, next }) = self.stack.pop() {
            if !self.has_unique_solution(&board) {
                trace!(
                    "dropping board with {} clues, solution is not unique",
                    board.n_clues()
                );
                continue;
            }

            // queue up every one-cell-smaller successor before handing the
            // board out; the `next` bound deduplicates overlapping paths
            let mut branches: Vec<usize> = (next..self.order.len())
                .filter(|&idx| board.digit(self.order[idx]).is_some())
                .collect();
            branches.shuffle(&mut self.rng);
            for idx in branches {
                let mut reduced = board.clone();
                reduced.clear_cell(self.order[idx]);
                self.stack.push(Reduction {
                    board: reduced,
                    next: idx + 1,
                });
            }

            debug!("emitting board with {} clues", board.n_clues());
            return Some(board);
        }
        None
    }

    /// Pulls boards until one with exactly `clue_count` assigned cells
    /// turns up. `None` if the reduction space runs dry first.
    pub fn next_with_clues(&mut self, clue_count: u8) -> Option<Board> {
        while let Some(board) = self.next_puzzle() {
            if board.n_clues() == clue_count {
                return Some(board);
            }
        }
        None
    }

    fn has_unique_solution(&mut self, board: &Board) -> bool {
        let mut solver = Solver::with_rng(board.clone(), StdRng::seed_from_u64(self.rng.gen()));
        solver.next_solution().is_some() && solver.next_solution().is_none()
    }
}

impl<R: Rng> Iterator for Generator<R> {
    type Item = Board;

    fn next(&mut self) -> Option<Board> {
        self.next_puzzle()
    }
}
