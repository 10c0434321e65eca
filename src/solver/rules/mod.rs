//! Deduction rules applied between guesses.
//!
//! The rules run in a fixed priority order. Whenever one of them changes
//! the board, the loop restarts from the first rule, so the cheap
//! deductions are always exhausted before the more expensive ones run.
//! A rule reports [`RuleOutcome::Invalid`] when it proves the board can no
//! longer be completed; the search treats such a board as a dead branch.

mod hidden_singles;
mod locked_candidates;
mod naked_singles;
mod naked_subsets;

use crate::board::Board;
use crate::helper::Unsolvable;

/// What a single rule application did to the board.
pub(crate) enum RuleOutcome {
    /// Nothing to deduce.
    NoAction,
    /// At least one assignment was made or candidate removed.
    Updated,
    /// The board cannot be completed anymore.
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rule {
    NakedSingles,
    HiddenSingles,
    LockedCandidates,
    NakedSubsets,
}

impl Rule {
    /// All rules, in application priority order.
    pub(crate) const ALL: &'static [Rule] = &[
        Rule::NakedSingles,
        Rule::HiddenSingles,
        Rule::LockedCandidates,
        Rule::NakedSubsets,
    ];

    pub(crate) fn apply(self, board: &mut Board) -> RuleOutcome {
        match self {
            Rule::NakedSingles => naked_singles::find_naked_singles(board),
            Rule::HiddenSingles => hidden_singles::find_hidden_singles(board),
            Rule::LockedCandidates => locked_candidates::find_locked_candidates(board),
            Rule::NakedSubsets => naked_subsets::find_naked_subsets(board),
        }
    }
}

/// Runs the rules to a fixpoint.
///
/// Returns `Err(Unsolvable)` iff some rule proved the board dead. A board
/// that merely resists further deduction is left as is with `Ok(())`; the
/// solver then branches on a guess.
pub(crate) fn simplify(board: &mut Board) -> Result<(), Unsolvable> {
    'restart: loop {
        for &rule in Rule::ALL {
            match rule.apply(board) {
                RuleOutcome::Invalid => return Err(Unsolvable),
                RuleOutcome::Updated => continue 'restart,
                RuleOutcome::NoAction => {}
            }
        }
        return Ok(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    const SOLVED: &str = "\
483921657
967345821
251876493
548132976
729564138
136798245
372689514
814253769
695417382";

    // the solved grid with the main diagonal blanked out
    fn diagonal_holes() -> Board {
        let text: String = SOLVED
            .lines()
            .enumerate()
            .map(|(row, line)| {
                let mut line: String = line.into();
                line.replace_range(row..row + 1, " ");
                line.push('\n');
                line
            })
            .collect();
        Board::from_str(&text).unwrap()
    }

    #[test]
    fn simplify_completes_a_singles_only_grid() {
        let mut board = diagonal_holes();
        assert_eq!(board.n_clues(), 72);
        simplify(&mut board).unwrap();
        assert!(board.is_solved());
        assert_eq!(board.to_string(), Board::from_str(SOLVED).unwrap().to_string());
    }

    #[test]
    fn simplify_is_idempotent_at_the_fixpoint() {
        let mut board = Board::from_str("\
  3 2 6
9  3 5  1
  18 64
  81 29
7       8
  67 82
  26 95
8  2 3  9
  5 1 3")
        .unwrap();
        simplify(&mut board).unwrap();
        let fixpoint = board.clone();
        simplify(&mut board).unwrap();
        assert_eq!(board, fixpoint);
    }

    #[test]
    fn simplify_reports_dead_boards() {
        let mut board = Board::new();
        // leave cell (0, 8) without any candidate
        for (col, value) in [(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6)] {
            board.assign(0, col, value).unwrap();
        }
        board.assign(1, 6, 7).unwrap();
        board.assign(1, 7, 8).unwrap();
        board.assign(2, 8, 9).unwrap();
        assert!(board.candidates(Cell::from_coords(0, 8)).is_empty());
        assert!(simplify(&mut board).is_err());
    }
}
