use super::RuleOutcome;
use crate::bitset::Set;
use crate::board::{Board, CellState, Digit, House};

/// Assigns every digit that has exactly one place left within a house.
///
/// Per house, one pass over the cells separates the unsolved digits into
/// those seen once and those seen more than once; the difference is the set
/// of hidden singles. The same pass doubles as a sanity check: a digit that
/// is neither solved nor a candidate anywhere in the house has no place
/// left, and the board is dead.
pub(crate) fn find_hidden_singles(board: &mut Board) -> RuleOutcome {
    for house in House::all() {
        let cells = house.cells();
        let mut solved = Set::NONE;
        let mut unsolved: Set<Digit> = Set::NONE;
        let mut multiple_unsolved = Set::NONE;

        for &cell in &cells {
            match board.state(cell) {
                CellState::Digit(digit) => solved |= digit.as_set(),
                CellState::Candidates(candidates) => {
                    multiple_unsolved |= unsolved & candidates;
                    unsolved |= candidates;
                }
            }
        }
        if unsolved | solved != Set::ALL {
            return RuleOutcome::Invalid;
        }

        let mut singles = unsolved.without(multiple_unsolved);
        if singles.is_empty() {
            continue;
        }

        let mut updated = false;
        for &cell in &cells {
            if singles.is_empty() {
                break;
            }
            match (board.candidates(cell) & singles).unique() {
                // cell holds none of the lone digits
                Err(_) => continue,
                Ok(Some(digit)) => {
                    if !board.try_assign(cell, digit) {
                        return RuleOutcome::Invalid;
                    }
                    singles.remove(digit.as_set());
                    updated = true;
                }
                // two digits that must each go here, impossible
                Ok(None) => return RuleOutcome::Invalid,
            }
        }
        if updated {
            return RuleOutcome::Updated;
        }
    }
    RuleOutcome::NoAction
}
