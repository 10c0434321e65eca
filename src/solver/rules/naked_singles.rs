use super::RuleOutcome;
use crate::board::{Board, Cell};

/// Assigns every unset cell that has exactly one candidate left.
///
/// The singles are collected up front; an earlier assignment in the same
/// pass can strip the candidate of a later one, in which case the board is
/// provably dead.
pub(crate) fn find_naked_singles(board: &mut Board) -> RuleOutcome {
    let mut singles = Vec::new();
    for cell in Cell::all() {
        // if Err(_), the set is empty and the cell is either solved or dead.
        // skip it here in either case (via unwrap_or(None))
        if let Some(digit) = board.candidates(cell).unique().unwrap_or(None) {
            singles.push((cell, digit));
        }
    }
    if singles.is_empty() {
        return RuleOutcome::NoAction;
    }
    for (cell, digit) in singles {
        if !board.try_assign(cell, digit) {
            return RuleOutcome::Invalid;
        }
    }
    RuleOutcome::Updated
}
