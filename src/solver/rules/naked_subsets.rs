use std::collections::BTreeMap;

use super::RuleOutcome;
use crate::bitset::Set;
use crate::board::{Board, Cell, CellState, Digit, House};

/// Shared-candidate groups.
///
/// Within a house, cells are grouped by their exact candidate set. A group
/// of `k` cells sharing the same `k` candidates will consume exactly those
/// digits among themselves, so the digits can be removed from every other
/// cell of the house. With `k = 2` this is the classic naked pair; larger
/// groups are caught the same way as long as their candidate sets are
/// identical.
pub(crate) fn find_naked_subsets(board: &mut Board) -> RuleOutcome {
    let mut updated = false;
    for house in House::all() {
        let mut groups: BTreeMap<Set<Digit>, Set<Cell>> = BTreeMap::new();
        for &cell in &house.cells() {
            if let CellState::Candidates(candidates) = board.state(cell) {
                if candidates.is_empty() {
                    continue;
                }
                *groups.entry(candidates).or_insert(Set::NONE) |= cell.as_set();
            }
        }

        for (&candidates, &members) in &groups {
            if candidates.len() != members.len() {
                continue;
            }
            for &cell in &house.cells() {
                if members.contains(cell.as_set()) {
                    continue;
                }
                for digit in candidates {
                    updated |= board.remove_candidate(cell, digit);
                }
            }
        }
    }
    match updated {
        true => RuleOutcome::Updated,
        false => RuleOutcome::NoAction,
    }
}
