use crate::bitset::Set;
use crate::board::Digit;

/// Contains either a digit or all the candidates for an unsolved cell
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[allow(missing_docs)]
pub enum CellState {
    Digit(Digit),
    Candidates(Set<Digit>),
}

impl CellState {
    /// The assigned digit, if any.
    pub fn digit(self) -> Option<Digit> {
        match self {
            CellState::Digit(digit) => Some(digit),
            CellState::Candidates(_) => None,
        }
    }

    /// The remaining candidates. Empty for an assigned cell.
    pub fn candidates(self) -> Set<Digit> {
        match self {
            CellState::Digit(_) => Set::NONE,
            CellState::Candidates(candidates) => candidates,
        }
    }
}
