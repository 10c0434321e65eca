#[cfg(doc)]
use crate::board::Board;
#[cfg(doc)]
use crate::generator::Generator;

/// Error for [`Board::assign`]: the value is outside `1..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid value {0}, cell values must be in the range 1..=9")]
pub struct InvalidValue(pub u8);

/// Error for [`Board::from_reader`] and [`Board::from_str`]
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The underlying reader failed.
    #[error("could not read puzzle input")]
    Io(#[from] std::io::Error),
    /// A clue conflicts with a clue read earlier.
    #[error("clue {value} at row {row}, column {col} conflicts with an earlier clue")]
    ConflictingClue {
        /// Row of the offending clue, `0..=8`.
        row: u8,
        /// Column of the offending clue, `0..=8`.
        col: u8,
        /// The clue value that could not be placed.
        value: u8,
    },
}

/// Error for [`Generator::new`]: the solver failed to complete an empty
/// board. This cannot happen unless the solving engine itself is broken,
/// which is why it is a hard error rather than an empty result.
#[derive(Debug, thiserror::Error)]
#[error("could not produce a full board from an empty grid")]
pub struct GenerationError(pub(crate) ());
