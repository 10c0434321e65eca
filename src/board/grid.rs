use std::fmt;
use std::io::BufRead;

use crate::bitset::Set;
use crate::board::{Cell, CellState, Digit};
use crate::errors::{InvalidValue, LoadError};
use crate::helper::CellArray;

/// A 9×9 sudoku board with candidate tracking.
///
/// Every cell is either assigned a digit or carries the set of digits not
/// yet excluded by an assigned peer. Assignments keep the candidate sets of
/// all peers up to date, so the board as a whole always satisfies: the
/// candidates of an unset cell are exactly the digits 1–9 minus the values
/// of the cells sharing its row, column or block.
///
/// `Board` has value semantics. Cloning produces a fully independent copy;
/// the solver and generator clone before every trial assignment so that
/// abandoned branches never leak state into their siblings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: CellArray<CellState>,
}

impl Board {
    /// Creates an empty board. All cells are unset with full candidate sets.
    pub fn new() -> Board {
        Board {
            cells: CellArray([CellState::Candidates(Set::ALL); 81]),
        }
    }

    /// The state of the given cell.
    pub fn state(&self, cell: Cell) -> CellState {
        self.cells[cell]
    }

    /// The assigned digit of the given cell, if any.
    pub fn digit(&self, cell: Cell) -> Option<Digit> {
        self.cells[cell].digit()
    }

    /// The remaining candidates of the given cell. Empty for assigned cells.
    pub fn candidates(&self, cell: Cell) -> Set<Digit> {
        self.cells[cell].candidates()
    }

    /// Assigns `value` to the cell at `row`, `col`.
    ///
    /// Returns `Err(InvalidValue)` if `value` is not in `1..=9`.
    /// Returns `Ok(false)` without touching the board if the value is not
    /// among the cell's candidates, i.e. if the assignment would conflict
    /// with a peer or the cell is already assigned.
    ///
    /// # Panic
    /// Panics, if `row` or `col` is not in the range of `0..=8`.
    pub fn assign(&mut self, row: u8, col: u8, value: u8) -> Result<bool, InvalidValue> {
        let digit = Digit::new_checked(value).ok_or(InvalidValue(value))?;
        Ok(self.try_assign(Cell::from_coords(row, col), digit))
    }

    /// Assigns `digit` to `cell` if it is still a candidate there and
    /// removes it from the candidate set of every unset peer.
    pub(crate) fn try_assign(&mut self, cell: Cell, digit: Digit) -> bool {
        if !self.candidates(cell).contains(digit.as_set()) {
            return false;
        }
        self.cells[cell] = CellState::Digit(digit);
        for neighbor in cell.neighbors() {
            if let CellState::Candidates(candidates) = &mut self.cells[neighbor] {
                candidates.remove(digit.as_set());
            }
        }
        true
    }

    /// Clears a previously assigned cell at `row`, `col` back to unset.
    ///
    /// The cell's candidate set and those of all its unset peers are
    /// recomputed from scratch against the current peer values, so any
    /// candidate freed up by the removal reappears. A no-op for unset cells.
    ///
    /// # Panic
    /// Panics, if `row` or `col` is not in the range of `0..=8`.
    pub fn retract(&mut self, row: u8, col: u8) {
        self.clear_cell(Cell::from_coords(row, col));
    }

    pub(crate) fn clear_cell(&mut self, cell: Cell) {
        if self.digit(cell).is_none() {
            return;
        }
        self.cells[cell] = CellState::Candidates(Set::NONE);
        self.recompute_candidates(cell);
        for neighbor in cell.neighbors() {
            if self.digit(neighbor).is_none() {
                self.recompute_candidates(neighbor);
            }
        }
    }

    fn recompute_candidates(&mut self, cell: Cell) {
        let mut excluded = Set::NONE;
        for neighbor in cell.neighbors() {
            if let Some(digit) = self.digit(neighbor) {
                excluded |= digit.as_set();
            }
        }
        self.cells[cell] = CellState::Candidates(Set::ALL.without(excluded));
    }

    /// Removes `digit` from the candidates of `cell`.
    /// Returns whether the set actually shrank.
    pub(crate) fn remove_candidate(&mut self, cell: Cell, digit: Digit) -> bool {
        if let CellState::Candidates(candidates) = &mut self.cells[cell] {
            if candidates.contains(digit.as_set()) {
                candidates.remove(digit.as_set());
                return true;
            }
        }
        false
    }

    /// Number of assigned cells.
    pub fn n_clues(&self) -> u8 {
        self.cells.iter().filter(|state| state.digit().is_some()).count() as u8
    }

    /// Whether all 81 cells are assigned.
    pub fn is_solved(&self) -> bool {
        self.n_clues() == 81
    }

    /// The unset cell with the fewest remaining candidates.
    /// Ties are broken in favor of the lowest cell index.
    /// `None` iff the board is fully assigned.
    pub(crate) fn most_constrained_cell(&self) -> Option<Cell> {
        let mut best: Option<(Cell, u8)> = None;
        for cell in Cell::all() {
            if let CellState::Candidates(candidates) = self.cells[cell] {
                let n_candidates = candidates.len();
                match best {
                    Some((_, fewest)) if fewest <= n_candidates => {}
                    _ => best = Some((cell, n_candidates)),
                }
            }
        }
        best.map(|(cell, _)| cell)
    }

    /// Reads a board from lines of text.
    ///
    /// Up to 9 non-empty lines are consumed top to bottom. Within a line,
    /// every character other than a space or `'1'..='9'` is stripped (so
    /// `|` column markers and `---+---+---` separator lines are fine), and
    /// the first 9 remaining characters map to columns 0–8: a digit assigns
    /// that clue, a space leaves the cell unset. Missing trailing characters
    /// and missing trailing lines leave cells unset; lines past the 9th row
    /// are ignored.
    ///
    /// Clues are applied through the regular assignment primitive, so a
    /// puzzle with conflicting clues fails with
    /// [`LoadError::ConflictingClue`].
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Board, LoadError> {
        let mut board = Board::new();
        let mut row = 0u8;
        for line in reader.lines() {
            if row >= 9 {
                break;
            }
            let line = line?;
            let cleaned: Vec<char> = line
                .chars()
                .filter(|&c| matches!(c, ' ' | '1'..='9'))
                .collect();
            if cleaned.is_empty() {
                continue;
            }
            for (col, &c) in cleaned.iter().take(9).enumerate() {
                if let Some(value) = c.to_digit(10) {
                    let digit = Digit::new(value as u8);
                    if !board.try_assign(Cell::from_coords(row, col as u8), digit) {
                        return Err(LoadError::ConflictingClue {
                            row,
                            col: col as u8,
                            value: value as u8,
                        });
                    }
                }
            }
            row += 1;
        }
        Ok(board)
    }

    /// Reads a board from a string. See [`Board::from_reader`] for the format.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Board, LoadError> {
        Board::from_reader(s.as_bytes())
    }

    /// The board as a single 81-character line, `.` for unset cells.
    pub fn to_str_line(&self) -> String {
        Cell::all()
            .map(|cell| match self.digit(cell) {
                Some(digit) => char::from(b'0' + digit.get()),
                None => '.',
            })
            .collect()
    }

    /// A grid rendering that shows the remaining candidates of every unset
    /// cell, three lines per row. Intended for troubleshooting deductions.
    pub fn debug_grid(&self) -> String {
        use std::fmt::Write;

        let mut out = String::new();
        for row in 0..9u8 {
            if row == 3 || row == 6 {
                out.push_str(&"#".repeat(35));
                out.push('\n');
            } else if row > 0 {
                out.push_str("---+---+---#---+---+---#---+---+---\n");
            }
            let mut lines = [String::new(), String::new(), String::new()];
            for col in 0..9u8 {
                if col == 3 || col == 6 {
                    for line in &mut lines {
                        line.push('#');
                    }
                } else if col > 0 {
                    for line in &mut lines {
                        line.push('|');
                    }
                }
                match self.state(Cell::from_coords(row, col)) {
                    CellState::Digit(digit) => {
                        lines[0].push_str(" v ");
                        let _ = write!(lines[1], ">{}<", digit.get());
                        lines[2].push_str(" ^ ");
                    }
                    CellState::Candidates(candidates) => {
                        for digit in Digit::all() {
                            let line = &mut lines[digit.as_index() / 3];
                            if candidates.contains(digit.as_set()) {
                                line.push(char::from(b'0' + digit.get()));
                            } else {
                                line.push(' ');
                            }
                        }
                    }
                }
            }
            for line in &lines {
                out.push_str(line);
                out.push('\n');
            }
        }
        out
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..9u8 {
            if row == 3 || row == 6 {
                writeln!(f, "---+---+---")?;
            }
            for col in 0..9u8 {
                if col == 3 || col == 6 {
                    write!(f, "|")?;
                }
                match self.digit(Cell::from_coords(row, col)) {
                    Some(digit) => write!(f, "{}", digit.get())?,
                    None => write!(f, " ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // recompute what the candidates of every unset cell must be
    // and compare against the incrementally maintained sets
    fn assert_candidate_invariant(board: &Board) {
        for cell in Cell::all() {
            if board.digit(cell).is_some() {
                assert_eq!(board.candidates(cell), Set::NONE);
                continue;
            }
            let mut excluded = Set::NONE;
            for neighbor in cell.neighbors() {
                if let Some(digit) = board.digit(neighbor) {
                    excluded |= digit.as_set();
                }
            }
            assert_eq!(board.candidates(cell), Set::ALL.without(excluded));
        }
    }

    #[test]
    fn assign_propagates_to_all_peers() {
        let mut board = Board::new();
        assert_eq!(board.assign(4, 4, 5), Ok(true));
        let center = Cell::from_coords(4, 4);
        for neighbor in center.neighbors() {
            assert!(!board.candidates(neighbor).contains(Digit::new(5).as_set()));
        }
        assert_candidate_invariant(&board);
    }

    #[test]
    fn assign_rejects_out_of_range_values() {
        let mut board = Board::new();
        assert_eq!(board.assign(0, 0, 0), Err(InvalidValue(0)));
        assert_eq!(board.assign(0, 0, 10), Err(InvalidValue(10)));
    }

    #[test]
    fn conflicting_assignment_reports_false() {
        let mut board = Board::new();
        assert_eq!(board.assign(0, 0, 7), Ok(true));
        // same row
        assert_eq!(board.assign(0, 8, 7), Ok(false));
        // same column
        assert_eq!(board.assign(8, 0, 7), Ok(false));
        // same block
        assert_eq!(board.assign(1, 1, 7), Ok(false));
        // already assigned cell
        assert_eq!(board.assign(0, 0, 3), Ok(false));
        assert_eq!(board.n_clues(), 1);
    }

    #[test]
    fn retract_restores_candidates_of_cell_and_peers() {
        let mut board = Board::new();
        board.assign(0, 0, 1).unwrap();
        board.assign(0, 4, 2).unwrap();
        board.assign(5, 0, 3).unwrap();
        assert_candidate_invariant(&board);

        board.retract(0, 0);
        assert_eq!(board.digit(Cell::from_coords(0, 0)), None);
        assert_eq!(board.n_clues(), 2);
        assert_candidate_invariant(&board);
        // 1 is available again in its old row, 2 and 3 are still excluded
        let cands = board.candidates(Cell::from_coords(0, 0));
        assert!(cands.contains(Digit::new(1).as_set()));
        assert!(!cands.contains(Digit::new(2).as_set()));
        assert!(!cands.contains(Digit::new(3).as_set()));
    }

    #[test]
    fn retract_of_unset_cell_is_a_no_op() {
        let mut board = Board::new();
        board.assign(3, 3, 9).unwrap();
        let before = board.clone();
        board.retract(0, 0);
        assert_eq!(board, before);
    }

    #[test]
    fn most_constrained_cell_prefers_fewest_candidates() {
        let mut board = Board::new();
        // cell (0, 2) sees 1..=6 and keeps 3 candidates, everything else keeps more
        for (col, value) in [(0, 1), (1, 2), (3, 3), (4, 4), (5, 5), (6, 6)] {
            board.assign(0, col, value).unwrap();
        }
        assert_eq!(board.most_constrained_cell(), Some(Cell::from_coords(0, 2)));
    }

    #[test]
    fn parse_accepts_markup_and_short_lines() {
        let bare = "\
  3 2 6
9  3 5  1
  18 64
  81 29
7       8
  67 82
  26 95
8  2 3  9
  5 1 3";
        let block = "\
  3| 2 |6
9  |3 5|  1
  1|8 6|4
---+---+---
  8|1 2|9
7  |   |  8
  6|7 8|2
---+---+---
  2|6 9|5
8  |2 3|  9
  5| 1 |3";
        let with_junk = Board::from_str(block).unwrap();
        let without = Board::from_str(bare).unwrap();
        assert_eq!(with_junk, without);
        assert_eq!(with_junk.n_clues(), 32);
        assert_candidate_invariant(&with_junk);
    }

    #[test]
    fn parse_rejects_conflicting_clues() {
        let twice_five = "\
5   5
";
        match Board::from_str(twice_five) {
            Err(LoadError::ConflictingClue { row: 0, col: 4, value: 5 }) => {}
            other => panic!("expected conflicting clue error, got {:?}", other),
        }
    }

    #[test]
    fn parse_ignores_rows_past_the_ninth() {
        let mut input = String::new();
        for _ in 0..9 {
            input.push_str("         \n");
        }
        input.push_str("999999999\n");
        let board = Board::from_str(&input).unwrap();
        assert_eq!(board.n_clues(), 0);
    }

    #[test]
    fn display_round_trips_through_the_parser() {
        let mut board = Board::new();
        board.assign(0, 0, 4).unwrap();
        board.assign(2, 5, 9).unwrap();
        board.assign(8, 8, 1).unwrap();
        let reparsed = Board::from_str(&board.to_string()).unwrap();
        assert_eq!(board, reparsed);
    }

    #[test]
    fn display_format_matches_grid_layout() {
        let board = Board::from_str("123456789").unwrap();
        let text = board.to_string();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("123|456|789"));
        for _ in 0..2 {
            assert_eq!(lines.next(), Some("   |   |   "));
        }
        assert_eq!(lines.next(), Some("---+---+---"));
    }

    #[test]
    fn str_line_shows_clues_and_holes() {
        let board = Board::from_str(" 2").unwrap();
        let line = board.to_str_line();
        assert_eq!(line.len(), 81);
        assert_eq!(&line[..3], ".2.");
        assert!(line[2..].chars().all(|c| c == '.'));
    }
}
