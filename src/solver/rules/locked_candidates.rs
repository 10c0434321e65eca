use super::RuleOutcome;
use crate::bitset::Set;
use crate::board::{Block, Board, Cell, Col, Digit, House, Row};

/// Box/line reduction.
///
/// If all cells of a block that still admit some digit lie in a single row
/// (or column), the digit must be placed there inside the block, and it can
/// be removed from the rest of that row (or column) outside the block.
pub(crate) fn find_locked_candidates(board: &mut Board) -> RuleOutcome {
    let mut updated = false;
    for block in Block::all() {
        let mut rows_with: [Set<Row>; 9] = [Set::NONE; 9];
        let mut cols_with: [Set<Col>; 9] = [Set::NONE; 9];
        for &cell in &House::from(block).cells() {
            for digit in board.candidates(cell) {
                rows_with[digit.as_index()] |= cell.row().as_set();
                cols_with[digit.as_index()] |= cell.col().as_set();
            }
        }

        for digit in Digit::all() {
            if let Ok(Some(row)) = rows_with[digit.as_index()].unique() {
                for col in Col::all() {
                    let cell = Cell::from_coords(row.get(), col.get());
                    if cell.block() != block {
                        updated |= board.remove_candidate(cell, digit);
                    }
                }
            }
            if let Ok(Some(col)) = cols_with[digit.as_index()].unique() {
                for row in Row::all() {
                    let cell = Cell::from_coords(row.get(), col.get());
                    if cell.block() != block {
                        updated |= board.remove_candidate(cell, digit);
                    }
                }
            }
        }
    }
    match updated {
        true => RuleOutcome::Updated,
        false => RuleOutcome::NoAction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_locked_to_a_row_clears_the_rest_of_the_row() {
        let mut board = Board::new();
        // fill the two lower minirows of block 0, leaving 1, 2 and 3
        // locked into row 0 of the block
        board.assign(1, 0, 4).unwrap();
        board.assign(1, 1, 5).unwrap();
        board.assign(1, 2, 6).unwrap();
        board.assign(2, 0, 7).unwrap();
        board.assign(2, 1, 8).unwrap();
        board.assign(2, 2, 9).unwrap();

        let one = Digit::new(1).as_set();
        for col in 3..9 {
            assert!(board.candidates(Cell::from_coords(0, col)).contains(one));
        }

        assert!(matches!(find_locked_candidates(&mut board), RuleOutcome::Updated));
        for col in 3..9 {
            let candidates = board.candidates(Cell::from_coords(0, col));
            assert!(!candidates.contains(one));
            assert!(!candidates.contains(Digit::new(2).as_set()));
            assert!(!candidates.contains(Digit::new(3).as_set()));
        }
        // cells below the cleared row keep their candidates
        assert!(board.candidates(Cell::from_coords(1, 4)).contains(one));
    }

    #[test]
    fn no_action_on_an_empty_board() {
        let mut board = Board::new();
        assert!(matches!(find_locked_candidates(&mut board), RuleOutcome::NoAction));
    }
}
