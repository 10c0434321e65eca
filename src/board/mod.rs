//! Types for cells, digits and the board itself.

mod cell_state;
mod digit;
mod grid;
pub mod positions;

pub use self::{
    cell_state::CellState,
    digit::Digit,
    grid::Board,
    positions::{Block, Cell, Col, House, HouseType, Row},
};
