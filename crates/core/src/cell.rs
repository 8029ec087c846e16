//! Cell module - the occupant of one field position

use crate::types::{Connections, PuyoColor};

/// One field cell: a color plus its position and per-step metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub color: PuyoColor,
    pub column: usize,
    /// Row index, 0 is the top (hidden rows included)
    pub row: usize,
    /// Row this cell lands on after the pending gravity pass
    pub fall_target: usize,
    /// Settled same-color neighbors (rendering hint)
    pub connections: Connections,
}

impl Cell {
    /// Create a cell at (column, row) with no pending fall
    pub fn new(color: PuyoColor, column: usize, row: usize) -> Self {
        Self {
            color,
            column,
            row,
            fall_target: row,
            connections: Connections::NONE,
        }
    }

    pub fn empty(column: usize, row: usize) -> Self {
        Self::new(PuyoColor::Empty, column, row)
    }

    /// Create a cell from a single-character code; unknown codes are Empty
    pub fn from_code(code: char, column: usize, row: usize) -> Self {
        Self::new(PuyoColor::from_code_lossy(code), column, row)
    }

    pub fn code(&self) -> char {
        self.color.code()
    }

    pub fn is_colored(&self) -> bool {
        self.color.is_colored()
    }

    pub fn is_garbage(&self) -> bool {
        self.color.is_garbage()
    }

    pub fn is_block(&self) -> bool {
        self.color.is_block()
    }

    pub fn is_stone(&self) -> bool {
        self.color.is_stone()
    }

    pub fn is_empty(&self) -> bool {
        self.color.is_empty()
    }

    /// Move the cell to a new coordinate and forget any pending fall
    pub(crate) fn restamp(&mut self, column: usize, row: usize) {
        self.column = column;
        self.row = row;
        self.fall_target = row;
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::empty(0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_has_no_pending_fall_or_connections() {
        let cell = Cell::new(PuyoColor::Blue, 2, 7);
        assert_eq!(cell.fall_target, 7);
        assert!(cell.connections.is_empty());
        assert!(cell.is_colored());
    }

    #[test]
    fn from_code_is_lossy() {
        assert_eq!(Cell::from_code('H', 0, 0).color, PuyoColor::Hard);
        assert!(Cell::from_code('#', 0, 0).is_empty());
    }

    #[test]
    fn restamp_resets_fall_target() {
        let mut cell = Cell::new(PuyoColor::Red, 0, 3);
        cell.fall_target = 9;
        cell.restamp(1, 9);
        assert_eq!((cell.column, cell.row, cell.fall_target), (1, 9, 9));
    }
}
