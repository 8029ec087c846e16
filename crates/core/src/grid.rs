//! Grid module - 2-D containers and shape coercion
//!
//! A [`Grid`] is a `cols x rows` field stored as a flat vector in row-major
//! order (`row * cols + col`) for cache locality. Coordinates are
//! `(column, row)` with column 0 on the left and row 0 at the top, so hidden
//! rows come first.
//!
//! Text boards travel as a [`ColorMatrix`]: a sequence of columns, each a
//! sequence of single-character color codes ordered top to bottom.

use std::ops::{Index, IndexMut};

use arrayvec::ArrayVec;

use crate::cell::Cell;
use crate::settings::Settings;
use crate::types::Connections;

/// A board of color codes, column-major (`matrix[column][row]`)
pub type ColorMatrix = Vec<Vec<char>>;

/// Code used to pad missing cells in text boards
pub const EMPTY_CODE: char = '0';

/// A fixed-size 2-D field of values
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    cols: usize,
    rows: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with the same value in every cell
    pub fn uniform(value: T, cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![value; cols * rows],
        }
    }

    /// Overwrite every cell with `value`
    pub fn fill(&mut self, value: T) {
        for cell in &mut self.cells {
            *cell = value.clone();
        }
    }

    /// Copy out as a column-major nested vector
    pub fn to_columns(&self) -> Vec<Vec<T>> {
        (0..self.cols)
            .map(|col| (0..self.rows).map(|row| self[(col, row)].clone()).collect())
            .collect()
    }
}

impl<T> Grid<T> {
    /// Build a grid by evaluating `f(column, row)` for every cell
    pub fn from_fn(cols: usize, rows: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut cells = Vec::with_capacity(cols * rows);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(f(col, row));
            }
        }
        Self { cols, rows, cells }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Calculate flat index from (column, row)
    #[inline(always)]
    fn flat_index(&self, col: usize, row: usize) -> Option<usize> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        Some(row * self.cols + col)
    }

    /// Get the value at (column, row), `None` if out of bounds
    pub fn get(&self, col: usize, row: usize) -> Option<&T> {
        self.flat_index(col, row).map(|idx| &self.cells[idx])
    }

    pub fn get_mut(&mut self, col: usize, row: usize) -> Option<&mut T> {
        match self.flat_index(col, row) {
            Some(idx) => Some(&mut self.cells[idx]),
            None => None,
        }
    }

    /// Set the value at (column, row)
    /// Returns false if out of bounds
    pub fn set(&mut self, col: usize, row: usize, value: T) -> bool {
        match self.flat_index(col, row) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Iterate values in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.cells.iter_mut()
    }

    /// Iterate one column from top to bottom
    pub fn column(&self, col: usize) -> impl Iterator<Item = &T> + '_ {
        let cols = self.cols;
        let take = if col < cols { self.rows } else { 0 };
        self.cells.iter().skip(col).step_by(cols.max(1)).take(take)
    }

    /// In-bounds orthogonal neighbors of (column, row), tagged with their
    /// direction, in up/right/down/left order
    pub fn neighbors(&self, col: usize, row: usize) -> ArrayVec<(Connections, usize, usize), 4> {
        let mut out = ArrayVec::new();
        if row > 0 {
            out.push((Connections::UP, col, row - 1));
        }
        if col + 1 < self.cols {
            out.push((Connections::RIGHT, col + 1, row));
        }
        if row + 1 < self.rows {
            out.push((Connections::DOWN, col, row + 1));
        }
        if col > 0 {
            out.push((Connections::LEFT, col - 1, row));
        }
        out
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (col, row): (usize, usize)) -> &T {
        assert!(
            col < self.cols && row < self.rows,
            "grid index ({}, {}) out of bounds for {}x{}",
            col,
            row,
            self.cols,
            self.rows
        );
        &self.cells[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (col, row): (usize, usize)) -> &mut T {
        assert!(
            col < self.cols && row < self.rows,
            "grid index ({}, {}) out of bounds for {}x{}",
            col,
            row,
            self.cols,
            self.rows
        );
        &mut self.cells[row * self.cols + col]
    }
}

impl Grid<Cell> {
    /// A grid of Empty cells with positions stamped
    pub fn empty_cells(cols: usize, rows: usize) -> Self {
        Self::from_fn(cols, rows, Cell::empty)
    }

    /// Export colors as a column-major matrix of codes
    pub fn to_text(&self) -> ColorMatrix {
        (0..self.cols)
            .map(|col| self.column(col).map(Cell::code).collect())
            .collect()
    }

    /// Export colors as row strings, top to bottom
    pub fn rows_text(&self) -> Vec<String> {
        transpose(&self.to_text())
            .into_iter()
            .map(|row| row.into_iter().collect())
            .collect()
    }
}

/// Transpose a rectangular matrix; cells missing from ragged input are
/// filled with `T::default()`
pub fn transpose<T: Clone + Default>(matrix: &[Vec<T>]) -> Vec<Vec<T>> {
    let height = matrix.iter().map(Vec::len).max().unwrap_or(0);
    (0..height)
        .map(|y| {
            matrix
                .iter()
                .map(|line| line.get(y).cloned().unwrap_or_default())
                .collect()
        })
        .collect()
}

/// Build a column-major matrix from row strings given top to bottom
///
/// Short rows are padded with Empty on the right.
pub fn matrix_from_rows<S: AsRef<str>>(rows: &[S]) -> ColorMatrix {
    let width = rows
        .iter()
        .map(|r| r.as_ref().chars().count())
        .max()
        .unwrap_or(0);
    (0..width)
        .map(|col| {
            rows.iter()
                .map(|r| r.as_ref().chars().nth(col).unwrap_or(EMPTY_CODE))
                .collect()
        })
        .collect()
}

/// Rebuild a matrix from a column-major field string of `cols * rows`
/// codes; missing characters are Empty
pub fn rebuild_matrix_from_string(field: &str, settings: &Settings) -> ColorMatrix {
    let codes: Vec<char> = field.chars().collect();
    (0..settings.cols)
        .map(|col| {
            (0..settings.rows)
                .map(|row| {
                    codes
                        .get(col * settings.rows + row)
                        .copied()
                        .unwrap_or(EMPTY_CODE)
                })
                .collect()
        })
        .collect()
}

/// Flatten a matrix back into a column-major field string
pub fn matrix_to_string(matrix: &[Vec<char>]) -> String {
    matrix.iter().flat_map(|col| col.iter()).collect()
}

/// Coerce a text board into a cell grid sized by `settings`
///
/// Each source column is aligned to the bottom of the field: shorter
/// columns gain Empty cells on top, taller columns lose their top cells.
/// Columns past the source width are Empty and extra source columns are
/// dropped. Unknown codes read as Empty.
pub fn coerce_matrix(input: &[Vec<char>], settings: &Settings) -> Grid<Cell> {
    let rows = settings.rows;
    let mut grid = Grid::empty_cells(settings.cols, rows);

    for (col, source) in input.iter().take(settings.cols).enumerate() {
        let height = source.len();
        if height <= rows {
            let offset = rows - height;
            for (y, &code) in source.iter().enumerate() {
                grid[(col, y + offset)] = Cell::from_code(code, col, y + offset);
            }
        } else {
            let skip = height - rows;
            for (y, &code) in source.iter().skip(skip).enumerate() {
                grid[(col, y)] = Cell::from_code(code, col, y);
            }
        }
    }

    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PuyoColor;

    fn small_settings(cols: usize, rows: usize) -> Settings {
        Settings {
            cols,
            rows,
            hidden_rows: 0,
            ..Settings::default()
        }
    }

    #[test]
    fn index_is_row_major() {
        let g = Grid::uniform(0u8, 6, 13);
        assert_eq!(g.flat_index(0, 0), Some(0));
        assert_eq!(g.flat_index(5, 0), Some(5));
        assert_eq!(g.flat_index(0, 1), Some(6));
        assert_eq!(g.flat_index(5, 12), Some(77));
        assert_eq!(g.flat_index(6, 0), None);
        assert_eq!(g.flat_index(0, 13), None);
    }

    #[test]
    fn set_and_get_respect_bounds() {
        let mut g = Grid::uniform(0i32, 3, 2);
        assert!(g.set(2, 1, 7));
        assert_eq!(g.get(2, 1), Some(&7));
        assert!(!g.set(3, 0, 1));
        assert_eq!(g.get(0, 2), None);

        g.fill(4);
        assert!(g.iter().all(|&v| v == 4));
    }

    #[test]
    fn column_iterates_top_to_bottom() {
        let g = Grid::from_fn(3, 4, |c, r| c * 10 + r);
        let col: Vec<_> = g.column(1).copied().collect();
        assert_eq!(col, vec![10, 11, 12, 13]);
        assert_eq!(g.column(3).count(), 0);
    }

    #[test]
    fn neighbors_skip_edges() {
        let g = Grid::uniform((), 3, 3);
        assert_eq!(g.neighbors(1, 1).len(), 4);
        let corner = g.neighbors(0, 0);
        assert_eq!(corner.len(), 2);
        assert_eq!(corner[0], (Connections::RIGHT, 1, 0));
        assert_eq!(corner[1], (Connections::DOWN, 0, 1));
    }

    #[test]
    fn transpose_swaps_axes() {
        let m = vec![vec![1, 2, 3], vec![4, 5, 6]];
        assert_eq!(transpose(&m), vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
        assert!(transpose::<u8>(&[]).is_empty());
    }

    #[test]
    fn coerce_short_input_aligns_to_bottom() {
        let input = matrix_from_rows(&["RG", "BY"]);
        let grid = coerce_matrix(&input, &small_settings(3, 4));
        assert_eq!(grid.rows_text(), vec!["000", "000", "RG0", "BY0"]);
        assert_eq!(grid[(1, 3)].row, 3);
        assert_eq!(grid[(1, 3)].column, 1);
    }

    #[test]
    fn coerce_tall_input_keeps_bottom_rows() {
        let input = matrix_from_rows(&["R", "G", "B", "Y"]);
        let grid = coerce_matrix(&input, &small_settings(1, 2));
        assert_eq!(grid.rows_text(), vec!["B", "Y"]);
        assert_eq!(grid[(0, 0)].row, 0);
    }

    #[test]
    fn coerce_drops_extra_columns_and_unknown_codes() {
        let input = matrix_from_rows(&["R?GB"]);
        let grid = coerce_matrix(&input, &small_settings(3, 1));
        assert_eq!(grid[(0, 0)].color, PuyoColor::Red);
        assert!(grid[(1, 0)].is_empty());
        assert_eq!(grid[(2, 0)].color, PuyoColor::Green);
        assert_eq!(grid.cols(), 3);
    }

    #[test]
    fn rebuild_from_string_is_column_major() {
        let settings = small_settings(2, 3);
        let m = rebuild_matrix_from_string("RGBY", &settings);
        assert_eq!(m, vec![vec!['R', 'G', 'B'], vec!['Y', '0', '0']]);
        assert_eq!(matrix_to_string(&m), "RGBY00");
    }
}
