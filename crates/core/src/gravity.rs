//! Gravity module - drop distances around Block shelves
//!
//! Each column is cut into slices at every Block cell. Inside a slice all
//! Empty cells move to the top and everything else sinks to the slice
//! floor, keeping relative order. Blocks never move.

use crate::cell::Cell;
use crate::grid::Grid;

/// Result of a gravity evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropPlan {
    /// Rows each cell travels, indexed by its starting coordinate
    pub distances: Grid<i32>,
    /// The field after the drop; cells still carry their old coordinates
    pub dropped: Grid<Cell>,
}

/// Source rows of `col` in their post-gravity order
fn settle_column(grid: &Grid<Cell>, col: usize) -> Vec<usize> {
    let rows = grid.rows();
    let mut arrangement = Vec::with_capacity(rows);
    let mut start = 0;

    for row in 0..=rows {
        let is_shelf = row < rows && grid[(col, row)].is_block();
        if row == rows || is_shelf {
            let (empty, filled): (Vec<usize>, Vec<usize>) =
                (start..row).partition(|&r| grid[(col, r)].is_empty());
            arrangement.extend(empty);
            arrangement.extend(filled);
            if is_shelf {
                arrangement.push(row);
            }
            start = row + 1;
        }
    }

    arrangement
}

/// Work out where every cell lands and stamp its `fall_target`
pub fn calculate_drops(grid: &mut Grid<Cell>) -> DropPlan {
    let (cols, rows) = (grid.cols(), grid.rows());
    let mut distances = Grid::uniform(0i32, cols, rows);
    let mut dropped = grid.clone();

    for col in 0..cols {
        for (new_row, source_row) in settle_column(grid, col).into_iter().enumerate() {
            grid[(col, source_row)].fall_target = new_row;
            distances[(col, source_row)] = new_row as i32 - source_row as i32;
            dropped[(col, new_row)] = grid[(col, source_row)];
        }
    }

    DropPlan { distances, dropped }
}
