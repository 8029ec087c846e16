//! Garbage module - adjacency counting and clearing of garbage cells

use crate::cell::Cell;
use crate::connectivity::Group;
use crate::grid::Grid;
use crate::settings::{GarbageHiddenRowRule, Settings};
use crate::types::{Connections, PuyoColor};

/// Count, for every garbage-class cell, how many popping cells touch it
///
/// The upward check depends on [`GarbageHiddenRowRule`]: Sega lets a pop in
/// the first visible row hit garbage in the last hidden row, Compile only
/// hits garbage that is itself visible.
pub fn mark_garbage_adjacency(
    grid: &Grid<Cell>,
    groups: &[Group],
    settings: &Settings,
    adjacency: &mut Grid<u8>,
) {
    adjacency.fill(0);

    let lowest_up_source = match settings.garbage_hidden_row_rule {
        GarbageHiddenRowRule::Sega => settings.hidden_rows,
        GarbageHiddenRowRule::Compile => settings.hidden_rows + 1,
    };

    for &(col, row) in groups.iter().flatten() {
        for (dir, nc, nr) in grid.neighbors(col, row) {
            if dir == Connections::UP && row < lowest_up_source {
                continue;
            }
            if grid[(nc, nr)].is_garbage() {
                adjacency[(nc, nr)] = adjacency[(nc, nr)].saturating_add(1);
            }
        }
    }
}

/// Apply one link's hits to the garbage cells
///
/// One hit clears plain garbage and downgrades hard garbage; two or more
/// hits clear either kind.
pub fn clear_garbage(grid: &mut Grid<Cell>, adjacency: &Grid<u8>) {
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let hits = adjacency.get(col, row).copied().unwrap_or(0);
            let cell = &mut grid[(col, row)];
            match (hits, cell.color) {
                (0, _) => {}
                (1, PuyoColor::Garbage) => cell.color = PuyoColor::Empty,
                (1, PuyoColor::Hard) => cell.color = PuyoColor::Garbage,
                (_, color) if hits >= 2 && color.is_garbage() => cell.color = PuyoColor::Empty,
                _ => {}
            }
        }
    }
}
