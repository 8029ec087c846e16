//! Connectivity module - same-color adjacency, group detection and drop checks
//!
//! Only the visible rows (`hidden_rows..rows`) take part in connections and
//! groups. Groups are stored as `(column, row)` coordinates into the grid
//! they were found in.

use arrayvec::ArrayVec;

use crate::cell::Cell;
use crate::grid::Grid;
use crate::types::{Connections, PuyoColor};

/// A connected same-color region, as `(column, row)` coordinates
pub type Group = Vec<(usize, usize)>;

/// Distinct colors of a link, in first-occurrence order
pub type PoppingColors = ArrayVec<PuyoColor, 5>;

/// Recompute every cell's connection mask
///
/// A visible, colored, settled cell connects to each neighbor that has the
/// same color, is settled and is visible. Everything else gets no
/// connections.
pub fn mark_connections(grid: &mut Grid<Cell>, fall_distance: &Grid<i32>, hidden_rows: usize) {
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let settled = |c: usize, r: usize| fall_distance.get(c, r).map_or(true, |&d| d == 0);
            let cell = grid[(col, row)];

            let mut connections = Connections::NONE;
            if row >= hidden_rows && cell.is_colored() && settled(col, row) {
                for (dir, nc, nr) in grid.neighbors(col, row) {
                    if nr >= hidden_rows && grid[(nc, nr)].color == cell.color && settled(nc, nr) {
                        connections.insert(dir);
                    }
                }
            }
            grid[(col, row)].connections = connections;
        }
    }
}

/// Find every visible same-color region with at least `group_minimum` cells
///
/// Regions are discovered scanning columns left to right, each top to
/// bottom; the first cell of each group is the first cell of it scanned.
pub fn find_groups(grid: &Grid<Cell>, hidden_rows: usize, group_minimum: usize) -> Vec<Group> {
    let mut visited = Grid::uniform(false, grid.cols(), grid.rows());
    let mut groups = Vec::new();

    for col in 0..grid.cols() {
        for row in hidden_rows..grid.rows() {
            let color = grid[(col, row)].color;
            if !color.is_colored() || visited[(col, row)] {
                continue;
            }

            visited[(col, row)] = true;
            let mut group = vec![(col, row)];
            let mut next = 0;
            while next < group.len() {
                let (c, r) = group[next];
                next += 1;
                for (_, nc, nr) in grid.neighbors(c, r) {
                    if nr >= hidden_rows && !visited[(nc, nr)] && grid[(nc, nr)].color == color {
                        visited[(nc, nr)] = true;
                        group.push((nc, nr));
                    }
                }
            }

            if group.len() >= group_minimum {
                groups.push(group);
            }
        }
    }

    groups
}

/// Colors of `groups` with duplicates removed, keeping first occurrence
pub fn distinct_colors(grid: &Grid<Cell>, groups: &[Group]) -> PoppingColors {
    let mut colors = PoppingColors::new();
    for group in groups {
        if let Some(&(col, row)) = group.first() {
            let color = grid[(col, row)].color;
            if !colors.contains(&color) {
                colors.push(color);
            }
        }
    }
    colors
}

/// True if any non-Block, non-Empty cell has an Empty cell directly below
pub fn has_any_drop(grid: &Grid<Cell>) -> bool {
    for col in 0..grid.cols() {
        for row in 0..grid.rows().saturating_sub(1) {
            let cell = &grid[(col, row)];
            if !cell.is_block() && !cell.is_empty() && grid[(col, row + 1)].is_empty() {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{coerce_matrix, matrix_from_rows};
    use crate::settings::Settings;

    fn grid_of(rows: &[&str], hidden_rows: usize) -> Grid<Cell> {
        let settings = Settings {
            cols: rows[0].len(),
            rows: rows.len(),
            hidden_rows,
            ..Settings::default()
        };
        coerce_matrix(&matrix_from_rows(rows), &settings)
    }

    #[test]
    fn three_cells_never_qualify_four_do() {
        let g = grid_of(&["R..", "RR."], 0);
        assert!(find_groups(&g, 0, 4).is_empty());

        let g = grid_of(&["RR.", "RR."], 0);
        let groups = find_groups(&g, 0, 4);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 4);
        assert_eq!(groups[0][0], (0, 0));
    }

    #[test]
    fn hidden_rows_do_not_join_groups() {
        let g = grid_of(&["R..", "R..", "R..", "R.."], 1);
        assert!(find_groups(&g, 1, 4).is_empty());
        assert_eq!(find_groups(&g, 0, 4).len(), 1);
    }

    #[test]
    fn groups_are_ordered_column_major() {
        let g = grid_of(&["GGBB", "GGBB", "RRRR"], 0);
        let groups = find_groups(&g, 0, 4);
        assert_eq!(groups.len(), 3);
        // Column 0 is scanned top to bottom: green first, then red.
        assert_eq!(g[groups[0][0]].color, PuyoColor::Green);
        assert_eq!(g[groups[1][0]].color, PuyoColor::Red);
        assert_eq!(g[groups[2][0]].color, PuyoColor::Blue);

        let colors = distinct_colors(&g, &groups);
        assert_eq!(
            colors.as_slice(),
            &[PuyoColor::Green, PuyoColor::Red, PuyoColor::Blue]
        );
    }

    #[test]
    fn garbage_and_stones_never_group() {
        let g = grid_of(&["JJ", "JJ", "TT"], 0);
        assert!(find_groups(&g, 0, 2).is_empty());
    }

    #[test]
    fn connections_require_settled_neighbors() {
        let mut g = grid_of(&["R.", "RR"], 0);
        let mut fall = Grid::uniform(0, 2, 2);
        mark_connections(&mut g, &fall, 0);
        assert_eq!(g[(0, 0)].connections.as_string(), "d");
        assert_eq!(g[(0, 1)].connections.as_string(), "ur");
        assert_eq!(g[(1, 1)].connections.as_string(), "l");

        fall[(0, 0)] = 1;
        mark_connections(&mut g, &fall, 0);
        assert!(g[(0, 0)].connections.is_empty());
        assert_eq!(g[(0, 1)].connections.as_string(), "r");
    }

    #[test]
    fn hidden_cells_have_no_connections() {
        let mut g = grid_of(&["R", "R"], 1);
        mark_connections(&mut g, &Grid::uniform(0, 1, 2), 1);
        assert!(g[(0, 0)].connections.is_empty());
        assert!(g[(0, 1)].connections.is_empty());
    }

    #[test]
    fn drop_check_ignores_blocks() {
        assert!(has_any_drop(&grid_of(&["R", "."], 0)));
        assert!(!has_any_drop(&grid_of(&["L", "."], 0)));
        assert!(!has_any_drop(&grid_of(&[".", "R"], 0)));
        assert!(has_any_drop(&grid_of(&["T", "."], 0)));
    }
}
