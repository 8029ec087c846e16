//! Grid tests - text boards, coercion and container helpers

use puyo_chainsim::core::grid::{matrix_to_string, transpose};
use puyo_chainsim::core::{
    coerce_matrix, matrix_from_rows, rebuild_matrix_from_string, Grid, Settings,
};
use puyo_chainsim::types::PuyoColor;

fn settings(cols: usize, rows: usize) -> Settings {
    Settings {
        cols,
        rows,
        hidden_rows: 0,
        ..Settings::default()
    }
}

#[test]
fn test_rows_become_columns() {
    let matrix = matrix_from_rows(&["RG", "BY", "J0"]);
    assert_eq!(matrix, vec![vec!['R', 'B', 'J'], vec!['G', 'Y', '0']]);
}

#[test]
fn test_ragged_rows_are_padded() {
    let matrix = matrix_from_rows(&["R", "BY"]);
    assert_eq!(matrix[1], vec!['0', 'Y']);
}

#[test]
fn test_field_string_round_trip() {
    let s = settings(2, 3);
    let matrix = rebuild_matrix_from_string("00R0GB", &s);
    assert_eq!(matrix, vec![vec!['0', '0', 'R'], vec!['0', 'G', 'B']]);
    assert_eq!(matrix_to_string(&matrix), "00R0GB");
}

#[test]
fn test_short_field_string_fills_empty() {
    let matrix = rebuild_matrix_from_string("R", &settings(2, 2));
    assert_eq!(matrix, vec![vec!['R', '0'], vec!['0', '0']]);
}

#[test]
fn test_coerce_aligns_columns_to_bottom() {
    let grid = coerce_matrix(&[vec!['R', 'G']], &settings(2, 4));

    assert_eq!(grid.cols(), 2);
    assert_eq!(grid.rows(), 4);
    assert_eq!(grid[(0, 0)].color, PuyoColor::Empty);
    assert_eq!(grid[(0, 2)].color, PuyoColor::Red);
    assert_eq!(grid[(0, 3)].color, PuyoColor::Green);
    assert!(grid.column(1).all(|c| c.is_empty()));
}

#[test]
fn test_coerce_keeps_bottom_of_tall_columns() {
    let tall = vec![vec!['R', 'G', 'B', 'Y'], vec!['P'], vec!['R']];
    let grid = coerce_matrix(&tall, &settings(2, 2));

    assert_eq!(grid.cols(), 2);
    assert_eq!(grid[(0, 0)].color, PuyoColor::Blue);
    assert_eq!(grid[(0, 1)].color, PuyoColor::Yellow);
    assert_eq!(grid[(1, 1)].color, PuyoColor::Purple);
}

#[test]
fn test_coerce_stamps_positions_and_reads_unknown_codes_as_empty() {
    let grid = coerce_matrix(&matrix_from_rows(&["X?", "RL"]), &settings(2, 2));

    assert!(grid[(0, 0)].is_empty());
    assert!(grid[(1, 0)].is_empty());
    assert!(grid[(1, 1)].is_block());
    for row in 0..2 {
        for col in 0..2 {
            assert_eq!((grid[(col, row)].column, grid[(col, row)].row), (col, row));
        }
    }
}

#[test]
fn test_transpose() {
    let t = transpose(&[vec![1, 2, 3], vec![4, 5, 6]]);
    assert_eq!(t, vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
}

#[test]
fn test_grid_bounds() {
    let mut g = Grid::uniform(0i32, 3, 2);
    assert!(g.set(2, 1, 7));
    assert!(!g.set(3, 0, 1));
    assert_eq!(g.get(2, 1), Some(&7));
    assert_eq!(g.get(0, 2), None);

    g.fill(-1);
    assert!(g.iter().all(|&v| v == -1));
    assert_eq!(g.to_columns(), vec![vec![-1, -1]; 3]);
}

#[test]
fn test_rows_text_matches_input() {
    let rows = ["0R", "GB"];
    let grid = coerce_matrix(&matrix_from_rows(&rows), &settings(2, 2));
    assert_eq!(grid.rows_text(), vec!["0R", "GB"]);
}
