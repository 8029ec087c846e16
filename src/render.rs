//! Plain-text board rendering for the CLI.
//!
//! Pure functions; nothing here writes to stdout.

use crate::core::{Cell, ChainSnapshot, Grid};

/// Glyph used for Empty cells.
pub const EMPTY_GLYPH: char = '.';

/// Render a field as bordered rows, top row first.
///
/// A dashed separator is drawn below the hidden rows.
pub fn render_board(grid: &Grid<Cell>, hidden_rows: usize) -> Vec<String> {
    let mut lines = Vec::with_capacity(grid.rows() + 2);
    let separator = format!("+{}+", "-".repeat(grid.cols()));
    let hidden_separator = format!("+{}+", "~".repeat(grid.cols()));

    lines.push(separator.clone());
    for row in 0..grid.rows() {
        if hidden_rows > 0 && row == hidden_rows {
            lines.push(hidden_separator.clone());
        }
        let body: String = (0..grid.cols())
            .map(|col| {
                let cell = &grid[(col, row)];
                if cell.is_empty() {
                    EMPTY_GLYPH
                } else {
                    cell.code()
                }
            })
            .collect();
        lines.push(format!("|{}|", body));
    }
    lines.push(separator);
    lines
}

/// Status lines printed under each rendered step
pub fn status_lines(snap: &ChainSnapshot) -> [String; 3] {
    let action = match (snap.popped, snap.dropped) {
        (true, true) => "POP+DROP",
        (true, false) => "POP",
        (false, true) => "DROP",
        (false, false) => "IDLE",
    };

    [
        format!("STEP {} {} NEXT {}", snap.step, action, snap.phase.as_str()),
        format!(
            "CHAIN {} LINK {} SCORE {}",
            snap.chain_length, snap.link_score, snap.total_score
        ),
        format!(
            "GARBAGE {} TOTAL {}",
            snap.link_garbage, snap.total_garbage
        ),
    ]
}

/// Board plus status lines for one step
pub fn render_step(snap: &ChainSnapshot, hidden_rows: usize) -> Vec<String> {
    let mut lines = render_board(&snap.grid, hidden_rows);
    lines.extend(status_lines(snap));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{coerce_matrix, matrix_from_rows, ChainEngine, Settings};

    #[test]
    fn board_marks_hidden_rows() {
        let settings = Settings {
            cols: 3,
            rows: 3,
            hidden_rows: 1,
            ..Settings::default()
        };
        let grid = coerce_matrix(&matrix_from_rows(&["000", "R00", "RGL"]), &settings);
        assert_eq!(
            render_board(&grid, 1),
            vec!["+---+", "|...|", "+~~~+", "|R..|", "|RGL|", "+---+"]
        );
    }

    #[test]
    fn no_hidden_separator_without_hidden_rows() {
        let grid = Grid::empty_cells(2, 2);
        assert_eq!(render_board(&grid, 0), vec!["+--+", "|..|", "|..|", "+--+"]);
    }

    #[test]
    fn status_reports_step_action() {
        let mut rows = vec!["000000"; 12];
        rows.push("RRRR00");
        let mut engine = ChainEngine::from_rows(&rows, Settings::default());
        let snap = engine.step();
        let lines = status_lines(&snap);
        assert_eq!(lines[0], "STEP 1 POP NEXT idle");
        assert_eq!(lines[1], "CHAIN 1 LINK 40 SCORE 40");
        assert_eq!(lines[2], "GARBAGE 0 TOTAL 0");
    }
}
