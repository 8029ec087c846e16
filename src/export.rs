//! Export of boards to the Puyo Nexus chain simulator.

use crate::core::Settings;

const NEXUS_BASE_URL: &str = "https://puyonexus.com/chainsim/";

/// Digit the Nexus simulator uses for a cell code.
///
/// Codes the simulator has no piece for are exported as empty.
pub fn nexus_digit(code: char) -> char {
    match code.to_ascii_uppercase() {
        'R' => '4',
        'G' => '7',
        'B' => '5',
        'Y' => '6',
        'P' => '8',
        'J' => '1',
        _ => '0',
    }
}

/// Build a Puyo Nexus simulator link for a column-major code matrix.
///
/// Cells are written row by row from the top, hidden rows included; the
/// `h` parameter only counts visible rows. Missing cells read as empty.
pub fn puyo_nexus_url(matrix: &[Vec<char>], settings: &Settings) -> String {
    let mut chain = String::with_capacity(settings.cols * settings.rows);
    for row in 0..settings.rows {
        for col in 0..settings.cols {
            let code = matrix
                .get(col)
                .and_then(|column| column.get(row))
                .copied()
                .unwrap_or('0');
            chain.push(nexus_digit(code));
        }
    }

    format!(
        "{}?w={}&h={}&chain={}",
        NEXUS_BASE_URL,
        settings.cols,
        settings.visible_rows(),
        chain
    )
}
