//! Command-line arguments and input loading for the `puyo-chainsim` binary.

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;

use crate::core::{matrix_from_rows, rebuild_matrix_from_string, ColorMatrix, Settings};

#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "puyo-chainsim")]
#[command(about = "Resolve a puyo board step by step and report score and garbage")]
pub struct Cli {
    /// Board file: one row of cell codes per line, top row first
    #[arg(long, value_name = "FILE")]
    pub board: Option<PathBuf>,

    /// One row of cell codes; repeat top to bottom
    #[arg(long = "row", value_name = "CODES")]
    pub rows: Vec<String>,

    /// Column-major field string of `cols * rows` codes
    #[arg(long, value_name = "CODES")]
    pub field: Option<String>,

    /// JSON rule settings; missing keys take their defaults
    #[arg(long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Take at most N single steps instead of resolving the whole chain
    #[arg(long, value_name = "N")]
    pub steps: Option<usize>,

    /// Step budget for a full resolution
    #[arg(long, value_name = "N")]
    pub budget: Option<usize>,

    /// Emit line-delimited JSON records instead of text boards
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Print the Puyo Nexus simulator link of the input board
    #[arg(long, default_value_t = false)]
    pub nexus: bool,

    /// Diagnostic logging on stderr
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    pub fn load_settings(&self) -> Result<Settings> {
        let settings = match &self.settings {
            Some(path) => Settings::load(path)
                .map_err(|e| anyhow!("settings: {}: {}", path.display(), e))?,
            None => Settings::default(),
        };
        settings
            .validate()
            .map_err(|e| anyhow!("settings: {}", e))?;
        Ok(settings)
    }

    /// Read the board from whichever input flag was given.
    pub fn load_board(&self, settings: &Settings) -> Result<ColorMatrix> {
        let given = [self.board.is_some(), !self.rows.is_empty(), self.field.is_some()]
            .iter()
            .filter(|&&b| b)
            .count();
        if given > 1 {
            return Err(anyhow!(
                "board: --board, --row and --field are mutually exclusive"
            ));
        }

        if let Some(path) = &self.board {
            let text = fs::read_to_string(path)
                .map_err(|e| anyhow!("board: read {} failed: {}", path.display(), e))?;
            let rows = parse_board_text(&text);
            if rows.is_empty() {
                return Err(anyhow!("board: {} has no rows", path.display()));
            }
            return Ok(matrix_from_rows(&rows));
        }
        if !self.rows.is_empty() {
            return Ok(matrix_from_rows(&self.rows));
        }
        if let Some(field) = &self.field {
            return Ok(rebuild_matrix_from_string(field.trim(), settings));
        }
        Err(anyhow!("board: no input given (use --board, --row or --field)"))
    }
}

/// Board rows from a text file. Blank lines and `#` comments are skipped.
pub fn parse_board_text(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
