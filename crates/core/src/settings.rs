//! Settings module - the immutable rule set consumed by the chain engine
//!
//! Defaults load the modern Tsu rules. Settings deserialize from JSON with
//! every field optional, so a config file only needs the values it changes:
//!
//! ```
//! use puyo_chainsim_core::{GarbageHiddenRowRule, Settings};
//!
//! let s = Settings::from_json_str(r#"{ "group_minimum": 3, "garbage_hidden_row_rule": "compile" }"#).unwrap();
//! assert_eq!(s.group_minimum, 3);
//! assert_eq!(s.garbage_hidden_row_rule, GarbageHiddenRowRule::Compile);
//! assert_eq!(s.cols, 6);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::types::{
    CHAIN_POWER, COLOR_BONUS, DEFAULT_COLS, DEFAULT_GROUP_MINIMUM, DEFAULT_HIDDEN_ROWS,
    DEFAULT_POINT_VALUE, DEFAULT_ROWS, DEFAULT_TARGET_POINT, GROUP_BONUS,
};

/// Whether garbage resting in the last hidden row can be cleared by a pop
/// directly beneath it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GarbageHiddenRowRule {
    /// The boundary hidden row is hit by pops in the first visible row
    #[default]
    Sega,
    /// Only garbage inside the visible rows can be hit
    Compile,
}

impl GarbageHiddenRowRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            GarbageHiddenRowRule::Sega => "sega",
            GarbageHiddenRowRule::Compile => "compile",
        }
    }
}

/// Rule set for one simulated field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Total field height, hidden rows included
    pub rows: usize,
    pub cols: usize,
    /// Rows above the visible field (indices `0..hidden_rows`)
    pub hidden_rows: usize,
    /// Score needed to generate one garbage
    pub target_point: u32,
    /// Cells in one group needed to pop
    pub group_minimum: usize,
    pub garbage_hidden_row_rule: GarbageHiddenRowRule,
    pub chain_power: Vec<u32>,
    pub color_bonus: Vec<u32>,
    pub group_bonus: Vec<u32>,
    /// Value of a Point cell; reserved and not consumed by scoring
    pub point_value: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            hidden_rows: DEFAULT_HIDDEN_ROWS,
            target_point: DEFAULT_TARGET_POINT,
            group_minimum: DEFAULT_GROUP_MINIMUM,
            garbage_hidden_row_rule: GarbageHiddenRowRule::default(),
            chain_power: CHAIN_POWER.to_vec(),
            color_bonus: COLOR_BONUS.to_vec(),
            group_bonus: GROUP_BONUS.to_vec(),
            point_value: DEFAULT_POINT_VALUE,
        }
    }
}

impl Settings {
    /// Check the rule-set invariants
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.cols == 0 || self.rows == 0 {
            return Err(SettingsError::EmptyField {
                cols: self.cols,
                rows: self.rows,
            });
        }
        if self.hidden_rows >= self.rows {
            return Err(SettingsError::HiddenRowsOutOfRange {
                hidden_rows: self.hidden_rows,
                rows: self.rows,
            });
        }
        if self.group_minimum == 0 {
            return Err(SettingsError::ZeroGroupMinimum);
        }
        if self.target_point == 0 {
            return Err(SettingsError::ZeroTargetPoint);
        }
        for (table, values) in [
            ("chain power", &self.chain_power),
            ("color bonus", &self.color_bonus),
            ("group bonus", &self.group_bonus),
        ] {
            if values.is_empty() {
                return Err(SettingsError::EmptyTable { table });
            }
        }
        Ok(())
    }

    /// Parse and validate settings from JSON; absent fields keep defaults
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read, parse and validate a JSON settings file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Number of rows in the visible play area
    pub fn visible_rows(&self) -> usize {
        self.rows.saturating_sub(self.hidden_rows)
    }

    /// Upper bound on steps a full resolution can take
    ///
    /// Every pop clears at least one cell and every drop is followed by a
    /// pop or by quiescence, so twice the cell count plus the final no-op
    /// step is never exceeded by a terminating chain.
    pub fn step_budget(&self) -> usize {
        2 * self.rows * self.cols + 2
    }
}
