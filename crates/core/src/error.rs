//! Error types for settings loading and chain resolution

use thiserror::Error;

/// A full-chain resolution that failed to reach a quiescent board
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    #[error("resolution did not terminate within {budget} steps")]
    StepBudgetExceeded { budget: usize },
}

/// Settings that violate the rule-set invariants or could not be read
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("field must have at least one column and one row (got {cols}x{rows})")]
    EmptyField { cols: usize, rows: usize },
    #[error("hidden rows ({hidden_rows}) must be fewer than total rows ({rows})")]
    HiddenRowsOutOfRange { hidden_rows: usize, rows: usize },
    #[error("group minimum must be at least 1")]
    ZeroGroupMinimum,
    #[error("target point must be at least 1")]
    ZeroTargetPoint,
    #[error("{table} table must not be empty")]
    EmptyTable { table: &'static str },
    #[error("invalid settings json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
}
