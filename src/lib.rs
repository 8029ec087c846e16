//! Puyo chain simulator (workspace facade crate).
//!
//! The rules live in dedicated crates under `crates/`; this package
//! re-exports them as `puyo_chainsim::{core, types}` and adds the pieces
//! that sit around the engine: CLI argument handling, text rendering,
//! line-delimited JSON records and simulator link export.

pub use puyo_chainsim_core as core;
pub use puyo_chainsim_types as types;

pub mod cli;
pub mod export;
pub mod logging;
pub mod render;
pub mod report;
