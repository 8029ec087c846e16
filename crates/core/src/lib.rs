//! Chain resolution core - pure, deterministic, and testable
//!
//! This crate contains every rule of chain resolution for a falling-block
//! matching puzzle: grouping, gravity around Block shelves, garbage
//! clearing and link scoring, driven by a step state machine. It has no
//! dependencies on rendering, networking or I/O beyond reading a settings
//! file, which makes it:
//!
//! - **Deterministic**: the same board and settings always resolve the same way
//! - **Testable**: every rule is a plain function over a [`Grid`]
//! - **Portable**: runs headless, in a CLI, or behind any presentation layer
//!
//! # Module Structure
//!
//! - [`cell`]: one field position (color, coordinates, connection mask)
//! - [`grid`]: 2-D containers, text board import/export and shape coercion
//! - [`settings`]: the immutable rule set, loadable from JSON
//! - [`connectivity`]: connection masks, group detection, drop detection
//! - [`gravity`]: drop distances with Block-partitioned columns
//! - [`garbage`]: garbage adjacency counting and clearing
//! - [`scoring`]: link score and garbage generation
//! - [`engine`]: the [`ChainEngine`] step/resolve state machine
//! - [`snapshot`]: per-step snapshots and full-chain reports
//!
//! # Example
//!
//! ```
//! use puyo_chainsim_core::{ChainEngine, Settings};
//!
//! let mut rows = vec!["000000"; 12];
//! rows.push("RRRR00");
//!
//! let mut engine = ChainEngine::from_rows(&rows, Settings::default());
//! let report = engine.resolve().unwrap();
//!
//! assert_eq!(report.chain_length, 1);
//! assert_eq!(report.total_score, 40);
//! ```

pub mod cell;
pub mod connectivity;
pub mod engine;
pub mod error;
pub mod garbage;
pub mod gravity;
pub mod grid;
pub mod scoring;
pub mod settings;
pub mod snapshot;

pub use puyo_chainsim_types as types;

pub use cell::Cell;
pub use connectivity::Group;
pub use engine::{ChainEngine, Steps};
pub use error::{ChainError, SettingsError};
pub use grid::{coerce_matrix, matrix_from_rows, rebuild_matrix_from_string, ColorMatrix, Grid};
pub use scoring::{calculate_garbage, calculate_link_score, GarbageResult, LinkScore};
pub use settings::{GarbageHiddenRowRule, Settings};
pub use snapshot::{ChainReport, ChainSnapshot};
