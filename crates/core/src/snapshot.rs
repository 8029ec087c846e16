use crate::cell::Cell;
use crate::grid::Grid;
use crate::scoring::LinkScore;
use crate::types::Phase;

/// Point-in-time copy of an engine after one step
#[derive(Debug, Clone, PartialEq)]
pub struct ChainSnapshot {
    /// 1-based count of steps taken since the board was loaded
    pub step: u32,
    /// Work due on the next step
    pub phase: Phase,
    pub grid: Grid<Cell>,
    pub chain_length: u32,
    /// Score breakdown of the link popped in this step
    pub link: Option<LinkScore>,
    pub link_score: u32,
    pub total_score: u32,
    pub link_garbage: u32,
    pub total_garbage: u32,
    /// Groups were cleared in this step
    pub popped: bool,
    /// Gravity was applied in this step
    pub dropped: bool,
}

impl ChainSnapshot {
    /// False for the no-op step of a quiescent board
    pub fn performed_work(&self) -> bool {
        self.popped || self.dropped
    }

    pub fn rows_text(&self) -> Vec<String> {
        self.grid.rows_text()
    }
}

/// Outcome of resolving a board to quiescence
#[derive(Debug, Clone, PartialEq)]
pub struct ChainReport {
    /// One snapshot per step, ending with the no-op step
    pub snapshots: Vec<ChainSnapshot>,
    pub chain_length: u32,
    pub total_score: u32,
    pub total_garbage: u32,
}

impl ChainReport {
    /// Number of pop events recorded
    pub fn pops(&self) -> usize {
        self.snapshots.iter().filter(|s| s.popped).count()
    }

    pub fn final_grid(&self) -> Option<&Grid<Cell>> {
        self.snapshots.last().map(|s| &s.grid)
    }
}
