//! Engine module - the chain resolution state machine
//!
//! This module ties together the grid, connectivity, gravity, garbage and
//! scoring rules. A [`ChainEngine`] owns one field and advances it one step
//! at a time:
//!
//! 1. If anything floats, apply gravity (one step).
//! 2. Otherwise, if groups qualify, pop them, score the link, clear hit
//!    garbage and apply any resulting gravity in the same step.
//! 3. Otherwise the board is quiescent and the step is a no-op.
//!
//! Every step returns a [`ChainSnapshot`].

use crate::cell::Cell;
use crate::connectivity::{self, Group, PoppingColors};
use crate::error::ChainError;
use crate::garbage;
use crate::gravity;
use crate::grid::{coerce_matrix, ColorMatrix, Grid, EMPTY_CODE};
use crate::scoring::{calculate_garbage, calculate_link_score, LinkScore};
use crate::settings::Settings;
use crate::snapshot::{ChainReport, ChainSnapshot};
use crate::types::{Phase, PuyoColor};

/// Chain simulator over one field
#[derive(Debug, Clone)]
pub struct ChainEngine {
    settings: Settings,
    /// Text board the engine was created with (for reloads)
    input: ColorMatrix,
    grid: Grid<Cell>,
    /// Rows each cell falls in the pending gravity pass; 0 = settled
    fall_distance: Grid<i32>,
    /// Field after the pending gravity pass
    dropped: Option<Grid<Cell>>,
    /// Popping neighbors touching each garbage cell
    garbage_adjacency: Grid<u8>,
    popping_groups: Vec<Group>,
    popping_colors: PoppingColors,
    chain_length: u32,
    link: Option<LinkScore>,
    link_score: u32,
    total_score: u32,
    link_garbage: u32,
    total_garbage: u32,
    leftover_nuisance: f64,
    has_pops: bool,
    has_drops: bool,
    phase: Phase,
    /// Steps taken since the board was loaded
    steps: u32,
}

impl ChainEngine {
    /// Create an engine over an all-Empty field
    pub fn new(settings: Settings) -> Self {
        let input = vec![vec![EMPTY_CODE; settings.rows]; settings.cols];
        Self::from_matrix(input, settings)
    }

    /// Create an engine over a text board (columns of color codes)
    ///
    /// The board is coerced to the field size in `settings`.
    pub fn from_matrix(input: ColorMatrix, settings: Settings) -> Self {
        let (cols, rows) = (settings.cols, settings.rows);
        let grid = coerce_matrix(&input, &settings);

        let mut engine = Self {
            settings,
            input,
            grid,
            fall_distance: Grid::uniform(0, cols, rows),
            dropped: None,
            garbage_adjacency: Grid::uniform(0, cols, rows),
            popping_groups: Vec::new(),
            popping_colors: PoppingColors::new(),
            chain_length: 0,
            link: None,
            link_score: 0,
            total_score: 0,
            link_garbage: 0,
            total_garbage: 0,
            leftover_nuisance: 0.0,
            has_pops: false,
            has_drops: false,
            phase: Phase::Idle,
            steps: 0,
        };
        engine.mark_connections();
        engine.phase = engine.pending_phase();
        engine
    }

    /// Create an engine from row strings given top to bottom
    pub fn from_rows<S: AsRef<str>>(rows: &[S], settings: Settings) -> Self {
        Self::from_matrix(crate::grid::matrix_from_rows(rows), settings)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn grid(&self) -> &Grid<Cell> {
        &self.grid
    }

    /// Color at (column, row), `None` if out of bounds
    pub fn color_at(&self, col: usize, row: usize) -> Option<PuyoColor> {
        self.grid.get(col, row).map(|c| c.color)
    }

    pub fn fall_distances(&self) -> &Grid<i32> {
        &self.fall_distance
    }

    pub fn garbage_adjacency(&self) -> &Grid<u8> {
        &self.garbage_adjacency
    }

    pub fn popping_groups(&self) -> &[Group] {
        &self.popping_groups
    }

    pub fn popping_colors(&self) -> &[PuyoColor] {
        &self.popping_colors
    }

    pub fn chain_length(&self) -> u32 {
        self.chain_length
    }

    /// Score breakdown of the link currently being resolved
    pub fn link(&self) -> Option<LinkScore> {
        self.link
    }

    pub fn link_score(&self) -> u32 {
        self.link_score
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    pub fn link_garbage(&self) -> u32 {
        self.link_garbage
    }

    pub fn total_garbage(&self) -> u32 {
        self.total_garbage
    }

    pub fn leftover_nuisance(&self) -> f64 {
        self.leftover_nuisance
    }

    pub fn has_pops(&self) -> bool {
        self.has_pops
    }

    pub fn has_drops(&self) -> bool {
        self.has_drops
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn steps_taken(&self) -> u32 {
        self.steps
    }

    /// Current colors as a column-major text board
    pub fn matrix_text(&self) -> ColorMatrix {
        self.grid.to_text()
    }

    /// Recompute the connection mask of every cell
    pub fn mark_connections(&mut self) {
        connectivity::mark_connections(
            &mut self.grid,
            &self.fall_distance,
            self.settings.hidden_rows,
        );
    }

    /// Detect the groups that qualify to pop and record their colors
    pub fn find_popping_groups(&mut self) -> &[Group] {
        let groups = connectivity::find_groups(
            &self.grid,
            self.settings.hidden_rows,
            self.settings.group_minimum,
        );
        self.popping_colors = connectivity::distinct_colors(&self.grid, &groups);
        self.has_pops = !groups.is_empty();
        self.popping_groups = groups;
        self.mark_connections();
        &self.popping_groups
    }

    /// Check whether any cell has empty space below it
    pub fn has_any_drop(&mut self) -> bool {
        self.has_drops = connectivity::has_any_drop(&self.grid);
        self.has_drops
    }

    /// Determine how far each floating cell needs to drop
    pub fn calculate_drop_distances(&mut self) {
        let plan = gravity::calculate_drops(&mut self.grid);
        self.fall_distance = plan.distances;
        self.dropped = Some(plan.dropped);
        self.mark_connections();
    }

    /// Count popping neighbors around every garbage cell
    pub fn mark_garbage_adjacency(&mut self) {
        garbage::mark_garbage_adjacency(
            &self.grid,
            &self.popping_groups,
            &self.settings,
            &mut self.garbage_adjacency,
        );
    }

    /// Score the current popping groups as the `chain_length`-th link
    pub fn calculate_link_score(&mut self) -> LinkScore {
        let sizes: Vec<usize> = self.popping_groups.iter().map(Vec::len).collect();
        let link = calculate_link_score(
            &sizes,
            self.popping_colors.len(),
            self.chain_length,
            &self.settings,
        );
        self.link = Some(link);
        self.link_score = link.score;
        self.total_score = self.total_score.saturating_add(link.score);
        link
    }

    /// Convert the link score into garbage, carrying the remainder
    pub fn calculate_garbage(&mut self) -> u32 {
        let result = calculate_garbage(
            self.link_score,
            self.settings.target_point,
            self.leftover_nuisance,
        );
        self.leftover_nuisance = result.leftover;
        self.link_garbage = result.garbage;
        self.total_garbage = self.total_garbage.saturating_add(result.garbage);
        result.garbage
    }

    /// Clear every cell of the popping groups
    fn pop_groups(&mut self) {
        for &(col, row) in self.popping_groups.iter().flatten() {
            self.grid[(col, row)].color = PuyoColor::Empty;
        }
    }

    fn pop_garbage(&mut self) {
        garbage::clear_garbage(&mut self.grid, &self.garbage_adjacency);
    }

    /// Replace the field with the calculated drop result
    fn drop_cells(&mut self) {
        if let Some(dropped) = self.dropped.take() {
            self.grid = dropped;
        }
    }

    /// Reset the per-link scratch state
    fn refresh_link_data(&mut self) {
        self.popping_groups.clear();
        self.popping_colors.clear();
        self.link = None;
        self.link_score = 0;
        self.link_garbage = 0;
        self.fall_distance.fill(0);
        self.garbage_adjacency.fill(0);
        self.dropped = None;
    }

    /// Stamp every cell with its current coordinate
    fn refresh_positions(&mut self) {
        for row in 0..self.grid.rows() {
            for col in 0..self.grid.cols() {
                self.grid[(col, row)].restamp(col, row);
            }
        }
        self.fall_distance.fill(0);
    }

    /// Apply gravity to the whole field
    fn apply_drop(&mut self) {
        self.calculate_drop_distances();
        self.drop_cells();
        self.refresh_link_data();
        self.refresh_positions();
        self.mark_connections();
        self.has_drops = false;
    }

    /// The work due on the next step, derived from the field
    pub fn pending_phase(&self) -> Phase {
        if connectivity::has_any_drop(&self.grid) {
            Phase::Dropping
        } else if !connectivity::find_groups(
            &self.grid,
            self.settings.hidden_rows,
            self.settings.group_minimum,
        )
        .is_empty()
        {
            Phase::Popping
        } else {
            Phase::Idle
        }
    }

    /// Advance the chain by one step
    pub fn step(&mut self) -> ChainSnapshot {
        let mut dropped = false;
        let mut popped = false;
        let mut link = None;
        let mut link_garbage = 0;

        if self.has_any_drop() {
            self.apply_drop();
            dropped = true;
        } else {
            self.find_popping_groups();
            if self.has_pops {
                self.chain_length += 1;
                self.mark_garbage_adjacency();
                link = Some(self.calculate_link_score());
                link_garbage = self.calculate_garbage();
                self.pop_groups();
                self.pop_garbage();
                self.refresh_link_data();
                self.has_pops = false;
                popped = true;

                if self.has_any_drop() {
                    self.apply_drop();
                    dropped = true;
                } else {
                    self.mark_connections();
                }
            }
        }

        self.steps += 1;
        self.phase = self.pending_phase();

        ChainSnapshot {
            step: self.steps,
            phase: self.phase,
            grid: self.grid.clone(),
            chain_length: self.chain_length,
            link,
            link_score: link.map_or(0, |l| l.score),
            total_score: self.total_score,
            link_garbage,
            total_garbage: self.total_garbage,
            popped,
            dropped,
        }
    }

    /// Iterate over steps until (and including) the first no-op step
    pub fn steps(&mut self) -> Steps<'_> {
        Steps {
            engine: self,
            finished: false,
        }
    }

    /// Resolve the whole chain within the default step budget
    pub fn resolve(&mut self) -> Result<ChainReport, ChainError> {
        self.resolve_within(self.settings.step_budget())
    }

    /// Resolve the whole chain, failing if `budget` steps do not reach a
    /// quiescent board
    pub fn resolve_within(&mut self, budget: usize) -> Result<ChainReport, ChainError> {
        let mut snapshots = Vec::new();
        for _ in 0..budget {
            let snapshot = self.step();
            let finished = !snapshot.performed_work();
            snapshots.push(snapshot);
            if finished {
                return Ok(ChainReport {
                    snapshots,
                    chain_length: self.chain_length,
                    total_score: self.total_score,
                    total_garbage: self.total_garbage,
                });
            }
        }
        Err(ChainError::StepBudgetExceeded { budget })
    }

    /// Forget all chain progress (scores, garbage, chain length)
    pub fn reset_chain(&mut self) {
        self.refresh_link_data();
        self.chain_length = 0;
        self.total_score = 0;
        self.total_garbage = 0;
        self.leftover_nuisance = 0.0;
        self.has_pops = false;
        self.has_drops = false;
        self.steps = 0;
    }

    /// Load a different text board, coerced to the current field size
    ///
    /// Starts a new chain; the original input is kept for
    /// [`reload_input`](Self::reload_input).
    pub fn replace_matrix(&mut self, matrix: &[Vec<char>]) {
        self.grid = coerce_matrix(matrix, &self.settings);
        self.reset_chain();
        self.mark_connections();
        self.phase = self.pending_phase();
    }

    /// Restore the board the engine was created with and start over
    pub fn reload_input(&mut self) {
        let input = self.input.clone();
        self.replace_matrix(&input);
    }
}

impl Default for ChainEngine {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

/// Step iterator returned by [`ChainEngine::steps`]
///
/// Yields one snapshot per step and stops after the first step that did
/// nothing.
pub struct Steps<'a> {
    engine: &'a mut ChainEngine,
    finished: bool,
}

impl Iterator for Steps<'_> {
    type Item = ChainSnapshot;

    fn next(&mut self) -> Option<ChainSnapshot> {
        if self.finished {
            return None;
        }
        let snapshot = self.engine.step();
        self.finished = !snapshot.performed_work();
        Some(snapshot)
    }
}
