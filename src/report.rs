//! Line-delimited JSON records for resolved chains.
//!
//! One [`StepRecord`] is written per engine step, followed by a single
//! [`SummaryRecord`]. Boards are row strings, top row first.

use serde::{Deserialize, Serialize};

use crate::core::{ChainReport, ChainSnapshot, LinkScore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepType {
    #[serde(rename = "step")]
    Step,
}

impl Default for StepType {
    fn default() -> Self {
        Self::Step
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SummaryType {
    #[serde(rename = "summary")]
    Summary,
}

impl Default for SummaryType {
    fn default() -> Self {
        Self::Summary
    }
}

/// Score breakdown of the link popped in a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub group_bonus: u32,
    pub color_bonus: u32,
    pub chain_power: u32,
    pub bonus_multiplier: u32,
    pub cleared: u32,
    pub puyo_multiplier: u32,
    pub score: u32,
}

impl From<LinkScore> for LinkRecord {
    fn from(link: LinkScore) -> Self {
        Self {
            group_bonus: link.group_bonus,
            color_bonus: link.color_bonus,
            chain_power: link.chain_power,
            bonus_multiplier: link.bonus_multiplier,
            cleared: link.cleared,
            puyo_multiplier: link.puyo_multiplier,
            score: link.score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    #[serde(rename = "type")]
    #[serde(default)]
    pub record_type: StepType,
    pub step: u32,
    /// Work due on the next step: `idle`, `dropping` or `popping`
    pub phase: String,
    pub popped: bool,
    pub dropped: bool,
    pub chain_length: u32,
    pub link_score: u32,
    pub total_score: u32,
    pub link_garbage: u32,
    pub total_garbage: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<LinkRecord>,
    pub board: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    #[serde(rename = "type")]
    #[serde(default)]
    pub record_type: SummaryType,
    pub steps: usize,
    pub pops: usize,
    pub chain_length: u32,
    pub total_score: u32,
    pub total_garbage: u32,
    pub board: Vec<String>,
}

pub fn build_step_record(snap: &ChainSnapshot) -> StepRecord {
    StepRecord {
        record_type: StepType::Step,
        step: snap.step,
        phase: snap.phase.as_str().to_string(),
        popped: snap.popped,
        dropped: snap.dropped,
        chain_length: snap.chain_length,
        link_score: snap.link_score,
        total_score: snap.total_score,
        link_garbage: snap.link_garbage,
        total_garbage: snap.total_garbage,
        link: snap.link.map(LinkRecord::from),
        board: snap.rows_text(),
    }
}

pub fn build_summary(report: &ChainReport) -> SummaryRecord {
    SummaryRecord {
        record_type: SummaryType::Summary,
        steps: report.snapshots.len(),
        pops: report.pops(),
        chain_length: report.chain_length,
        total_score: report.total_score,
        total_garbage: report.total_garbage,
        board: report
            .final_grid()
            .map(|grid| grid.rows_text())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ChainEngine, Settings};

    fn single_link_report() -> ChainReport {
        let mut rows = vec!["000000"; 12];
        rows.push("RRRR00");
        let mut engine = ChainEngine::from_rows(&rows, Settings::default());
        engine.resolve().unwrap()
    }

    #[test]
    fn step_record_serializes_type_tag() {
        let report = single_link_report();
        let record = build_step_record(&report.snapshots[0]);
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["type"], "step");
        assert_eq!(value["step"], 1);
        assert_eq!(value["popped"], true);
        assert_eq!(value["link_score"], 40);
        assert_eq!(value["link"]["cleared"], 4);
        assert_eq!(value["board"].as_array().unwrap().len(), 13);
    }

    #[test]
    fn link_is_omitted_on_steps_without_a_pop() {
        let report = single_link_report();
        let last = report.snapshots.last().unwrap();
        let line = serde_json::to_string(&build_step_record(last)).unwrap();
        assert!(!line.contains("\"link\""));
    }

    #[test]
    fn summary_matches_report() {
        let report = single_link_report();
        let summary = build_summary(&report);
        assert_eq!(summary.record_type, SummaryType::Summary);
        assert_eq!(summary.pops, 1);
        assert_eq!(summary.chain_length, 1);
        assert_eq!(summary.total_score, 40);
        assert_eq!(summary.board.last().map(String::as_str), Some("000000"));

        let parsed: SummaryRecord =
            serde_json::from_str(&serde_json::to_string(&summary).unwrap()).unwrap();
        assert_eq!(parsed, summary);
    }
}
