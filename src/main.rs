//! Puyo chain simulator (default binary).
//!
//! Loads a board and rule settings, resolves the chain and prints every
//! step either as a text board or as line-delimited JSON.

use std::io::{self, Write};

use anyhow::{anyhow, Result};
use clap::Parser;

use puyo_chainsim::cli::Cli;
use puyo_chainsim::core::{ChainEngine, ChainReport, ChainSnapshot};
use puyo_chainsim::export::puyo_nexus_url;
use puyo_chainsim::logging::enable_verbose_logging;
use puyo_chainsim::render::render_step;
use puyo_chainsim::report::{build_step_record, build_summary};
use puyo_chainsim::vlog;

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        enable_verbose_logging();
    }

    let settings = cli.load_settings()?;
    vlog!(
        "settings: {}x{} hidden={} minimum={} target={} rule={}",
        settings.cols,
        settings.rows,
        settings.hidden_rows,
        settings.group_minimum,
        settings.target_point,
        settings.garbage_hidden_row_rule.as_str()
    );

    let matrix = cli.load_board(&settings)?;
    let hidden_rows = settings.hidden_rows;
    let budget = cli.budget.unwrap_or_else(|| settings.step_budget());
    let mut engine = ChainEngine::from_matrix(matrix, settings);
    vlog!("loaded board, next phase {}", engine.phase().as_str());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.nexus {
        writeln!(out, "{}", puyo_nexus_url(&engine.matrix_text(), engine.settings()))?;
    }

    let report = match cli.steps {
        Some(limit) => {
            let snapshots: Vec<ChainSnapshot> = engine.steps().take(limit).collect();
            vlog!("took {} of at most {} steps", snapshots.len(), limit);
            ChainReport {
                snapshots,
                chain_length: engine.chain_length(),
                total_score: engine.total_score(),
                total_garbage: engine.total_garbage(),
            }
        }
        None => engine
            .resolve_within(budget)
            .map_err(|e| anyhow!("resolve: {}", e))?,
    };

    for snap in &report.snapshots {
        emit_step(&mut out, snap, hidden_rows, cli.json)?;
    }
    emit_summary(&mut out, &report, cli.json)?;
    out.flush()?;

    vlog!(
        "done: {} steps, chain {}, score {}, garbage {}",
        report.snapshots.len(),
        report.chain_length,
        report.total_score,
        report.total_garbage
    );
    Ok(())
}

fn emit_step(out: &mut impl Write, snap: &ChainSnapshot, hidden_rows: usize, json: bool) -> Result<()> {
    if json {
        let line = serde_json::to_string(&build_step_record(snap))?;
        writeln!(out, "{}", line)?;
        return Ok(());
    }
    for line in render_step(snap, hidden_rows) {
        writeln!(out, "{}", line)?;
    }
    writeln!(out)?;
    Ok(())
}

fn emit_summary(out: &mut impl Write, report: &ChainReport, json: bool) -> Result<()> {
    if json {
        let line = serde_json::to_string(&build_summary(report))?;
        writeln!(out, "{}", line)?;
        return Ok(());
    }
    writeln!(
        out,
        "CHAIN {} SCORE {} GARBAGE {} ({} pops over {} steps)",
        report.chain_length,
        report.total_score,
        report.total_garbage,
        report.pops(),
        report.snapshots.len()
    )?;
    Ok(())
}
