// One run of the batch: load, compute, rank, render, write.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use hoopstats_basketball::metrics::MetricTable;
use hoopstats_basketball::stats;
use hoopstats_core::config::Config;
use tracing::info;

use crate::report;

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub records: usize,
    pub lists: usize,
    pub output_path: PathBuf,
}

/// Execute the pipeline for `config`, echoing the lists to `console` and then
/// writing the report file. Any failure aborts the run.
pub fn run<W: Write>(config: &Config, console: &mut W) -> anyhow::Result<RunSummary> {
    let records = stats::load_records(&config.input_path)
        .context("failed to load player-season records")?;

    let table = MetricTable::compute(&records);
    let lists = report::build_ranked_lists(&table, config.top_n);
    info!("Ranked {} metrics over {} records", lists.len(), table.len());

    report::render_console(console, &lists).context("failed to write console report")?;
    report::write_report(&config.output_path, &lists).context("failed to write report file")?;

    Ok(RunSummary {
        records: records.len(),
        lists: lists.len(),
        output_path: config.output_path.clone(),
    })
}
