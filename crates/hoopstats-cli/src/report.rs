// Rendering of the ranked lists to the console and to the report file.
//
// File layout: one block per metric, a title line followed by
// `player<TAB>season<TAB>value` rows, blocks separated by a blank line.

use std::io::{self, Write};
use std::path::Path;

use hoopstats_basketball::metrics::{Metric, MetricTable};
use hoopstats_basketball::stats::PlayerSeasonRecord;
use hoopstats_core::rank::Ranked;
use tracing::{debug, info};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One titled, ranked list for a single metric.
#[derive(Debug, Clone)]
pub struct RankedList<'a> {
    pub metric: Metric,
    pub title: String,
    pub entries: Vec<Ranked<'a, PlayerSeasonRecord>>,
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to write report {path}: {source}")]
    Write {
        path: String,
        source: io::Error,
    },
}

// ---------------------------------------------------------------------------
// Building
// ---------------------------------------------------------------------------

/// Rank every metric in report order and keep the best `top_n` of each.
pub fn build_ranked_lists<'a>(table: &MetricTable<'a>, top_n: usize) -> Vec<RankedList<'a>> {
    Metric::ALL
        .iter()
        .map(|&metric| {
            let entries = table.top_n(metric, top_n);
            debug!("{}: {} entries", metric.key(), entries.len());
            RankedList {
                metric,
                title: metric.title(top_n),
                entries,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Shortest text that parses back to the same value; integral values keep a
/// trailing `.0`.
pub fn format_value(value: f64) -> String {
    format!("{value:?}")
}

/// Console rendering: each list preceded by a blank line and its title,
/// fields separated by spaces.
pub fn render_console<W: Write>(out: &mut W, lists: &[RankedList<'_>]) -> io::Result<()> {
    for list in lists {
        writeln!(out)?;
        writeln!(out, "{}", list.title)?;
        for entry in &list.entries {
            writeln!(
                out,
                "{} {} {}",
                entry.item.player,
                entry.item.season,
                format_value(entry.value)
            )?;
        }
    }
    out.flush()
}

/// One file block: the title followed by tab-separated rows.
pub fn format_list(list: &RankedList<'_>) -> String {
    let mut lines = Vec::with_capacity(list.entries.len() + 1);
    lines.push(list.title.clone());
    for entry in &list.entries {
        lines.push(format!(
            "{}\t{}\t{}",
            entry.item.player,
            entry.item.season,
            format_value(entry.value)
        ));
    }
    lines.join("\n")
}

/// The whole report file body. No trailing newline.
pub fn render_file(lists: &[RankedList<'_>]) -> String {
    lists
        .iter()
        .map(format_list)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Write the report file, replacing any existing one.
pub fn write_report(path: &Path, lists: &[RankedList<'_>]) -> Result<(), ReportError> {
    let body = render_file(lists);
    std::fs::write(path, body.as_bytes()).map_err(|e| ReportError::Write {
        path: path.display().to_string(),
        source: e,
    })?;
    info!("Wrote {} lists to {}", lists.len(), path.display());
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
