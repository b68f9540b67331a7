// Per-season efficiency metrics: shooting percentages and per-game rates.

use std::fmt;

use hoopstats_core::rank::{self, Ranked};
use tracing::debug;

use crate::stats::PlayerSeasonRecord;

// ---------------------------------------------------------------------------
// Zero-safe division
// ---------------------------------------------------------------------------

/// Divide, returning 0.0 when the denominator is zero or negative, or when
/// the quotient is not finite (overflowing sums, subnormal denominators).
pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator <= 0.0 {
        return 0.0;
    }
    let quotient = numerator / denominator;
    if quotient.is_finite() {
        quotient
    } else {
        0.0
    }
}

// ---------------------------------------------------------------------------
// Metric set
// ---------------------------------------------------------------------------

/// The eight derived ratios reported for every player-season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    FieldGoalPct,
    ThreePointPct,
    FreeThrowPct,
    PointsPerMinute,
    PointsPerGame,
    OverallPct,
    BlocksPerGame,
    StealsPerGame,
}

impl Metric {
    /// Every metric, in report order.
    pub const ALL: [Metric; 8] = [
        Metric::FieldGoalPct,
        Metric::ThreePointPct,
        Metric::FreeThrowPct,
        Metric::PointsPerMinute,
        Metric::PointsPerGame,
        Metric::OverallPct,
        Metric::BlocksPerGame,
        Metric::StealsPerGame,
    ];

    /// Evaluate this metric for one record.
    pub fn compute(&self, r: &PlayerSeasonRecord) -> f64 {
        match self {
            Metric::FieldGoalPct => safe_div(r.fgm, r.fga),
            Metric::ThreePointPct => safe_div(r.three_pm, r.three_pa),
            Metric::FreeThrowPct => safe_div(r.ftm, r.fta),
            Metric::PointsPerMinute => safe_div(r.points, r.minutes),
            Metric::PointsPerGame => safe_div(r.points, r.games_played),
            Metric::OverallPct => safe_div(r.fgm + r.ftm, r.fga + r.fta),
            Metric::BlocksPerGame => safe_div(r.blocks, r.games_played),
            Metric::StealsPerGame => safe_div(r.steals, r.games_played),
        }
    }

    /// Stable machine-readable key.
    pub fn key(&self) -> &'static str {
        match self {
            Metric::FieldGoalPct => "fg_pct",
            Metric::ThreePointPct => "three_pt_pct",
            Metric::FreeThrowPct => "ft_pct",
            Metric::PointsPerMinute => "points_per_minute",
            Metric::PointsPerGame => "points_per_game",
            Metric::OverallPct => "overall_pct",
            Metric::BlocksPerGame => "blocks_per_game",
            Metric::StealsPerGame => "steals_per_game",
        }
    }

    /// Human-readable name used in report titles.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::FieldGoalPct => "Field Goal Accuracy",
            Metric::ThreePointPct => "Three Point Accuracy",
            Metric::FreeThrowPct => "Free Throw Accuracy",
            Metric::PointsPerMinute => "Points Per Minute",
            Metric::PointsPerGame => "Points Per Game",
            Metric::OverallPct => "Overall Shooting Accuracy",
            Metric::BlocksPerGame => "Blocks Per Game",
            Metric::StealsPerGame => "Steals Per Game",
        }
    }

    /// Report title for a list of length `n`, e.g. "Top 100 Points Per Game".
    pub fn title(&self, n: usize) -> String {
        format!("Top {n} {}", self.label())
    }

    /// Position in [`Metric::ALL`]; variants are declared in report order.
    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Columnar batch
// ---------------------------------------------------------------------------

/// All eight metrics computed once per record, stored column-wise and
/// index-aligned with the record slice.
#[derive(Debug, Clone)]
pub struct MetricTable<'a> {
    records: &'a [PlayerSeasonRecord],
    columns: [Vec<f64>; 8],
}

impl<'a> MetricTable<'a> {
    /// Compute every metric column in a single pass over `records`.
    pub fn compute(records: &'a [PlayerSeasonRecord]) -> Self {
        let mut columns: [Vec<f64>; 8] =
            std::array::from_fn(|_| Vec::with_capacity(records.len()));
        for record in records {
            for metric in Metric::ALL {
                columns[metric.index()].push(metric.compute(record));
            }
        }
        debug!("computed {} metric columns for {} records", columns.len(), records.len());
        MetricTable { records, columns }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Values of one metric, in record order.
    pub fn column(&self, metric: Metric) -> &[f64] {
        &self.columns[metric.index()]
    }

    /// The best `n` records for `metric`, descending, ties in load order.
    pub fn top_n(&self, metric: Metric, n: usize) -> Vec<Ranked<'a, PlayerSeasonRecord>> {
        let scored = self
            .records
            .iter()
            .zip(self.column(metric).iter().copied());
        rank::top_n(scored, n)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
