// Basketball domain: player-season records, the TSV loader and the metric set.

pub mod metrics;
pub mod stats;
