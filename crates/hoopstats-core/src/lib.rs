// Shared building blocks: run configuration and top-N ranking.

pub mod config;
pub mod rank;
