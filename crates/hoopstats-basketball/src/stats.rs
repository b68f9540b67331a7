// Player-season records and the tab-separated loader.
//
// Reads a TSV table with a header row. Columns are matched by name, so their
// order does not matter and extra columns are ignored.

use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

/// Header names that must be present in every input file.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "Player", "Season", "Team", "GP", "MIN", "FGM", "FGA", "3PM", "3PA", "FTM", "FTA", "BLK",
    "STL", "PTS",
];

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// One player's counting stats for one season.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSeasonRecord {
    pub player: String,
    pub season: String,
    pub team: String,
    pub games_played: f64,
    pub minutes: f64,
    pub fgm: f64,
    pub fga: f64,
    pub three_pm: f64,
    pub three_pa: f64,
    pub ftm: f64,
    pub fta: f64,
    pub blocks: f64,
    pub steals: f64,
    pub points: f64,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// A problem with the table contents.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("{0}")]
    Csv(#[from] csv::Error),

    #[error("missing required column `{0}`")]
    MissingColumn(&'static str),

    #[error("line {line}: column `{column}` is not a finite number")]
    NonFinite { line: u64, column: &'static str },
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("data format error in {path}: {source}")]
    Format { path: String, source: ParseError },
}

// ---------------------------------------------------------------------------
// Raw TSV serde struct (private)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
struct RawPlayerSeason {
    Player: String,
    Season: String,
    Team: String,
    GP: f64,
    MIN: f64,
    FGM: f64,
    FGA: f64,
    #[serde(rename = "3PM")]
    ThreePM: f64,
    #[serde(rename = "3PA")]
    ThreePA: f64,
    FTM: f64,
    FTA: f64,
    BLK: f64,
    STL: f64,
    PTS: f64,
}

impl RawPlayerSeason {
    /// Name of the first numeric column holding NaN or an infinity.
    fn first_non_finite(&self) -> Option<&'static str> {
        let numeric: [(&'static str, f64); 11] = [
            ("GP", self.GP),
            ("MIN", self.MIN),
            ("FGM", self.FGM),
            ("FGA", self.FGA),
            ("3PM", self.ThreePM),
            ("3PA", self.ThreePA),
            ("FTM", self.FTM),
            ("FTA", self.FTA),
            ("BLK", self.BLK),
            ("STL", self.STL),
            ("PTS", self.PTS),
        ];
        numeric
            .iter()
            .find(|(_, v)| !v.is_finite())
            .map(|(name, _)| *name)
    }

    fn into_record(self) -> PlayerSeasonRecord {
        PlayerSeasonRecord {
            player: self.Player,
            season: self.Season,
            team: self.Team,
            games_played: self.GP,
            minutes: self.MIN,
            fgm: self.FGM,
            fga: self.FGA,
            three_pm: self.ThreePM,
            three_pa: self.ThreePA,
            ftm: self.FTM,
            fta: self.FTA,
            blocks: self.BLK,
            steals: self.STL,
            points: self.PTS,
        }
    }
}

// ---------------------------------------------------------------------------
// Loaders
// ---------------------------------------------------------------------------

/// Parse a TSV table from any reader. The first bad row aborts the load.
pub fn load_records_from_reader<R: Read>(rdr: R) -> Result<Vec<PlayerSeasonRecord>, ParseError> {
    let mut reader = csv::ReaderBuilder::new().delimiter(b'\t').from_reader(rdr);

    let headers = reader.headers()?.clone();
    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|name| !headers.iter().any(|h| h == **name))
    {
        return Err(ParseError::MissingColumn(*missing));
    }

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        let raw: RawPlayerSeason = row.deserialize(Some(&headers))?;
        if let Some(column) = raw.first_non_finite() {
            // Start line of the row; quoted fields may span several lines.
            let line = row.position().map_or(0, |pos| pos.line());
            return Err(ParseError::NonFinite { line, column });
        }
        records.push(raw.into_record());
    }
    Ok(records)
}

/// Load player-season records from a TSV file.
pub fn load_records(path: &Path) -> Result<Vec<PlayerSeasonRecord>, LoadError> {
    let file = std::fs::File::open(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let records = load_records_from_reader(file).map_err(|e| LoadError::Format {
        path: path.display().to_string(),
        source: e,
    })?;

    if records.is_empty() {
        warn!("{} contains no data rows", path.display());
    }
    info!("Loaded {} player-season records from {}", records.len(), path.display());
    Ok(records)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
