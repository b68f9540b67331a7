// Configuration loading and parsing (config/hoopstats.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Default tab-separated input file, relative to the base directory.
pub const DEFAULT_INPUT: &str = "NBA_Player_Stats.tsv";

/// Default report file, relative to the base directory.
pub const DEFAULT_OUTPUT: &str = "Top_100_Lists.txt";

/// Default length of every ranked list.
pub const DEFAULT_TOP_N: usize = 100;

/// Location of the optional config file under the base directory.
const CONFIG_FILE: &str = "config/hoopstats.toml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    Validation { field: String, message: String },

    #[error("failed to locate the executable directory: {source}")]
    BaseDir { source: std::io::Error },
}

// ---------------------------------------------------------------------------
// Top-level assembled Config
// ---------------------------------------------------------------------------

/// Settings for a single run. Paths are already resolved against the base
/// directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub top_n: usize,
}

impl Config {
    /// The configuration used when no config file is present.
    pub fn with_defaults(base_dir: &Path) -> Self {
        Config {
            input_path: base_dir.join(DEFAULT_INPUT),
            output_path: base_dir.join(DEFAULT_OUTPUT),
            top_n: DEFAULT_TOP_N,
        }
    }
}

// ---------------------------------------------------------------------------
// hoopstats.toml structs
// ---------------------------------------------------------------------------

/// Raw deserialization target for the whole file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    data: DataSection,
    #[serde(default)]
    report: ReportSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct DataSection {
    input: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ReportSection {
    output: Option<String>,
    top_n: Option<usize>,
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate configuration from `config/hoopstats.toml` under
/// `base_dir`. A missing file yields the defaults.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let config_path = base_dir.join(CONFIG_FILE);

    let file: ConfigFile = if config_path.exists() {
        let text = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::Read {
            path: config_path.clone(),
            source: e,
        })?;
        info!("Reading config from {}", config_path.display());
        toml::from_str(&text).map_err(|e| ConfigError::Parse {
            path: config_path.clone(),
            source: e,
        })?
    } else {
        debug!("No config file at {}, using defaults", config_path.display());
        ConfigFile::default()
    };

    validate(
        file.data.input.as_deref().unwrap_or(DEFAULT_INPUT),
        file.report.output.as_deref().unwrap_or(DEFAULT_OUTPUT),
        file.report.top_n.unwrap_or(DEFAULT_TOP_N),
    )?;

    let defaults = Config::with_defaults(base_dir);
    Ok(Config {
        input_path: file
            .data
            .input
            .map_or(defaults.input_path, |v| resolve(base_dir, &v)),
        output_path: file
            .report
            .output
            .map_or(defaults.output_path, |v| resolve(base_dir, &v)),
        top_n: file.report.top_n.unwrap_or(defaults.top_n),
    })
}

/// Convenience wrapper: loads config relative to the directory holding the
/// running executable.
pub fn load_config() -> Result<Config, ConfigError> {
    let base_dir = executable_dir()?;
    load_config_from(&base_dir)
}

/// Directory containing the running executable.
pub fn executable_dir() -> Result<PathBuf, ConfigError> {
    let exe = std::env::current_exe().map_err(|e| ConfigError::BaseDir { source: e })?;
    match exe.parent() {
        Some(dir) => Ok(dir.to_path_buf()),
        None => Err(ConfigError::BaseDir {
            source: std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} has no parent directory", exe.display()),
            ),
        }),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn resolve(base_dir: &Path, value: &str) -> PathBuf {
    let path = Path::new(value);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

fn validate(input: &str, output: &str, top_n: usize) -> Result<(), ConfigError> {
    let path_fields: &[(&str, &str)] = &[("data.input", input), ("report.output", output)];
    for (name, val) in path_fields {
        if val.trim().is_empty() {
            return Err(ConfigError::Validation {
                field: name.to_string(),
                message: "must not be empty".into(),
            });
        }
    }

    if top_n == 0 {
        return Err(ConfigError::Validation {
            field: "report.top_n".into(),
            message: "must be > 0".into(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
