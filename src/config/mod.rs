//! Configuration management
//!
//! Input paths resolve in precedence order: positional CLI arguments,
//! then an optional TOML config file, then the literal defaults
//! `correct.txt` / `output.txt`.

use crate::types::FirstdiffError;
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default path for the expected content
pub const DEFAULT_EXPECTED: &str = "correct.txt";

/// Default path for the actual content
pub const DEFAULT_ACTUAL: &str = "output.txt";

/// Command-line interface for firstdiff
#[derive(Debug, Parser)]
#[command(
    name = "firstdiff",
    version,
    about = "Report the first line at which two text files diverge"
)]
pub struct Cli {
    /// File holding the expected content
    pub expected: Option<PathBuf>,

    /// File holding the actual content
    pub actual: Option<PathBuf>,

    /// Read default paths from a TOML config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Optional TOML config file contents
///
/// ```toml
/// expected = "fixtures/golden.txt"
/// actual = "target/run.txt"
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Path to the expected content
    pub expected: Option<PathBuf>,

    /// Path to the actual content
    pub actual: Option<PathBuf>,
}

impl FileConfig {
    /// Load and parse a TOML config file
    pub fn load(path: &Path) -> Result<Self, FirstdiffError> {
        let text = fs::read_to_string(path).map_err(|e| {
            FirstdiffError::Config(format!("Cannot read config file {:?}: {}", path, e))
        })?;

        toml::from_str(&text).map_err(|e| {
            FirstdiffError::Config(format!("Invalid config file {:?}: {}", path, e))
        })
    }
}

/// Global configuration for firstdiff
#[derive(Debug, Clone)]
pub struct Config {
    /// File holding the expected content
    pub expected: PathBuf,

    /// File holding the actual content
    pub actual: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            expected: PathBuf::from(DEFAULT_EXPECTED),
            actual: PathBuf::from(DEFAULT_ACTUAL),
        }
    }
}

impl TryFrom<Cli> for Config {
    type Error = FirstdiffError;

    /// Merge CLI arguments over the config file over the literal defaults
    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        Ok(Self {
            expected: cli
                .expected
                .or(file.expected)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPECTED)),
            actual: cli
                .actual
                .or(file.actual)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ACTUAL)),
        })
    }
}
