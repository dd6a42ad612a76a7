use chrono::{DateTime, Utc};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::CountdownError;

/* =======================
CLI ARGS
======================= */

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "countdown.json")]
    pub config: PathBuf,

    /// Evaluate at this RFC 3339 instant instead of the current time
    #[arg(long)]
    pub now: Option<String>,

    /// Print a single countdown line and exit
    #[arg(long)]
    pub once: bool,

    /// Print snapshots as JSON lines
    #[arg(long)]
    pub json: bool,

    /// Override the tick interval in milliseconds
    #[arg(long)]
    pub interval_ms: Option<u64>,
}

impl Args {
    pub fn fixed_now(&self) -> Result<Option<DateTime<Utc>>, CountdownError> {
        self.now.as_deref().map(parse_instant).transpose()
    }

    /// A frozen `--now` never reaches the deadline, so it prints once like `--once`.
    pub fn max_ticks(&self) -> Option<u64> {
        if self.once || self.now.is_some() {
            Some(1)
        } else {
            None
        }
    }
}

pub fn parse_instant(input: &str) -> Result<DateTime<Utc>, CountdownError> {
    DateTime::parse_from_rfc3339(input.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| CountdownError::InvalidInstant(input.to_string()))
}

/* =======================
MAIN CONFIG
======================= */

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub tick_interval_ms: u64,
    pub json: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
            json: false,
        }
    }
}

/* =======================
LOAD CONFIG
======================= */

impl Config {
    /// Reads `path` if it exists, otherwise falls back to defaults.
    pub fn load(path: &Path) -> Result<Self, CountdownError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| CountdownError::Config(format!("{}: {}", path.display(), e)))?;
        let cfg: Config = serde_json::from_str(&content)
            .map_err(|e| CountdownError::Config(format!("{}: {}", path.display(), e)))?;
        cfg.validate()
    }

    /// Command-line flags win over file values.
    pub fn apply_args(mut self, args: &Args) -> Result<Self, CountdownError> {
        if let Some(ms) = args.interval_ms {
            self.display.tick_interval_ms = ms;
        }
        if args.json {
            self.display.json = true;
        }
        self.validate()
    }

    fn validate(self) -> Result<Self, CountdownError> {
        if self.display.tick_interval_ms == 0 {
            return Err(CountdownError::Config(
                "tick_interval_ms must be at least 1".to_string(),
            ));
        }
        Ok(self)
    }
}
