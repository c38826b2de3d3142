//! Configuration for angle-comp
//!
//! Loads configuration from a TOML file. Every section is optional and falls
//! back to its defaults.

use crate::constants::{DEFAULT_BINARY_HEADER, MAX_TABLE_ROWS};
use crate::error::{Error, Result};
use crate::reply::{RawCorrection, ReplyFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub reply: ReplyConfig,
    /// Fallback calibration used until a device reply is decoded
    pub calibration: RawCorrection,
    pub table: TableRange,
    pub logging: LoggingConfig,
}

/// Reply framing
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ReplyConfig {
    pub format: ReplyFormat,
    /// ASCII header preceding a binary payload
    pub header: String,
}

impl Default for ReplyConfig {
    fn default() -> Self {
        Self {
            format: ReplyFormat::Binary,
            header: DEFAULT_BINARY_HEADER.to_string(),
        }
    }
}

/// Angle range of a compensation table, in degrees (inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TableRange {
    pub start_deg: f64,
    pub end_deg: f64,
    pub step_deg: f64,
}

impl Default for TableRange {
    fn default() -> Self {
        Self {
            start_deg: 0.0,
            end_deg: 359.0,
            step_deg: 1.0,
        }
    }
}

impl TableRange {
    pub fn validate(&self) -> Result<()> {
        self.row_count().map(|_| ())
    }

    /// Number of table rows, or an error for ranges that cannot be tabulated.
    pub fn row_count(&self) -> Result<usize> {
        if !self.start_deg.is_finite() || !self.end_deg.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "table bounds must be finite, got {}..{}",
                self.start_deg, self.end_deg
            )));
        }
        if !self.step_deg.is_finite() || self.step_deg <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "table step must be positive, got {}",
                self.step_deg
            )));
        }
        if self.end_deg < self.start_deg {
            return Err(Error::InvalidParameter(format!(
                "table end {} is before start {}",
                self.end_deg, self.start_deg
            )));
        }

        let intervals = ((self.end_deg - self.start_deg) / self.step_deg + 1e-9).floor();
        if !intervals.is_finite() || intervals >= MAX_TABLE_ROWS as f64 {
            return Err(Error::InvalidParameter(format!(
                "table range {}..{} step {} exceeds {} rows",
                self.start_deg, self.end_deg, self.step_deg, MAX_TABLE_ROWS
            )));
        }
        Ok(intervals as usize + 1)
    }

    /// Angles of the table rows.
    ///
    /// Computed from the row index so long ranges do not accumulate
    /// rounding error.
    pub fn angles(&self) -> Result<impl Iterator<Item = f64> + '_> {
        let rows = self.row_count()?;
        Ok((0..rows).map(move |i| self.start_deg + i as f64 * self.step_deg))
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Example
    /// ```no_run
    /// use angle_comp::config::Config;
    ///
    /// let config = Config::load("angle-comp.toml")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.table.validate()
    }
}
