//! Configuration for a generation run.

use std::path::PathBuf;

use crate::error::{GeneratorError, Result};

/// Number of rows written to each dataset by default
pub const DEFAULT_ROWS: usize = 1_000_000;

/// Record terminator used in the output files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineTerminator {
    /// `\r\n`
    #[default]
    Crlf,
    /// `\n`
    Lf,
}

impl From<LineTerminator> for csv::Terminator {
    fn from(terminator: LineTerminator) -> Self {
        match terminator {
            LineTerminator::Crlf => Self::CRLF,
            LineTerminator::Lf => Self::Any(b'\n'),
        }
    }
}

/// Configuration for generating the three datasets
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Rows written to each file
    pub rows: usize,

    /// Directory the CSV files are written into
    pub output_dir: PathBuf,

    /// Optional random seed for reproducible output
    pub random_seed: Option<u64>,

    /// Whether to draw a progress bar while writing
    pub show_progress: bool,

    /// Record terminator for all files
    pub terminator: LineTerminator,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            output_dir: PathBuf::from("."),
            random_seed: None,
            show_progress: false,
            terminator: LineTerminator::default(),
        }
    }
}

impl GeneratorConfig {
    /// Create a new configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder for constructing a configuration
    #[must_use]
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::new()
    }

    /// Check the configuration before any file is touched
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 {
            return Err(GeneratorError::InvalidConfig(
                "row count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for constructing a generator configuration
#[derive(Debug, Clone)]
pub struct GeneratorConfigBuilder {
    config: GeneratorConfig,
}

impl Default for GeneratorConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratorConfigBuilder {
    /// Create a new builder with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: GeneratorConfig::default(),
        }
    }

    /// Set the number of rows per file
    #[must_use]
    pub const fn rows(mut self, rows: usize) -> Self {
        self.config.rows = rows;
        self
    }

    /// Set the output directory
    #[must_use]
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    /// Set the random seed
    #[must_use]
    pub const fn random_seed(mut self, seed: u64) -> Self {
        self.config.random_seed = Some(seed);
        self
    }

    /// Set whether to show progress bars
    #[must_use]
    pub const fn show_progress(mut self, show: bool) -> Self {
        self.config.show_progress = show;
        self
    }

    /// Set the record terminator
    #[must_use]
    pub const fn terminator(mut self, terminator: LineTerminator) -> Self {
        self.config.terminator = terminator;
        self
    }

    /// Build the configuration
    #[must_use]
    pub fn build(self) -> GeneratorConfig {
        self.config
    }
}
