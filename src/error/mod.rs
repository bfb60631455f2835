//! Error handling for dataset generation.

pub mod util;

use std::io;
use std::path::PathBuf;

/// Errors that can occur while generating a dataset
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Error opening or writing an output file
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// Error encoding a CSV record
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// A random range could not be constructed from its bounds
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Generator configuration is unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Another error, annotated with the file it concerns
    #[error("{source} (path: {})", .path.display())]
    WithPath {
        /// File or directory the error relates to
        path: PathBuf,
        /// Underlying error
        #[source]
        source: Box<GeneratorError>,
    },
}

impl GeneratorError {
    /// Attach a path to this error
    #[must_use]
    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            // Keep the innermost path
            Self::WithPath { .. } => self,
            other => Self::WithPath {
                path: path.into(),
                source: Box::new(other),
            },
        }
    }

    /// The path this error refers to, if one was attached
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::WithPath { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;
