//! Utility functions for error handling
//!
//! Helpers that touch the file system and report failures with the path
//! that caused them.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{GeneratorError, Result};

/// Create (or truncate) an output file
///
/// # Arguments
/// * `path` - The file to create
///
/// # Returns
/// * `Result<fs::File>` - The opened file or an error carrying the path
pub fn create_output_file(path: &Path) -> Result<fs::File> {
    if path.is_dir() {
        return Err(GeneratorError::IoError(io::Error::new(
            io::ErrorKind::InvalidInput,
            "Output path is a directory",
        ))
        .with_path(path));
    }

    fs::File::create(path).map_err(|e| {
        let message = match e.kind() {
            io::ErrorKind::PermissionDenied => "Permission denied - check directory permissions",
            io::ErrorKind::NotFound => "Parent directory does not exist",
            _ => "Failed to create output file",
        };
        GeneratorError::IoError(io::Error::new(e.kind(), format!("{message}: {e}"))).with_path(path)
    })
}

/// Check that an output directory exists and is a directory
pub fn validate_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(GeneratorError::IoError(io::Error::new(
            io::ErrorKind::NotFound,
            "Directory not found",
        ))
        .with_path(path));
    }

    if !path.is_dir() {
        return Err(GeneratorError::IoError(io::Error::new(
            io::ErrorKind::InvalidInput,
            "Path is not a directory",
        ))
        .with_path(path));
    }

    Ok(())
}
