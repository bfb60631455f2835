//! The `Record` trait and the row loop that writes any record type to CSV.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use rand::Rng;
use serde::Serialize;

use crate::config::{GeneratorConfig, LineTerminator};
use crate::error::util::create_output_file;
use crate::error::{GeneratorError, Result};
use crate::generator::date::DateRange;
use crate::utils::logging::progress::PROGRESS_STEP;
use crate::utils::logging::{
    create_main_progress_bar, finish_progress_bar, log_operation_complete, log_operation_start,
    log_warning,
};

/// A row of synthetic data written to its own CSV file
pub trait Record: Serialize + Sized {
    /// Short dataset name used in logs and reports
    const DATASET: &'static str;

    /// File the dataset is written to
    const FILE_NAME: &'static str;

    /// Header row, in field order
    const HEADER: [&'static str; 6];

    /// Sample one record
    fn sample<R: Rng + ?Sized>(rng: &mut R, dates: &DateRange) -> Self;

    /// Number of intentionally blank fields in this record
    fn blank_fields(&self) -> usize {
        0
    }
}

/// Options controlling how a dataset is written
#[derive(Debug, Clone, Copy, Default)]
pub struct WriteOptions {
    /// Record terminator
    pub terminator: LineTerminator,
    /// Draw a progress bar while writing
    pub show_progress: bool,
}

impl From<&GeneratorConfig> for WriteOptions {
    fn from(config: &GeneratorConfig) -> Self {
        Self {
            terminator: config.terminator,
            show_progress: config.show_progress,
        }
    }
}

/// Outcome of writing one dataset
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Dataset name
    pub dataset: &'static str,
    /// File that was written
    pub path: PathBuf,
    /// Data rows written, excluding the header
    pub rows: usize,
    /// Blank fields across all rows
    pub blank_values: usize,
    /// Time spent writing
    pub elapsed: Duration,
}

/// Write `rows` sampled records of type `T` to `path`, preceded by the header
///
/// The file is created or truncated. Rows are sampled, encoded and written
/// one at a time.
pub fn write_dataset<T, R>(
    path: &Path,
    rows: usize,
    rng: &mut R,
    options: &WriteOptions,
) -> Result<GenerationReport>
where
    T: Record,
    R: Rng + ?Sized,
{
    if rows == 0 {
        return Err(GeneratorError::InvalidConfig(
            "row count must be at least 1".to_string(),
        ));
    }

    let dates = DateRange::reporting_period()?;

    if path.exists() {
        log_warning("Overwriting existing file", Some(path));
    }
    log_operation_start(
        &format!("Generating {rows} {} rows into", T::DATASET),
        path,
    );
    let start = Instant::now();

    let file = create_output_file(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(options.terminator.into())
        .from_writer(file);

    writer
        .write_record(T::HEADER)
        .map_err(|e| GeneratorError::from(e).with_path(path))?;

    let progress = options
        .show_progress
        .then(|| create_main_progress_bar(rows as u64, Some(T::DATASET)));

    let mut blank_values = 0;
    for written in 1..=rows {
        let record = T::sample(rng, &dates);
        blank_values += record.blank_fields();
        writer
            .serialize(&record)
            .map_err(|e| GeneratorError::from(e).with_path(path))?;

        if let Some(pb) = progress.as_ref().filter(|_| written % PROGRESS_STEP == 0) {
            pb.set_position(written as u64);
        }
    }

    writer
        .flush()
        .map_err(|e| GeneratorError::from(e).with_path(path))?;

    if let Some(pb) = &progress {
        pb.set_position(rows as u64);
        finish_progress_bar(pb, Some("done"));
    }

    let elapsed = start.elapsed();
    log_operation_complete("wrote", path, rows, Some(elapsed));
    log::debug!("{} blank values in {}", blank_values, path.display());

    Ok(GenerationReport {
        dataset: T::DATASET,
        path: path.to_path_buf(),
        rows,
        blank_values,
        elapsed,
    })
}
