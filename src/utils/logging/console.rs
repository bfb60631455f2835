//! Console output utilities

use crate::generator::GenerationReport;

/// Print one line per generated file followed by the completion notice
pub fn print_generation_summary(reports: &[GenerationReport], rows: usize) {
    for report in reports {
        println!(
            "{:<11} {} rows, {} blank values -> {} ({:?})",
            report.dataset,
            report.rows,
            report.blank_values,
            report.path.display(),
            report.elapsed
        );
    }
    println!("{}", completion_notice(reports.len(), rows));
}

/// Message printed when a run finishes
#[must_use]
pub fn completion_notice(files: usize, rows: usize) -> String {
    format!("Finished generating {files} CSV files with {rows} rows each!")
}
