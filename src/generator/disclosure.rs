//! Disclosure dataset: one reporting year per row.

use std::path::Path;

use rand::Rng;
use serde::Serialize;

use crate::error::Result;
use crate::generator::date::DateRange;
use crate::generator::metrics::{sample_company_id, sample_metric};
use crate::generator::record::{GenerationReport, Record, WriteOptions, write_dataset};

/// A disclosure row
///
/// `date` holds a bare year rather than a calendar date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisclosureRecord {
    pub company_id: u32,
    pub date: i32,
    pub dis_1: f64,
    pub dis_2: f64,
    pub dis_3: f64,
    pub dis_4: f64,
}

impl Record for DisclosureRecord {
    const DATASET: &'static str = "disclosure";
    const FILE_NAME: &'static str = "disclosure_10k.csv";
    const HEADER: [&'static str; 6] = ["company_id", "date", "dis_1", "dis_2", "dis_3", "dis_4"];

    fn sample<R: Rng + ?Sized>(rng: &mut R, dates: &DateRange) -> Self {
        Self {
            company_id: sample_company_id(rng),
            date: rng.random_range(dates.year_span()),
            dis_1: sample_metric(rng),
            dis_2: sample_metric(rng),
            dis_3: sample_metric(rng),
            dis_4: sample_metric(rng),
        }
    }
}

/// Write `rows` disclosure records to `path`
pub fn generate_disclosure_csv<P, R>(path: P, rows: usize, rng: &mut R) -> Result<GenerationReport>
where
    P: AsRef<Path>,
    R: Rng + ?Sized,
{
    write_dataset::<DisclosureRecord, R>(path.as_ref(), rows, rng, &WriteOptions::default())
}
