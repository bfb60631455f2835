//! Waste dataset.

use std::path::Path;

use chrono::NaiveDate;
use rand::Rng;
use serde::Serialize;

use crate::error::Result;
use crate::generator::date::DateRange;
use crate::generator::metrics::{sample_company_id, sample_metric};
use crate::generator::record::{GenerationReport, Record, WriteOptions, write_dataset};

/// A waste row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WasteRecord {
    pub company_id: u32,
    pub date: NaiveDate,
    pub was_1: f64,
    pub was_2: f64,
    pub was_3: f64,
    pub was_4: f64,
}

impl Record for WasteRecord {
    const DATASET: &'static str = "waste";
    const FILE_NAME: &'static str = "waste_10k.csv";
    const HEADER: [&'static str; 6] = ["company_id", "date", "was_1", "was_2", "was_3", "was_4"];

    fn sample<R: Rng + ?Sized>(rng: &mut R, dates: &DateRange) -> Self {
        Self {
            company_id: sample_company_id(rng),
            date: dates.sample(rng),
            was_1: sample_metric(rng),
            was_2: sample_metric(rng),
            was_3: sample_metric(rng),
            was_4: sample_metric(rng),
        }
    }
}

/// Write `rows` waste records to `path`
pub fn generate_waste_csv<P, R>(path: P, rows: usize, rng: &mut R) -> Result<GenerationReport>
where
    P: AsRef<Path>,
    R: Rng + ?Sized,
{
    write_dataset::<WasteRecord, R>(path.as_ref(), rows, rng, &WriteOptions::default())
}
