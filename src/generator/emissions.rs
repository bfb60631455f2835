//! Emissions dataset. The first metric is occasionally missing.

use std::path::Path;

use chrono::NaiveDate;
use rand::Rng;
use serde::Serialize;

use crate::error::Result;
use crate::generator::date::DateRange;
use crate::generator::metrics::{sample_company_id, sample_metric, sample_optional_metric};
use crate::generator::record::{GenerationReport, Record, WriteOptions, write_dataset};

/// An emissions row; `emi_1: None` is written as an empty field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmissionsRecord {
    pub company_id: u32,
    pub date: NaiveDate,
    pub emi_1: Option<f64>,
    pub emi_2: f64,
    pub emi_3: f64,
    pub emi_4: f64,
}

impl Record for EmissionsRecord {
    const DATASET: &'static str = "emissions";
    const FILE_NAME: &'static str = "emissions_10k.csv";
    const HEADER: [&'static str; 6] = ["company_id", "date", "emi_1", "emi_2", "emi_3", "emi_4"];

    fn sample<R: Rng + ?Sized>(rng: &mut R, dates: &DateRange) -> Self {
        Self {
            company_id: sample_company_id(rng),
            date: dates.sample(rng),
            emi_1: sample_optional_metric(rng),
            emi_2: sample_metric(rng),
            emi_3: sample_metric(rng),
            emi_4: sample_metric(rng),
        }
    }

    fn blank_fields(&self) -> usize {
        usize::from(self.emi_1.is_none())
    }
}

/// Write `rows` emissions records to `path`
pub fn generate_emissions_csv<P, R>(path: P, rows: usize, rng: &mut R) -> Result<GenerationReport>
where
    P: AsRef<Path>,
    R: Rng + ?Sized,
{
    write_dataset::<EmissionsRecord, R>(path.as_ref(), rows, rng, &WriteOptions::default())
}
