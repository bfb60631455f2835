//! Generator for synthetic disclosure, emissions and waste datasets written
//! as CSV files.

pub mod config;
pub mod error;
pub mod generator;
pub mod runner;
pub mod utils;

// Re-export the most common types for easier use
pub use config::{GeneratorConfig, LineTerminator};
pub use error::{GeneratorError, Result};
pub use generator::{
    DateRange, DisclosureRecord, EmissionsRecord, GenerationReport, Record, WasteRecord,
    generate_disclosure_csv, generate_emissions_csv, generate_waste_csv, random_date_string,
};
pub use runner::run;
