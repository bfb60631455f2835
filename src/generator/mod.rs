//! Synthetic dataset generators
//!
//! Each dataset is a [`Record`] type; [`write_dataset`] runs the shared row
//! loop that samples, encodes and writes rows one at a time.

pub mod date;
pub mod disclosure;
pub mod emissions;
pub mod metrics;
pub mod record;
pub mod waste;

pub use date::{DateRange, random_date_string};
pub use disclosure::{DisclosureRecord, generate_disclosure_csv};
pub use emissions::{EmissionsRecord, generate_emissions_csv};
pub use record::{GenerationReport, Record, WriteOptions, write_dataset};
pub use waste::{WasteRecord, generate_waste_csv};
