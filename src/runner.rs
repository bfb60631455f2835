//! Runs the three generators in sequence.

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::error::util::validate_directory;
use crate::generator::{
    DisclosureRecord, EmissionsRecord, GenerationReport, Record, WasteRecord, WriteOptions,
    write_dataset,
};

/// Generate the disclosure, emissions and waste files described by `config`
///
/// Stops at the first failing dataset. Files written before the failure
/// are left on disk.
pub fn run(config: &GeneratorConfig) -> Result<Vec<GenerationReport>> {
    config.validate()?;
    validate_directory(&config.output_dir)?;

    info!(
        "Generating 3 datasets with {} rows each in {}",
        config.rows,
        config.output_dir.display()
    );

    let options = WriteOptions::from(config);
    Ok(vec![
        generate_dataset::<DisclosureRecord>(config, 0, &options)?,
        generate_dataset::<EmissionsRecord>(config, 1, &options)?,
        generate_dataset::<WasteRecord>(config, 2, &options)?,
    ])
}

fn generate_dataset<T: Record>(
    config: &GeneratorConfig,
    index: u64,
    options: &WriteOptions,
) -> Result<GenerationReport> {
    let mut rng = dataset_rng(config.random_seed, index);
    let path = config.output_dir.join(T::FILE_NAME);
    write_dataset::<T, _>(&path, config.rows, &mut rng, options)
}

/// RNG for the dataset at `index`
///
/// With a base seed every dataset gets its own derived seed, so the
/// contents of one file do not depend on how many values another drew.
#[must_use]
pub fn dataset_rng(seed: Option<u64>, index: u64) -> StdRng {
    match seed {
        Some(seed) => {
            let dataset_seed = seed.wrapping_add(index);
            debug!("Dataset {index} seeded with {dataset_seed}");
            StdRng::seed_from_u64(dataset_seed)
        }
        None => StdRng::from_os_rng(),
    }
}
