use anyhow::Context;
use esg_fixtures::utils::logging::console::print_generation_summary;
use esg_fixtures::{GeneratorConfig, run};

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GeneratorConfig::builder().show_progress(true).build();
    let reports = run(&config).context("dataset generation failed")?;

    print_generation_summary(&reports, config.rows);
    Ok(())
}
