// Copyright (C) 2025 aidan-es. Licensed under the GNU AGPLv3.
//! Regenerates the procedure setup component from the procedure chooser.
//! Takes no arguments; run it from the web app's root directory.
use procgen_core::config::GeneratorConfig;
use procgen_core::pipeline::generate_file;
use procgen_core::types::SkipReason;
use strum::IntoEnumIterator as _;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    simple_logger::init_with_level(log::Level::Info)?;

    let config = GeneratorConfig::default();
    log::info!(
        "Generating {} from {}...",
        config.output_path.display(),
        config.source_path.display()
    );

    let extraction = generate_file(&config).await?;

    for reason in SkipReason::iter() {
        let count = extraction
            .skipped()
            .filter(|skipped| skipped.reason == reason)
            .count();
        if count > 0 {
            log::info!("Skipped {count} activities: {reason}");
        }
    }

    log::info!(
        "Done: {} icons, {} activities",
        extraction.icons.len(),
        extraction.resolved().count()
    );

    Ok(())
}
