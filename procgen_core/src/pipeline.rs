// Copyright (C) 2025 aidan-es. Licensed under the GNU AGPLv3.
//! read -> extract -> format -> substitute -> write.
use crate::config::GeneratorConfig;
use crate::extract::{Extraction, extract_entries};
use crate::file_io::{load_source, write_output};
use crate::template::{TemplateConfig, render};
use crate::types::ActivityRecord;
use std::error::Error;

/// Builds the output component from the text of the source component.
pub fn generate_document(
    source: &str,
    weekday_indices: &[u8],
) -> Result<(String, Extraction), String> {
    let extraction = extract_entries(source)?;
    let config = TemplateConfig::new(extraction.entry_lines(), weekday_indices.to_vec());
    Ok((render(&config), extraction))
}

/// Builds the output component from records authored as data rather than scraped.
pub fn generate_from_records(records: &[ActivityRecord], weekday_indices: &[u8]) -> String {
    render(&TemplateConfig::from_records(records, weekday_indices.to_vec()))
}

/// Regenerates `config.output_path` from `config.source_path`.
///
/// Returns the extraction so callers can report what was skipped.
pub async fn generate_file(
    config: &GeneratorConfig,
) -> Result<Extraction, Box<dyn Error + Send + Sync>> {
    let source = load_source(&config.source_path).await?;
    let (document, extraction) = generate_document(&source, &config.weekday_indices)?;
    write_output(&config.output_path, &document).await?;

    log::info!(
        "Wrote {} activities to {}",
        extraction.resolved().count(),
        config.output_path.display()
    );

    Ok(extraction)
}
