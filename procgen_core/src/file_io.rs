// Copyright (C) 2025 aidan-es. Licensed under the GNU AGPLv3.
use crate::colour::normalize_colour;
use crate::extensions::literal::ScriptLiteral as _;
use crate::types::ActivityRecord;
use indexmap::IndexMap;
use serde::Deserialize;
use std::error::Error;
use std::path::Path;

/// Asynchronously reads the component the activity table is scraped from.
pub async fn load_source(path: &Path) -> Result<String, Box<dyn Error + Send + Sync>> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| format!("Failed to read {}: {e}", path.display()).into())
}

/// Writes the generated component, replacing anything already at `path`.
///
/// The parent directory must already exist. The write is not atomic.
pub async fn write_output(path: &Path, contents: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
    tokio::fs::write(path, contents)
        .await
        .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
    Ok(())
}

/// One row of an authored activity table.
#[derive(Debug, Deserialize)]
struct ActivityRow {
    id: String,
    name: String,
    icon_key: String,
    icon: String,
    primary: String,
    surface: String,
}

/// Asynchronously loads activities from a CSV file with the header
/// `id,name,icon_key,icon,primary,surface`.
///
/// Icons may be written as escapes (`\u2764`). Colours go through the same
/// normalisation as scraped ones.
pub async fn load_activities_from_csv(
    path: &Path,
) -> Result<Vec<ActivityRecord>, Box<dyn Error + Send + Sync>> {
    let content = tokio::fs::read_to_string(path).await?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());
    Ok(parse_activities(&mut reader))
}

/// Parses activity rows from a CSV reader.
///
/// Malformed rows and rows without an icon are skipped with a warning. A
/// repeated id keeps its first position and takes the later values.
fn parse_activities<R: std::io::Read>(reader: &mut csv::Reader<R>) -> Vec<ActivityRecord> {
    let mut activities: IndexMap<String, ActivityRecord> = IndexMap::new();

    for result in reader.deserialize::<ActivityRow>() {
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                log::warn!("Skipping malformed activity row: {e}");
                continue;
            }
        };

        let icon = row.icon.unescape();
        if icon.is_empty() {
            log::warn!("Skipping activity '{}': no icon", row.id);
            continue;
        }

        activities.insert(
            row.id.clone(),
            ActivityRecord {
                id: row.id,
                name: row.name,
                icon_key: row.icon_key,
                icon,
                primary: normalize_colour(&row.primary),
                surface: normalize_colour(&row.surface),
            },
        );
    }

    activities.into_values().collect()
}
