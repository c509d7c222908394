// Copyright (C) 2025 aidan-es. Licensed under the GNU AGPLv3.
use crate::template::FULL_WEEK;
use std::path::PathBuf;

/// Component the activity table is scraped from.
pub const DEFAULT_SOURCE_PATH: &str = "components/procedures/ChooseProceduresStep.tsx";
/// Component that is regenerated on every run.
pub const DEFAULT_OUTPUT_PATH: &str = "components/procedures/ProcedureSetupStep.tsx";

/// Where the generator reads from and writes to. Paths are relative to the
/// working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub source_path: PathBuf,
    pub output_path: PathBuf,
    pub weekday_indices: Vec<u8>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_SOURCE_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            weekday_indices: FULL_WEEK.to_vec(),
        }
    }
}
