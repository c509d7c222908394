// Copyright (C) 2025 aidan-es. Licensed under the GNU AGPLv3.
use crate::extract::format_entry;
use crate::types::ActivityRecord;

pub const ENTRIES_PLACEHOLDER: &str = "__ENTRIES__";
pub const WEEKDAY_PLACEHOLDER: &str = "__FULL_WEEK__";

/// Weekday indices, Sunday first.
pub const FULL_WEEK: [u8; 7] = [0, 1, 2, 3, 4, 5, 6];

/// Skeleton of `ProcedureSetupStep.tsx`. Only the two placeholders are data driven.
const PROCEDURE_SETUP_TEMPLATE: &str =
    include_str!("../templates/procedure_setup_step.tsx.tpl");

/// The variable regions of the generated component.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TemplateConfig {
    /// Formatted `ACTIVITY_META` lines, see [`format_entry`].
    pub entries: Vec<String>,
    pub weekday_indices: Vec<u8>,
}

impl TemplateConfig {
    pub fn new(entries: Vec<String>, weekday_indices: Vec<u8>) -> Self {
        Self {
            entries,
            weekday_indices,
        }
    }

    /// Formats `records` into entry lines, keeping their order.
    pub fn from_records<'a>(
        records: impl IntoIterator<Item = &'a ActivityRecord>,
        weekday_indices: Vec<u8>,
    ) -> Self {
        Self::new(records.into_iter().map(format_entry).collect(), weekday_indices)
    }
}

/// Renders the `ProcedureSetupStep.tsx` component.
pub fn render(config: &TemplateConfig) -> String {
    render_with(PROCEDURE_SETUP_TEMPLATE, config)
}

/// Substitutes `config` into `skeleton`.
///
/// The weekday placeholder is replaced first so entry text is never
/// scanned for it.
pub fn render_with(skeleton: &str, config: &TemplateConfig) -> String {
    let weekdays = config
        .weekday_indices
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let entries = config.entries.join("\n");

    skeleton
        .replace(WEEKDAY_PLACEHOLDER, &weekdays)
        .replace(ENTRIES_PLACEHOLDER, &entries)
}
