// Copyright (C) 2025 aidan-es. Licensed under the GNU AGPLv3.
use indexmap::IndexMap;
use strum_macros::{Display, EnumIter};

/// Icon key to display glyph, e.g. `heart` -> `❤`.
///
/// Duplicate keys keep their first position but take the last value.
pub type IconMap = IndexMap<String, String>;

/// An activity literal exactly as it was scraped from the source, before
/// its icon is resolved or its colours are normalised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub id: String,
    pub name: String,
    pub icon_key: String,
    pub colour: String,
    pub bg_colour: String,
}

/// A resolved activity, ready to become one line of the generated lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActivityRecord {
    pub id: String,
    pub name: String,
    pub icon_key: String,
    /// The glyph `icon_key` resolved to.
    pub icon: String,
    pub primary: String,
    pub surface: String,
}

/// Why an activity literal produced no output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum SkipReason {
    #[strum(to_string = "icon key not present in the icon table")]
    UnknownIcon,
    #[strum(to_string = "icon key resolves to an empty glyph")]
    EmptyIcon,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub id: String,
    pub icon_key: String,
    pub reason: SkipReason,
}

/// The result of resolving one scraped activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    Resolved(ActivityRecord),
    Skipped(SkippedRecord),
}

impl RecordOutcome {
    pub fn as_resolved(&self) -> Option<&ActivityRecord> {
        match self {
            Self::Resolved(record) => Some(record),
            Self::Skipped(_) => None,
        }
    }

    pub fn as_skipped(&self) -> Option<&SkippedRecord> {
        match self {
            Self::Resolved(_) => None,
            Self::Skipped(skipped) => Some(skipped),
        }
    }
}
