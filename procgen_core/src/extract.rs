// Copyright (C) 2025 aidan-es. Licensed under the GNU AGPLv3.
use crate::colour::normalize_colour;
use crate::extensions::literal::ScriptLiteral as _;
use crate::types::{
    ActivityRecord, IconMap, RawRecord, RecordOutcome, SkipReason, SkippedRecord,
};
use regex::Regex;
use std::sync::OnceLock;

/// The `iconEmojis` object literal, ending at the first `}` followed by a blank line.
const ICON_TABLE_PATTERN: &str = r"(?s)const iconEmojis = \{(?P<body>.*?)\}\r?\n\r?\n";

/// One activity literal. The name may use either quote style.
const RECORD_PATTERN: &str = concat!(
    r"\{ id: '(?P<id>[^']+)', ",
    r#"name: (?:'(?P<name>[^']+)'|"(?P<dq_name>[^"]+)"), "#,
    r"icon: iconEmojis\.(?P<icon>[a-zA-Z0-9]+), ",
    r"color: '(?P<colour>[^']+)', ",
    r"bgColor: '(?P<bg_colour>[^']+)'",
);

fn icon_table_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(ICON_TABLE_PATTERN).expect("Invalid icon table pattern"))
}

fn record_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(RECORD_PATTERN).expect("Invalid activity record pattern"))
}

/// Ordered outcomes of scraping one source document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Extraction {
    pub icons: IconMap,
    pub outcomes: Vec<RecordOutcome>,
}

impl Extraction {
    pub fn resolved(&self) -> impl Iterator<Item = &ActivityRecord> {
        self.outcomes.iter().filter_map(RecordOutcome::as_resolved)
    }

    pub fn skipped(&self) -> impl Iterator<Item = &SkippedRecord> {
        self.outcomes.iter().filter_map(RecordOutcome::as_skipped)
    }

    /// One formatted table line per resolved record, in source order.
    pub fn entry_lines(&self) -> Vec<String> {
        self.resolved().map(format_entry).collect()
    }
}

/// Scrapes the icon table and every activity literal out of `source`.
///
/// Fails only when the icon table is missing. Activities that do not
/// resolve are kept as `RecordOutcome::Skipped`.
pub fn extract_entries(source: &str) -> Result<Extraction, String> {
    let icons = parse_icon_table(source)?;
    log::debug!("Parsed {} icons", icons.len());

    let outcomes: Vec<RecordOutcome> = scan_records(source)
        .into_iter()
        .map(|raw| resolve(raw, &icons))
        .collect();

    for skipped in outcomes.iter().filter_map(RecordOutcome::as_skipped) {
        log::debug!(
            "Skipping activity '{}' (icon '{}'): {}",
            skipped.id,
            skipped.icon_key,
            skipped.reason
        );
    }

    Ok(Extraction { icons, outcomes })
}

/// Locates the `iconEmojis` table and decodes it into an `IconMap`.
pub fn parse_icon_table(source: &str) -> Result<IconMap, String> {
    let body = icon_table_regex()
        .captures(source)
        .and_then(|caps| caps.name("body"))
        .ok_or_else(|| "Icon table `const iconEmojis = { ... }` not found".to_owned())?;

    Ok(parse_icon_lines(body.as_str()))
}

/// Parses the `key: 'value',` lines of an icon table body.
fn parse_icon_lines(body: &str) -> IconMap {
    let mut icons = IconMap::new();

    for raw in body.lines() {
        let line = raw.trim().trim_end_matches(',');
        if line.is_empty() {
            continue;
        }

        let Some((key, value)) = line.split_once(':') else {
            log::warn!("Skipping icon line without a key: {line:?}");
            continue;
        };

        let glyph = strip_quotes(value.trim()).unescape();
        icons.insert(key.trim().to_owned(), glyph);
    }

    icons
}

/// Removes one pair of matching surrounding quotes, if present.
fn strip_quotes(value: &str) -> &str {
    for quote in ['\'', '"'] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

/// Finds every activity literal in document order.
pub fn scan_records(source: &str) -> Vec<RawRecord> {
    record_regex()
        .captures_iter(source)
        .filter_map(|caps| {
            let name = caps.name("name").or_else(|| caps.name("dq_name"))?;
            Some(RawRecord {
                id: caps["id"].to_owned(),
                name: name.as_str().to_owned(),
                icon_key: caps["icon"].to_owned(),
                colour: caps["colour"].to_owned(),
                bg_colour: caps["bg_colour"].to_owned(),
            })
        })
        .collect()
}

/// Resolves a scraped activity against the icon table and normalises its colours.
pub fn resolve(raw: RawRecord, icons: &IconMap) -> RecordOutcome {
    let reason = match icons.get(&raw.icon_key) {
        Some(icon) if !icon.is_empty() => {
            return RecordOutcome::Resolved(ActivityRecord {
                primary: normalize_colour(&raw.colour),
                surface: normalize_colour(&raw.bg_colour),
                icon: icon.clone(),
                id: raw.id,
                name: raw.name,
                icon_key: raw.icon_key,
            });
        }
        Some(_) => SkipReason::EmptyIcon,
        None => SkipReason::UnknownIcon,
    };

    RecordOutcome::Skipped(SkippedRecord {
        id: raw.id,
        icon_key: raw.icon_key,
        reason,
    })
}

/// Formats a record as one line of the generated `ACTIVITY_META` table.
pub fn format_entry(record: &ActivityRecord) -> String {
    format!(
        "  '{}': {{ name: '{}', icon: '{}', primary: '{}', surface: '{}' }},",
        record.id,
        record.name.escape_single_quotes(),
        record.icon.escape_single_quotes(),
        record.primary,
        record.surface
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = r#"'use client'

const iconEmojis = {
  heart: '\u2764',
  sparkles: '\u2728',
  blank: '',
  quote: "'",
}

const activities = [
  { id: 'walk', name: "O'Brien's Walk", icon: iconEmojis.heart, color: 'bg-[#112233]', bgColor: 'bg-purple-100' },
  { id: 'glow', name: 'Glow Up', icon: iconEmojis.sparkles, color: 'bg-#A385E9', bgColor: 'bg-[rgba(163,133,233,0.15)]' },
  { id: 'ghost', name: 'Ghost', icon: iconEmojis.missing, color: 'bg-red-500', bgColor: 'bg-red-100' },
  { id: 'empty', name: 'Empty', icon: iconEmojis.blank, color: 'bg-red-500', bgColor: 'bg-red-100' },
  { id: 'broken', name: 'Broken', icon: iconEmojis.heart },
  { id: 'quoted', name: 'Quoted', icon: iconEmojis.quote, color: 'white', bgColor: 'bg-white' },
]
"#;

    #[test]
    fn test_parse_icon_table_decodes_escapes() {
        let icons = parse_icon_table(SOURCE).unwrap();
        assert_eq!(icons.len(), 4);
        assert_eq!(icons.get("heart"), Some(&"❤".to_owned()));
        assert_eq!(icons.get("sparkles"), Some(&"✨".to_owned()));
        assert_eq!(icons.get("blank"), Some(&String::new()));
    }

    #[test]
    fn test_parse_icon_table_missing_is_error() {
        assert!(parse_icon_table("const somethingElse = {}\n\n").is_err());
        // The table must be followed by a blank line.
        assert!(parse_icon_table("const iconEmojis = {\n  heart: '\\u2764',\n}").is_err());
    }

    #[test]
    fn test_parse_icon_lines_duplicate_key_last_wins() {
        let icons = parse_icon_lines("\n  heart: 'a',\n\n  heart: 'b',\n  star: 'c'\n");
        assert_eq!(icons.len(), 2);
        assert_eq!(icons.get("heart"), Some(&"b".to_owned()));
        assert_eq!(icons.get("star"), Some(&"c".to_owned()));
    }

    #[test]
    fn test_parse_icon_lines_skips_lines_without_separator() {
        let icons = parse_icon_lines("  // comment\n  heart: 'a',\n");
        assert_eq!(icons.len(), 1);
        assert!(icons.contains_key("heart"));
    }

    #[test]
    fn test_strip_quotes() {
        assert_eq!(strip_quotes("'\\u2764'"), "\\u2764");
        assert_eq!(strip_quotes("\"'\""), "'");
        assert_eq!(strip_quotes("''"), "");
        assert_eq!(strip_quotes("bare"), "bare");
        assert_eq!(strip_quotes("'"), "'");
    }

    #[test]
    fn test_scan_records_document_order() {
        let records = scan_records(SOURCE);
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["walk", "glow", "ghost", "empty", "quoted"]);
        assert_eq!(records[0].name, "O'Brien's Walk");
        assert_eq!(records[0].icon_key, "heart");
        assert_eq!(records[0].colour, "bg-[#112233]");
        assert_eq!(records[0].bg_colour, "bg-purple-100");
    }

    #[test]
    fn test_resolve_unknown_icon_is_skipped() {
        let icons = IconMap::new();
        let raw = RawRecord {
            id: "ghost".to_owned(),
            name: "Ghost".to_owned(),
            icon_key: "missing".to_owned(),
            colour: "bg-red-500".to_owned(),
            bg_colour: "bg-red-100".to_owned(),
        };
        assert_eq!(
            resolve(raw, &icons),
            RecordOutcome::Skipped(SkippedRecord {
                id: "ghost".to_owned(),
                icon_key: "missing".to_owned(),
                reason: SkipReason::UnknownIcon,
            })
        );
    }

    #[test]
    fn test_extract_entries_outcomes() {
        let extraction = extract_entries(SOURCE).unwrap();

        let resolved: Vec<&str> = extraction.resolved().map(|r| r.id.as_str()).collect();
        assert_eq!(resolved, vec!["walk", "glow", "quoted"]);

        let skipped: Vec<(&str, SkipReason)> = extraction
            .skipped()
            .map(|s| (s.id.as_str(), s.reason))
            .collect();
        assert_eq!(
            skipped,
            vec![
                ("ghost", SkipReason::UnknownIcon),
                ("empty", SkipReason::EmptyIcon)
            ]
        );
    }

    #[test]
    fn test_extract_entries_lines() {
        let lines = extract_entries(SOURCE).unwrap().entry_lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "  'walk': { name: 'O\\'Brien\\'s Walk', icon: '❤', primary: '#112233', surface: 'purple-100' },"
        );
        assert_eq!(
            lines[1],
            "  'glow': { name: 'Glow Up', icon: '✨', primary: '#A385E9', surface: 'rgba(163,133,233,0.15)' },"
        );
        assert_eq!(
            lines[2],
            "  'quoted': { name: 'Quoted', icon: '\\'', primary: 'white', surface: 'white' },"
        );
    }

    #[test]
    fn test_extract_entries_without_records() {
        let extraction = extract_entries("const iconEmojis = {\n  heart: 'x',\n}\n\n").unwrap();
        assert_eq!(extraction.icons.len(), 1);
        assert!(extraction.outcomes.is_empty());
        assert!(extraction.entry_lines().is_empty());
    }
}
