//! Duplicate report formatting.

use std::fmt::Display;

use chrono::{Local, TimeZone, Utc};

use crate::api::IndexEntry;

/// Message shown when the index has no matches.
pub const NO_DUPLICATES_MESSAGE: &str = "Great news! No duplicates found!";

/// Separator between duplicate blocks.
const ENTRY_SEPARATOR: &str = "\n-----------------------------\n";

/// Format used for the "Date Added" line.
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Duplicates returned by the index, ready for display.
#[derive(Debug, Clone)]
pub struct DuplicateReport {
    entries: Vec<IndexEntry>,
    site_root: String,
}

impl DuplicateReport {
    pub fn new(entries: Vec<IndexEntry>, site_root: impl Into<String>) -> Self {
        Self {
            entries,
            site_root: site_root.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    /// Render with dates in the local timezone.
    pub fn render(&self) -> String {
        self.render_in(&Local)
    }

    /// Render with dates in the given timezone.
    pub fn render_in<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        if self.entries.is_empty() {
            return NO_DUPLICATES_MESSAGE.to_string();
        }

        let blocks: Vec<String> = self
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| self.render_entry(index + 1, entry, tz))
            .collect();

        format!(
            "Found {} duplicates:\n\n{}",
            self.entries.len(),
            blocks.join(ENTRY_SEPARATOR)
        )
    }

    fn render_entry<Tz>(&self, number: usize, entry: &IndexEntry, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        format!(
            "Duplicate {}:\n  Game UUID: {}\n  Path: {}\n  Size: {} bytes\n  Date Added: {}\n  Game URL: {}/web/game/{}",
            number,
            entry.game_id,
            entry.path,
            entry.size,
            format_date_added(entry.date_added, tz),
            self.site_root,
            entry.game_id
        )
    }
}

/// Format a millisecond epoch timestamp in `tz`.
fn format_date_added<Tz>(millis: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match Utc.timestamp_millis_opt(millis).single() {
        Some(utc) => utc.with_timezone(tz).format(DATE_FORMAT).to_string(),
        None => "unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn entry(game_id: &str, path: &str, size: u64, date_added: i64) -> IndexEntry {
        IndexEntry {
            sha256: String::new(),
            sha1: String::new(),
            crc32: String::new(),
            md5: String::new(),
            path: path.to_string(),
            size,
            game_id: game_id.to_string(),
            date_added,
        }
    }

    #[test]
    fn test_empty_report() {
        let report = DuplicateReport::new(Vec::new(), "https://fpfss.unstable.life");
        assert!(report.is_empty());
        assert_eq!(report.render_in(&Utc), NO_DUPLICATES_MESSAGE);
    }

    #[test]
    fn test_single_entry() {
        let report = DuplicateReport::new(
            vec![entry("g-1", "www.example.com/game.swf", 2048, 0)],
            "https://fpfss.unstable.life",
        );

        assert_eq!(
            report.render_in(&Utc),
            "Found 1 duplicates:\n\n\
             Duplicate 1:\n  \
             Game UUID: g-1\n  \
             Path: www.example.com/game.swf\n  \
             Size: 2048 bytes\n  \
             Date Added: 1970-01-01 00:00:00\n  \
             Game URL: https://fpfss.unstable.life/web/game/g-1"
        );
    }

    #[test]
    fn test_entries_are_numbered_and_separated() {
        let report = DuplicateReport::new(
            vec![
                entry("a", "one.swf", 1, 1_700_000_000_000),
                entry("b", "two.swf", 2, 1_700_000_000_000),
            ],
            "https://fpfss.unstable.life",
        );

        let rendered = report.render_in(&Utc);
        assert!(rendered.starts_with("Found 2 duplicates:\n\n"));
        assert!(rendered.contains("Duplicate 1:\n  Game UUID: a"));
        assert!(rendered.contains(
            "/web/game/a\n-----------------------------\nDuplicate 2:\n  Game UUID: b"
        ));
        assert!(rendered.contains("Date Added: 2023-11-14 22:13:20"));
    }

    #[test]
    fn test_date_in_other_timezone() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(format_date_added(0, &tz), "1970-01-01 02:00:00");
    }

    #[test]
    fn test_out_of_range_date() {
        assert_eq!(format_date_added(i64::MAX, &Utc), "unknown");
    }
}
