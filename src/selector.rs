//! Filtering of extracted examples by section and number.

use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};

use crate::parser::TestRecord;

/// Pattern used when no section filter is given; matches every section,
/// including an empty one.
pub const MATCH_ALL: &str = "(.)|(^$)";

/// Selects examples whose section matches a pattern and, optionally, whose
/// number equals a given value.
#[derive(Debug, Clone)]
pub struct Selector {
    pattern: Regex,
    number: Option<u32>,
}

impl Selector {
    /// Build a selector from an optional section pattern and example number.
    ///
    /// The pattern is matched case-insensitively anywhere in the section.
    /// A number of `0` means no number filter.
    pub fn new(pattern: Option<&str>, number: Option<u32>) -> Result<Self> {
        let source = pattern.unwrap_or(MATCH_ALL);
        let pattern = RegexBuilder::new(source)
            .case_insensitive(true)
            .build()
            .with_context(|| format!("Invalid section pattern: {}", source))?;

        Ok(Self {
            pattern,
            number: number.filter(|&n| n != 0),
        })
    }

    /// Check whether a single example passes both filters.
    pub fn matches(&self, record: &TestRecord) -> bool {
        self.pattern.is_match(&record.section)
            && self.number.is_none_or(|n| record.example == n)
    }

    /// Filter `records`, keeping document order and original numbers.
    pub fn select<'a>(&self, records: &'a [TestRecord]) -> Vec<&'a TestRecord> {
        let selected: Vec<&TestRecord> = records.iter().filter(|r| self.matches(r)).collect();
        tracing::debug!(
            pattern = %self.pattern,
            number = ?self.number,
            total = records.len(),
            selected = selected.len(),
            "selected examples"
        );
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(example: u32, section: &str) -> TestRecord {
        TestRecord {
            markdown: String::new(),
            html: String::new(),
            example,
            start_line: example as usize * 10,
            end_line: example as usize * 10 + 4,
            section: section.to_string(),
            extensions: Vec::new(),
        }
    }

    fn sample() -> Vec<TestRecord> {
        vec![
            record(1, "Tabs"),
            record(2, "Emphasis_and_strong_emphasis"),
            record(3, "Links"),
            record(4, "Emphasis_and_strong_emphasis"),
            record(5, ""),
        ]
    }

    fn numbers(selected: &[&TestRecord]) -> Vec<u32> {
        selected.iter().map(|r| r.example).collect()
    }

    #[test]
    fn default_pattern_keeps_everything() {
        let records = sample();
        let selected = Selector::new(None, None).unwrap().select(&records);

        assert_eq!(numbers(&selected), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn pattern_is_case_insensitive_search() {
        let records = sample();
        let selected = Selector::new(Some("strong"), None).unwrap().select(&records);

        assert_eq!(numbers(&selected), vec![2, 4]);
    }

    #[test]
    fn pattern_is_a_regex() {
        let records = sample();
        let selected = Selector::new(Some("^(tabs|links)$"), None)
            .unwrap()
            .select(&records);

        assert_eq!(numbers(&selected), vec![1, 3]);
    }

    #[test]
    fn unmatched_pattern_yields_nothing() {
        let records = sample();
        let selected = Selector::new(Some("Footnotes"), None)
            .unwrap()
            .select(&records);

        assert!(selected.is_empty());
    }

    #[test]
    fn number_and_pattern_apply_together() {
        let records = sample();

        let hit = Selector::new(Some("emphasis"), Some(4)).unwrap().select(&records);
        assert_eq!(numbers(&hit), vec![4]);

        let miss = Selector::new(Some("links"), Some(4)).unwrap().select(&records);
        assert!(miss.is_empty());
    }

    #[test]
    fn zero_number_means_no_number_filter() {
        let records = sample();
        let selected = Selector::new(None, Some(0)).unwrap().select(&records);

        assert_eq!(selected.len(), 5);
    }

    #[test]
    fn selection_keeps_original_numbers() {
        let records = sample();
        let selected = Selector::new(None, Some(3)).unwrap().select(&records);

        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].example, 3);
        assert_eq!(selected[0].start_line, 30);
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let err = Selector::new(Some("(unclosed"), None).unwrap_err();

        assert!(err.to_string().contains("Invalid section pattern: (unclosed"));
    }
}
