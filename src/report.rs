//! Rendering of selected examples.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::parser::TestRecord;

/// Structured formats for dumping examples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON array
    #[default]
    Json,
    /// YAML sequence
    Yaml,
}

/// One-line summary of an example: number, line range and section.
pub fn header(record: &TestRecord) -> String {
    format!(
        "Example {} (lines {}-{}) {}",
        record.example, record.start_line, record.end_line, record.section
    )
}

/// Render examples as a JSON array indented by two spaces.
pub fn to_json(records: &[&TestRecord]) -> Result<String> {
    serde_json::to_string_pretty(records).context("Failed to serialize examples as JSON")
}

/// Render examples as a YAML sequence.
pub fn to_yaml(records: &[&TestRecord]) -> Result<String> {
    serde_yaml::to_string(records).context("Failed to serialize examples as YAML")
}

/// Render examples in the given structured format.
pub fn render(records: &[&TestRecord], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(records),
        OutputFormat::Yaml => to_yaml(records),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> TestRecord {
        TestRecord {
            markdown: "\tfoo\n".to_string(),
            html: "<pre><code>foo\n</code></pre>\n".to_string(),
            example: 7,
            start_line: 120,
            end_line: 124,
            section: "Tabs".to_string(),
            extensions: vec!["gfm".to_string()],
        }
    }

    #[test]
    fn header_shows_number_range_and_section() {
        assert_eq!(header(&record()), "Example 7 (lines 120-124) Tabs");
    }

    #[test]
    fn json_output_is_valid() {
        let record = record();
        let json = to_json(&[&record]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.as_array().unwrap().len(), 1);
        assert_eq!(parsed[0]["markdown"], "\tfoo\n");
        assert_eq!(parsed[0]["example"], 7);
        assert_eq!(parsed[0]["section"], "Tabs");
        assert_eq!(parsed[0]["extensions"][0], "gfm");
    }

    #[test]
    fn json_output_uses_two_space_indent() {
        let record = record();
        let json = to_json(&[&record]).unwrap();

        assert!(json.starts_with("[\n  {\n    \"markdown\": "));
    }

    #[test]
    fn json_output_for_no_examples_is_empty_array() {
        assert_eq!(to_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn yaml_output_reads_back() {
        let record = record();
        let yaml = render(&[&record], OutputFormat::Yaml).unwrap();
        let parsed: Vec<TestRecord> = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(parsed, vec![record]);
    }
}
