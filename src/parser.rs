//! Example extraction for spec documents.
//!
//! This module scans a spec document once, top to bottom, and reconstructs
//! every fenced example block as a [`TestRecord`]. Blocks that are opened but
//! never closed produce no record and are reported as [`UnterminatedBlock`]s.

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Fence delimiting an example block: exactly 32 backticks.
pub const FENCE: &str = "````````````````````````````````";

/// Glyph that stands for a literal tab inside example blocks.
pub const TAB_GLYPH: char = '→';

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#+ ").unwrap());

/// A single example extracted from a spec document.
///
/// Field names are the interchange format read by downstream test runners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRecord {
    /// Input section, line terminators preserved.
    pub markdown: String,
    /// Expected output section, line terminators preserved.
    pub html: String,
    /// 1-based example number in document order.
    pub example: u32,
    /// Line number of the opening fence (1-indexed).
    pub start_line: usize,
    /// Line number of the closing fence (1-indexed).
    pub end_line: usize,
    /// Nearest preceding heading, or the document base name.
    pub section: String,
    /// Extension names declared on the opening fence.
    pub extensions: Vec<String>,
}

/// Part of a block that was being read when the block was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockStage {
    /// The `.` separator was never reached.
    Input,
    /// The separator was seen but the closing fence was not.
    Output,
}

/// Why a block was dropped without producing a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DropCause {
    /// The document ended inside the block.
    EndOfDocument,
    /// A new opening fence started another block.
    Reopened,
}

/// An example block that was opened but never closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnterminatedBlock {
    /// Line number of the opening fence (1-indexed).
    pub start_line: usize,
    pub stage: BlockStage,
    pub cause: DropCause,
}

/// Result of one extraction pass over a document.
#[derive(Debug, Default)]
pub struct Extraction {
    /// Completed examples in document order.
    pub records: Vec<TestRecord>,
    /// Blocks dropped because they were never closed.
    pub unterminated: Vec<UnterminatedBlock>,
    /// Total number of lines in the document.
    pub line_count: usize,
}

/// A parsed spec document.
#[derive(Debug)]
pub struct SpecDoc {
    /// Path to the source file.
    pub path: PathBuf,
    /// File name without extension, used as the fallback section.
    pub base_name: String,
    /// Completed examples in document order.
    pub records: Vec<TestRecord>,
    /// Blocks dropped because they were never closed.
    pub unterminated: Vec<UnterminatedBlock>,
    /// Total number of lines in the document.
    pub line_count: usize,
}

impl SpecDoc {
    /// Parse a spec file into its examples.
    pub fn parse(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read spec file: {}", path.display()))?;
        let doc = Self::parse_content(path.to_path_buf(), &content)?;
        tracing::info!(
            path = %path.display(),
            examples = doc.records.len(),
            lines = doc.line_count,
            "parsed spec"
        );
        Ok(doc)
    }

    /// Parse spec content; the base name is taken from the path stem.
    pub fn parse_content(path: PathBuf, content: &str) -> Result<Self> {
        let base_name = base_name(&path);
        let Extraction {
            records,
            unterminated,
            line_count,
        } = extract(content, &base_name);

        Ok(SpecDoc {
            path,
            base_name,
            records,
            unterminated,
            line_count,
        })
    }
}

/// File stem of `path`, or an empty string when it has none.
pub fn base_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Extract all completed examples from `content`.
pub fn extract_tests(content: &str, base_name: &str) -> Vec<TestRecord> {
    extract(content, base_name).records
}

/// Run one extraction pass over `content`.
///
/// `base_name` labels examples that appear before any heading.
pub fn extract(content: &str, base_name: &str) -> Extraction {
    let mut extractor = Extractor::new(base_name);
    for line in content.split_inclusive('\n') {
        extractor.feed(line);
    }
    extractor.finish()
}

/// Classification of a single document line.
#[derive(Debug, PartialEq, Eq)]
enum LineKind<'a> {
    /// Opening fence; holds the text after the ` example` marker.
    Opener(&'a str),
    Closer,
    Separator,
    /// Heading text, trimmed.
    Heading(&'a str),
    Other,
}

fn classify(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();

    if let Some(rest) = trimmed.strip_prefix(FENCE) {
        if let Some(extensions) = rest
            .strip_prefix(" example")
            .or_else(|| rest.strip_prefix(".example"))
        {
            return LineKind::Opener(extensions);
        }
        if rest.is_empty() {
            return LineKind::Closer;
        }
    }

    if trimmed == "." {
        return LineKind::Separator;
    }

    if let Some(m) = HEADING_RE.find(line) {
        return LineKind::Heading(line[m.end()..].trim());
    }

    LineKind::Other
}

/// Accumulators for the block currently being read.
#[derive(Debug)]
struct Block {
    start_line: usize,
    extensions: Vec<String>,
    markdown: String,
    html: String,
}

#[derive(Debug, Default)]
enum State {
    /// Scanning prose between blocks.
    #[default]
    Text,
    /// Between the opening fence and the `.` separator.
    Input(Block),
    /// Between the `.` separator and the closing fence.
    Output(Block),
}

/// Single-pass extraction state, local to one [`extract`] call.
struct Extractor<'a> {
    base_name: &'a str,
    line_number: usize,
    example: u32,
    heading: String,
    state: State,
    records: Vec<TestRecord>,
    unterminated: Vec<UnterminatedBlock>,
}

impl<'a> Extractor<'a> {
    fn new(base_name: &'a str) -> Self {
        Self {
            base_name,
            line_number: 0,
            example: 0,
            heading: String::new(),
            state: State::Text,
            records: Vec::new(),
            unterminated: Vec::new(),
        }
    }

    fn feed(&mut self, line: &str) {
        self.line_number += 1;
        let kind = classify(line);
        self.state = match std::mem::take(&mut self.state) {
            State::Text => self.on_text(kind),
            State::Input(block) => self.on_input(block, line, kind),
            State::Output(block) => self.on_output(block, line, kind),
        };
    }

    fn on_text(&mut self, kind: LineKind<'_>) -> State {
        match kind {
            LineKind::Opener(extensions) => self.open(extensions),
            LineKind::Heading(text) => {
                self.heading = text.to_string();
                State::Text
            }
            _ => State::Text,
        }
    }

    fn on_input(&mut self, mut block: Block, line: &str, kind: LineKind<'_>) -> State {
        match kind {
            LineKind::Opener(extensions) => {
                self.drop_block(block, BlockStage::Input, DropCause::Reopened);
                self.open(extensions)
            }
            LineKind::Separator => State::Output(block),
            _ => {
                block.markdown.push_str(line);
                State::Input(block)
            }
        }
    }

    fn on_output(&mut self, mut block: Block, line: &str, kind: LineKind<'_>) -> State {
        match kind {
            LineKind::Opener(extensions) => {
                self.drop_block(block, BlockStage::Output, DropCause::Reopened);
                self.open(extensions)
            }
            LineKind::Closer => {
                self.close(block);
                State::Text
            }
            _ => {
                block.html.push_str(line);
                State::Output(block)
            }
        }
    }

    fn open(&self, extensions: &str) -> State {
        State::Input(Block {
            start_line: self.line_number,
            extensions: extensions.split_whitespace().map(String::from).collect(),
            markdown: String::new(),
            html: String::new(),
        })
    }

    fn close(&mut self, block: Block) {
        self.example += 1;
        let section = if self.heading.is_empty() {
            self.base_name
        } else {
            self.heading.as_str()
        };

        let record = TestRecord {
            markdown: block.markdown.replace(TAB_GLYPH, "\t"),
            html: block.html.replace(TAB_GLYPH, "\t"),
            example: self.example,
            start_line: block.start_line,
            end_line: self.line_number,
            section: section.replace('-', "_"),
            extensions: block.extensions,
        };
        tracing::debug!(
            example = record.example,
            start_line = record.start_line,
            end_line = record.end_line,
            section = %record.section,
            "extracted example"
        );
        self.records.push(record);
    }

    fn drop_block(&mut self, block: Block, stage: BlockStage, cause: DropCause) {
        tracing::warn!(
            start_line = block.start_line,
            ?stage,
            ?cause,
            "dropping unterminated example block"
        );
        self.unterminated.push(UnterminatedBlock {
            start_line: block.start_line,
            stage,
            cause,
        });
    }

    fn finish(mut self) -> Extraction {
        match std::mem::take(&mut self.state) {
            State::Text => {}
            State::Input(block) => {
                self.drop_block(block, BlockStage::Input, DropCause::EndOfDocument)
            }
            State::Output(block) => {
                self.drop_block(block, BlockStage::Output, DropCause::EndOfDocument)
            }
        }

        Extraction {
            records: self.records,
            unterminated: self.unterminated,
            line_count: self.line_number,
        }
    }
}
