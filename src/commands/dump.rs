//! Implementation of the `spec-extract dump` command.

use anyhow::{Context, Result};
use std::io::Write;

use super::SelectArgs;
use crate::parser::TestRecord;
use crate::report::{self, OutputFormat};

/// Arguments for the `spec-extract dump` command.
pub struct DumpArgs {
    /// Spec and filters.
    pub select: SelectArgs,
    /// Output format.
    pub format: OutputFormat,
}

pub fn execute(args: DumpArgs) -> Result<()> {
    let (doc, selector) = args.select.load()?;
    let selected = selector.select(&doc.records);

    let stdout = std::io::stdout();
    write_dump(&mut stdout.lock(), &selected, args.format)
}

/// Write the selected examples in `format`, followed by a newline.
pub fn write_dump(
    out: &mut impl Write,
    records: &[&TestRecord],
    format: OutputFormat,
) -> Result<()> {
    let rendered = report::render(records, format)?;
    out.write_all(rendered.as_bytes()).context("Failed to write examples")?;
    if !rendered.ends_with('\n') {
        writeln!(out).context("Failed to write examples")?;
    }
    Ok(())
}
