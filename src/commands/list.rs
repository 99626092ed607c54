//! Implementation of the `spec-extract list` command.

use anyhow::{Context, Result};
use std::io::Write;

use super::SelectArgs;
use crate::parser::TestRecord;
use crate::report::header;

pub fn execute(args: SelectArgs) -> Result<()> {
    let (doc, selector) = args.load()?;
    let selected = selector.select(&doc.records);

    let stdout = std::io::stdout();
    write_headers(&mut stdout.lock(), &selected)?;

    if !doc.unterminated.is_empty() {
        eprintln!(
            "Dropped {} unterminated example block{}",
            doc.unterminated.len(),
            if doc.unterminated.len() == 1 { "" } else { "s" }
        );
    }
    Ok(())
}

/// Write one header line per example.
pub fn write_headers(out: &mut impl Write, records: &[&TestRecord]) -> Result<()> {
    for record in records {
        writeln!(out, "{}", header(record)).context("Failed to write example headers")?;
    }
    Ok(())
}
