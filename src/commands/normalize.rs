//! Implementation of the `spec-extract normalize` command.
//!
//! Copies its input to its output unchanged, so test runners can check how
//! text survives a trip through the tool.

use anyhow::{Context, Result};
use std::io::{Read, Write};

pub fn execute() -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    passthrough(stdin.lock(), &mut stdout.lock())
}

/// Copy UTF-8 text from `input` to `output`.
pub fn passthrough(mut input: impl Read, output: &mut impl Write) -> Result<()> {
    let mut text = String::new();
    input
        .read_to_string(&mut text)
        .context("Failed to read UTF-8 text from stdin")?;
    output
        .write_all(text.as_bytes())
        .context("Failed to write to stdout")?;
    output.flush().context("Failed to write to stdout")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_text_unchanged() {
        let input = "# Title\r\n→tab\n\nlast line without newline";
        let mut out = Vec::new();

        passthrough(input.as_bytes(), &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), input);
    }

    #[test]
    fn rejects_invalid_utf8() {
        let input: &[u8] = &[0x66, 0x6f, 0xff, 0x6f];
        let mut out = Vec::new();

        let err = passthrough(input, &mut out).unwrap_err();

        assert!(err.to_string().contains("Failed to read UTF-8 text"));
        assert!(out.is_empty());
    }
}
