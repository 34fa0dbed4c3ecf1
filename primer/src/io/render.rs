//! Render program results to a writer as text or JSON.

use std::io::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::core::binary_table::BinaryTable;
use crate::core::person::Person;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// Write the selected person: `The oldest is: Person(...)` or a JSON object.
pub fn write_oldest<W: Write>(out: &mut W, person: &Person, format: Format) -> Result<()> {
    match format {
        Format::Text => writeln!(out, "The oldest is: {person}").context("write oldest")?,
        Format::Json => write_json_line(out, person)?,
    }
    Ok(())
}

/// Write the table as `letter = binary` lines in key order, or a JSON object.
pub fn write_table<W: Write>(out: &mut W, table: &BinaryTable, format: Format) -> Result<()> {
    match format {
        Format::Text => {
            for (letter, binary) in table {
                writeln!(out, "{letter} = {binary}").context("write table entry")?;
            }
        }
        Format::Json => write_json_line(out, table)?,
    }
    Ok(())
}

/// Serialize `value` to compact JSON with trailing newline.
fn write_json_line<W: Write, T: serde::Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer(&mut *out, value).context("serialize json")?;
    writeln!(out).context("write json")?;
    Ok(())
}
