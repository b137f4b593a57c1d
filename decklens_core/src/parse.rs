//! Card list parsing.
//!
//! The card list arrives as delimited text, one card per line, fields
//! separated by `;` with optional surrounding whitespace. This module
//! reads the whole stream into raw [`CardRecord`]s; end of input is the
//! normal stop condition, not an error.

use crate::{CardRecord, Result};
use csv::{ReaderBuilder, Trim};
use std::io::Read;

/// Read every record from `reader` until end of input.
///
/// Records keep their arrival order. Quoting is disabled so the delimiter
/// is the only structure a line has, and the field count is unconstrained
/// here; consumers fail on access when a record is too short. Blank lines
/// are skipped.
pub fn read_records<R: Read>(reader: R, delimiter: u8) -> Result<Vec<CardRecord>> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in csv_reader.records() {
        let raw = result?;
        let line = raw.position().map(|p| p.line()).unwrap_or(0);
        let fields = raw.iter().map(str::to_string).collect();
        records.push(CardRecord::new(fields, line));
    }

    tracing::debug!("Read {} records from card list", records.len());
    Ok(records)
}
