// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::errors::MitoError;
use crate::summary::SummaryRow;

pub const CSV_HEADER: [&str; 5] = ["id", "length_nt", "gc", "length_aa", "stops"];

// The header is written explicitly so that it is present even if there are no rows.
pub fn write_summary<W: Write>(writer: W, rows: &[SummaryRow]) -> Result<(), MitoError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(CSV_HEADER)?;
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_summary_file<P: AsRef<Path>>(path: P, rows: &[SummaryRow]) -> Result<(), MitoError> {
    let file = File::create(path)?;
    write_summary(file, rows)
}
