// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::warn;

use crate::seq::file::SeqFile;
use crate::seq::record::SeqRecord;

pub const DEFAULT_LINE_WIDTH: usize = 60;

pub fn read_fasta_file<P: AsRef<Path>>(path: P) -> Result<SeqFile, std::io::Error> {
    let file = File::open(path)?;
    read_fasta(BufReader::new(file))
}

pub fn read_fasta<R: BufRead>(reader: R) -> Result<SeqFile, std::io::Error> {
    let mut result: SeqFile = Vec::new();
    let mut current_record: Option<SeqRecord> = None;
    let mut skipped_lines = 0usize;

    for line in reader.lines() {
        let l: String = line?;
        if let Some(hdr) = l.strip_prefix('>') {
            if let Some(record) = current_record.take() {
                // push existing record
                result.push(record);
            }
            current_record = Some(SeqRecord::from_header(hdr, String::new()));
        } else if let Some(record) = current_record.as_mut() {
            // append line to current record's sequence, dropping any whitespace (incl. '\r')
            for chunk in l.split_whitespace() {
                record.sequence.push_str(chunk);
            }
        } else if !l.trim().is_empty() {
            skipped_lines += 1;
        }
    }
    if let Some(record) = current_record {
        result.push(record);
    }
    if skipped_lines > 0 {
        warn!("Ignored {} line(s) before the first FastA header", skipped_lines);
    }
    Ok(result)
}

/// Writes records as FastA, wrapping sequences at `line_width` columns. An empty sequence yields
/// a header line only.
pub fn write_fasta<W: Write>(
    writer: &mut W,
    records: &[SeqRecord],
    line_width: usize,
) -> Result<(), std::io::Error> {
    let width = line_width.max(1);
    for record in records {
        writeln!(writer, ">{}", record.header())?;
        for line in record.sequence.as_bytes().chunks(width) {
            writer.write_all(line)?;
            writer.write_all(b"\n")?;
        }
    }
    Ok(())
}

pub fn write_fasta_file<P: AsRef<Path>>(
    path: P,
    records: &[SeqRecord],
    line_width: usize,
) -> Result<(), std::io::Error> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_fasta(&mut writer, records, line_width)?;
    writer.flush()
}
