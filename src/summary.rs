// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use log::{debug, warn};
use serde::{Serialize, Serializer};

use crate::errors::MitoError;
use crate::genetic_code::{count_stops, translate};
use crate::seq::record::SeqRecord;

pub const PROTEIN_ID_SUFFIX: &str = "_prot";

/// One line of the CSV summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub id: String,
    pub length_nt: usize,
    /// Unrounded; rounded to two decimals on output.
    #[serde(serialize_with = "two_decimals")]
    pub gc: f64,
    pub length_aa: usize,
    pub stops: usize,
}

// The CSV always shows the GC percentage with two decimals (0.00, 33.33, 100.00). The formatter
// rounds the exact value half to even, so 3.125 is written as 3.12.
fn two_decimals<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{:.2}", value))
}

/// Everything derived from a single input record.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub row: SummaryRow,
    pub protein: SeqRecord,
}

/// GC percentage of `seq`, unrounded. 0 for an empty sequence. Only upper-case G and C count, so
/// soft-masked (lower-case) stretches do not contribute.
pub fn gc_percent(seq: &str) -> f64 {
    if seq.is_empty() {
        return 0.0;
    }
    let gc = seq.bytes().filter(|b| matches!(b, b'G' | b'C')).count();
    gc as f64 / seq.len() as f64 * 100.0
}

pub fn analyze_record(record: &SeqRecord, remove_stop: bool) -> Result<Analysis, MitoError> {
    let length_nt = record.len();
    if length_nt % 3 != 0 {
        warn!(
            "{}: length {} is not a multiple of three, ignoring trailing partial codon",
            record.id, length_nt
        );
    }
    let gc = gc_percent(&record.sequence);

    // Stops are always counted on the full translation, trimmed or not.
    let full = translate(&record.sequence, false)?;
    let stops = count_stops(&full);
    let protein = if remove_stop {
        translate(&record.sequence, true)?
    } else {
        full
    };
    let length_aa = protein.len();
    debug!(
        "{}: {} nt, GC {:.2}%, {} aa, {} stop(s)",
        record.id, length_nt, gc, length_aa, stops
    );

    Ok(Analysis {
        row: SummaryRow {
            id: record.id.clone(),
            length_nt,
            gc,
            length_aa,
            stops,
        },
        protein: SeqRecord {
            id: format!("{}{}", record.id, PROTEIN_ID_SUFFIX),
            description: format!("translation | length: {} aa | stops: {}", length_aa, stops),
            sequence: protein,
        },
    })
}
