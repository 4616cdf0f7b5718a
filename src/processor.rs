// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::path::{Path, PathBuf};

use log::info;

use crate::errors::MitoError;
use crate::report::write_summary_file;
use crate::seq::fasta::{read_fasta_file, write_fasta_file, DEFAULT_LINE_WIDTH};
use crate::summary::{analyze_record, SummaryRow};

pub const DEFAULT_OUTPUT_PREFIX: &str = "results/COX1";
pub const SUMMARY_SUFFIX: &str = "_Mitoresumen.csv";
pub const PROTEINS_SUFFIX: &str = "_Mitoproteins.fasta";

#[derive(Debug, Clone)]
pub struct Options {
    pub input: PathBuf,
    pub output_prefix: String,
    pub remove_stop: bool,
    pub line_width: usize,
}

impl Options {
    pub fn new<P: Into<PathBuf>>(input: P) -> Self {
        Options {
            input: input.into(),
            output_prefix: String::from(DEFAULT_OUTPUT_PREFIX),
            remove_stop: false,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }

    pub fn summary_path(&self) -> PathBuf {
        PathBuf::from(format!("{}{}", self.output_prefix, SUMMARY_SUFFIX))
    }

    pub fn proteins_path(&self) -> PathBuf {
        PathBuf::from(format!("{}{}", self.output_prefix, PROTEINS_SUFFIX))
    }
}

#[derive(Debug)]
pub struct RunSummary {
    pub num_records: usize,
    pub summary_path: PathBuf,
    pub proteins_path: PathBuf,
    pub total_stops: usize,
    pub last_record_stops: usize,
    pub rows: Vec<SummaryRow>,
}

fn create_output_dir(prefix: &str) -> Result<(), MitoError> {
    if let Some(dir) = Path::new(prefix).parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            info!("Creating output directory {}", dir.display());
            std::fs::create_dir_all(dir)?;
        }
    }
    Ok(())
}

/// Reads the input FastA, analyses every record, then writes the CSV summary and the protein
/// FastA. Nothing is written unless every record was analysed successfully.
pub fn process(opts: &Options) -> Result<RunSummary, MitoError> {
    if !opts.input.is_file() {
        return Err(MitoError::InputNotFound(opts.input.clone()));
    }

    info!("Reading {}", opts.input.display());
    let records = read_fasta_file(&opts.input)?;
    if records.is_empty() {
        return Err(MitoError::EmptyInput(opts.input.clone()));
    }
    info!(
        "Analysing {} record(s) (remove_stop: {})",
        records.len(),
        opts.remove_stop
    );

    let mut rows: Vec<SummaryRow> = Vec::with_capacity(records.len());
    let mut proteins = Vec::with_capacity(records.len());
    for record in &records {
        let analysis = analyze_record(record, opts.remove_stop)?;
        rows.push(analysis.row);
        proteins.push(analysis.protein);
    }

    create_output_dir(&opts.output_prefix)?;
    let summary_path = opts.summary_path();
    let proteins_path = opts.proteins_path();
    info!("Writing summary to {}", summary_path.display());
    write_summary_file(&summary_path, &rows)?;
    info!("Writing proteins to {}", proteins_path.display());
    write_fasta_file(&proteins_path, &proteins, opts.line_width)?;

    Ok(RunSummary {
        num_records: records.len(),
        summary_path,
        proteins_path,
        total_stops: rows.iter().map(|r| r.stops).sum(),
        last_record_stops: rows.last().map_or(0, |r| r.stops),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_paths() {
        let opts = Options::new("in.fas");
        assert_eq!(
            opts.summary_path(),
            PathBuf::from("results/COX1_Mitoresumen.csv")
        );
        assert_eq!(
            opts.proteins_path(),
            PathBuf::from("results/COX1_Mitoproteins.fasta")
        );
    }

    #[test]
    fn test_missing_input() {
        let opts = Options::new("data/no-such-file.fas");
        assert!(matches!(process(&opts), Err(MitoError::InputNotFound(_))));
    }

    #[test]
    fn test_directory_is_not_an_input() {
        let opts = Options::new("data");
        assert!(matches!(process(&opts), Err(MitoError::InputNotFound(_))));
    }

    #[test]
    fn test_empty_input_writes_nothing() {
        let mut dir = std::env::temp_dir();
        dir.push("mitoprot-unit-empty");
        let _ = std::fs::remove_dir_all(&dir);
        let mut opts = Options::new("data/empty.fas");
        opts.output_prefix = format!("{}/out", dir.display());
        assert!(matches!(process(&opts), Err(MitoError::EmptyInput(_))));
        assert!(!dir.exists());
    }

    #[test]
    fn test_process_test2() {
        let mut dir = std::env::temp_dir();
        dir.push("mitoprot-unit-test2");
        let _ = std::fs::remove_dir_all(&dir);
        let mut opts = Options::new("data/test2.fas");
        opts.output_prefix = format!("{}/nested/MT", dir.display());

        let run = process(&opts).unwrap();
        assert_eq!(run.num_records, 3);
        assert_eq!(run.total_stops, 2);
        assert_eq!(run.last_record_stops, 0);
        let ids: Vec<&str> = run.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["MT001", "MT002", "MT003"]);
        assert!(run.summary_path.is_file());
        assert!(run.proteins_path.is_file());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
