// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::path::{Path, PathBuf};

use mitoprot::processor::{process, Options, RunSummary};

/// A fresh (empty) scratch directory under the system temp dir.
#[allow(dead_code)]
pub fn scratch_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("mitoprot-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

/// Writes `fasta` to `<dir>/input.fas` and returns its path.
#[allow(dead_code)]
pub fn write_input(dir: &Path, fasta: &str) -> PathBuf {
    std::fs::create_dir_all(dir).expect("create scratch dir");
    let path = dir.join("input.fas");
    std::fs::write(&path, fasta).expect("write input");
    path
}

#[allow(dead_code)]
pub fn run_on(input: &Path, prefix: &Path, remove_stop: bool) -> RunSummary {
    let mut opts = Options::new(input);
    opts.output_prefix = prefix.display().to_string();
    opts.remove_stop = remove_stop;
    process(&opts).expect("process")
}

#[allow(dead_code)]
pub fn read_outputs(run: &RunSummary) -> (String, String) {
    let csv = std::fs::read_to_string(&run.summary_path).expect("read summary");
    let fasta = std::fs::read_to_string(&run.proteins_path).expect("read proteins");
    (csv, fasta)
}
