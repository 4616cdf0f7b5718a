// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::path::PathBuf;

use log::info;

use clap::Parser;

use crate::config::{find_config, MitoConfig};
use crate::errors::MitoError;
use crate::genetic_code::{NCBI_TABLE_ID, TABLE_NAME};
use crate::processor::{process, Options, RunSummary, DEFAULT_OUTPUT_PREFIX};
use crate::seq::fasta::DEFAULT_LINE_WIDTH;

/// Length, %GC, vertebrate mitochondrial translation and stop codons of FastA sequences
#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
pub struct Cli {
    /// Input FastA file (e.g. dbCOX1.fasta)
    #[arg(short, long)]
    input: PathBuf,

    /// Prefix for the output files
    #[arg(short, long = "output_prefix",
        help = "Prefix for the output files; default: results/COX1",
    )]
    output_prefix: Option<String>,

    /// Stop translating at the first stop codon (which is dropped)
    #[arg(long = "remove_stop", conflicts_with = "keep_stop")]
    remove_stop: bool,

    /// Keep stop codons even if the config file sets remove_stop
    #[arg(long = "keep_stop")]
    keep_stop: bool,

    /// Line width of the protein FastA
    #[arg(short = 'w', long = "line-width",
        value_parser = clap::value_parser!(u16).range(1..),
        help = "Line width of the protein FastA; default: 60",
    )]
    line_width: Option<u16>,

    /// Config file (JSON); by default ~/.mitoprotconfig or ./.mitoprotconfig
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Cli {
    // Command line > config file > built-in defaults
    fn into_options(self, config: MitoConfig) -> Options {
        let mut opts = Options::new(self.input);
        opts.output_prefix = self
            .output_prefix
            .or(config.output_prefix)
            .unwrap_or_else(|| String::from(DEFAULT_OUTPUT_PREFIX));
        opts.remove_stop = match (self.remove_stop, self.keep_stop) {
            (true, _) => true,
            (false, true) => false,
            (false, false) => config.remove_stop.unwrap_or(false),
        };
        opts.line_width = self
            .line_width
            .map(usize::from)
            .or(config.line_width)
            .unwrap_or(DEFAULT_LINE_WIDTH);
        opts
    }
}

fn load_config(explicit: Option<&PathBuf>) -> Result<MitoConfig, MitoError> {
    let path = match explicit {
        Some(path) => Some(path.clone()),
        None => find_config(),
    };
    match path {
        Some(path) => {
            info!("Reading config from {}", path.display());
            MitoConfig::from_file(&path)
        }
        None => Ok(MitoConfig::default()),
    }
}

fn report(run: &RunSummary) {
    println!();
    println!("Analysis results");
    println!("Analysed {} sequences.", run.num_records);
    println!("Summary saved to: {}", run.summary_path.display());
    println!("Translated proteins in: {}", run.proteins_path.display());
    println!(
        "STOP codons detected (before --remove_stop): {}",
        run.total_stops
    );
    println!("STOP codons in the last sequence: {}", run.last_record_stops);
}

pub fn run() -> Result<(), MitoError> {
    env_logger::init();
    info!("Starting log");

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    let opts = cli.into_options(config);
    info!(
        "Translating with NCBI table {} ({})",
        NCBI_TABLE_ID, TABLE_NAME
    );

    let run = process(&opts)?;
    report(&run);
    Ok(())
}
