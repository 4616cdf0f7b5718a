// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{fmt, io, path::PathBuf, process::ExitCode};

#[derive(Debug)]
pub enum MitoError {
    InputNotFound(PathBuf),
    EmptyInput(PathBuf),
    Io(io::Error),
    Csv(csv::Error),
    Config(String),
    Translation(String),
}

impl MitoError {
    // InputNotFound and EmptyInput get their own codes so that scripts can tell them apart from
    // genuine failures.
    pub fn status(&self) -> u8 {
        match self {
            MitoError::InputNotFound(_) => 2,
            MitoError::EmptyInput(_) => 3,
            _ => 1,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.status())
    }
}

// These allow conversion to MitoError, required for '?' to work.

impl From<io::Error> for MitoError {
    fn from(e: io::Error) -> Self {
        MitoError::Io(e)
    }
}

impl From<csv::Error> for MitoError {
    fn from(e: csv::Error) -> Self {
        MitoError::Csv(e)
    }
}

impl fmt::Display for MitoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MitoError::InputNotFound(path) => {
                write!(f, "FASTA file '{}' does not exist", path.display())
            }
            MitoError::EmptyInput(path) => {
                write!(f, "No sequences found in {}", path.display())
            }
            MitoError::Io(e) => write!(f, "I/O error: {}", e),
            MitoError::Csv(e) => write!(f, "CSV error: {}", e),
            MitoError::Config(msg) => write!(f, "Config error: {}", msg),
            MitoError::Translation(msg) => write!(f, "Translation error: {}", msg),
        }
    }
}

impl std::error::Error for MitoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MitoError::Io(e) => Some(e),
            MitoError::Csv(e) => Some(e),
            _ => None,
        }
    }
}
