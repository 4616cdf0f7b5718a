// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::MitoError;

pub const CONFIG_FILE_NAME: &str = ".mitoprotconfig";

/// Optional defaults read from a JSON file. Command-line values take precedence.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MitoConfig {
    pub output_prefix: Option<String>,
    pub remove_stop: Option<bool>,
    pub line_width: Option<usize>,
}

impl MitoConfig {
    pub fn from_json(text: &str) -> Result<Self, MitoError> {
        let config: MitoConfig =
            serde_json::from_str(text).map_err(|e| MitoError::Config(e.to_string()))?;
        if config.line_width == Some(0) {
            return Err(MitoError::Config(String::from(
                "line_width must be at least 1",
            )));
        }
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, MitoError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text).map_err(|e| match e {
            MitoError::Config(msg) => MitoError::Config(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }
}

/// Looks for a config file in $HOME, then in the current directory.
pub fn find_config() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        let path = PathBuf::from(home).join(CONFIG_FILE_NAME);
        if path.is_file() {
            return Some(path);
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        let path = cwd.join(CONFIG_FILE_NAME);
        if path.is_file() {
            return Some(path);
        }
    }
    None
}
