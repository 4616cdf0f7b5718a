// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

pub mod config;
pub mod errors;
pub mod genetic_code;
pub mod processor;
pub mod report;
mod runner;
pub mod seq;
pub mod summary;

use crate::errors::MitoError;

pub fn run() -> Result<(), MitoError> {
    runner::run()
}
