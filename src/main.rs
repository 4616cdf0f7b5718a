// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::process::ExitCode;

fn main() -> ExitCode {
    match mitoprot::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}
