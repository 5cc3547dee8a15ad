// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Shared path utilities for the tally CLI.

use std::path::PathBuf;

use miette::{Result, miette};

/// Directory for tally state files.
///
/// Returns the `~/.tally` directory where the CLI stores the REPL
/// history file.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn tally_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| miette!("Could not determine home directory"))?;
    Ok(home.join(".tally"))
}
