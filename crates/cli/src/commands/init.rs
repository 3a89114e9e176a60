// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use sbb_core::Database;

use crate::config::{get_db_path, init_work_dir, write_gitignore, Config};
use crate::error::Result;

pub fn run(database: Option<String>) -> Result<()> {
    let target_path = std::env::current_dir()?;
    run_impl(&target_path, database)
}

/// Internal implementation that accepts the target directory for testing.
pub(crate) fn run_impl(target_path: &Path, database: Option<String>) -> Result<()> {
    let work_dir = init_work_dir(target_path, database)?;

    // Create the schema now so later commands never race on it.
    let config = Config::load(&work_dir)?;
    let db_path = get_db_path(&work_dir, &config);
    Database::open(&db_path)?;

    write_gitignore(&work_dir)?;

    tracing::info!(work_dir = %work_dir.display(), "initialized board");
    println!("Initialized board at {}", work_dir.display());
    println!("Database: {}", db_path.display());
    Ok(())
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
