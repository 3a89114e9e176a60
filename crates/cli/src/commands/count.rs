// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use sbb_core::Database;

use super::open_db;
use crate::error::Result;

pub fn run() -> Result<()> {
    let db = open_db()?;
    println!("{}", run_impl(&db)?);
    Ok(())
}

pub(crate) fn run_impl(db: &Database) -> Result<u64> {
    Ok(db.count_questions()?)
}

#[cfg(test)]
#[path = "count_tests.rs"]
mod tests;
