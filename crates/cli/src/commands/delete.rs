// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use sbb_core::Database;

use super::open_db;
use crate::error::Result;

pub fn run(id: i64) -> Result<()> {
    let db = open_db()?;
    run_impl(&db, id)?;
    println!("Deleted question [{}]", id);
    Ok(())
}

/// Internal implementation that accepts db for testing.
pub(crate) fn run_impl(db: &Database, id: i64) -> Result<()> {
    let question = db.get_question(id)?;
    db.delete_question(&question)?;
    Ok(())
}

#[cfg(test)]
#[path = "delete_tests.rs"]
mod tests;
