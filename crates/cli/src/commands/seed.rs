// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::NaiveDateTime;
use sbb_core::{Database, NewQuestion};

use super::open_db;
use crate::error::Result;

const SEED_CONTENT: &str = "내용무";

/// Subject of the `index`-th seeded question.
pub(crate) fn seed_subject(index: u32) -> String {
    format!("테스트 데이터입니다:[{:03}]", index)
}

pub fn run(count: u32) -> Result<()> {
    let db = open_db()?;
    let created = run_impl(&db, count, sbb_core::now())?;
    println!("Created {} questions", created);
    Ok(())
}

/// Internal implementation that accepts db for testing.
///
/// All rows are inserted sequentially in a single transaction.
pub(crate) fn run_impl(db: &Database, count: u32, create_date: NaiveDateTime) -> Result<u32> {
    db.transaction(|db| {
        for i in 1..=count {
            db.create_question(&NewQuestion::new(seed_subject(i), SEED_CONTENT, create_date))?;
        }
        Ok(())
    })?;
    tracing::info!(count, "seeded questions");
    Ok(count)
}

#[cfg(test)]
#[path = "seed_tests.rs"]
mod tests;
