// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use sbb_core::{Database, Question};

use super::open_db;
use crate::error::{Error, Result};

pub fn run(id: i64, attr: &str, value: &str) -> Result<()> {
    let db = open_db()?;
    let updated = run_impl(&db, id, attr, value)?;
    println!("Updated {} of [{}]", attr.to_lowercase(), updated.id);
    Ok(())
}

/// Internal implementation that accepts db for testing.
///
/// Only subject and content are editable; id and create_date never change.
pub(crate) fn run_impl(db: &Database, id: i64, attr: &str, value: &str) -> Result<Question> {
    let question = db.get_question(id)?;

    let updated = match attr.to_lowercase().as_str() {
        "subject" => question.with_subject(value),
        "content" => question.with_content(value),
        _ => {
            return Err(Error::UnknownAttribute {
                attr: attr.to_string(),
            })
        }
    };

    db.update_question(&updated)?;
    Ok(updated)
}

#[cfg(test)]
#[path = "edit_tests.rs"]
mod tests;
