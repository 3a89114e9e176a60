// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Answer store operations.

use rusqlite::{params, OptionalExtension, Row};

use crate::answer::{Answer, NewAnswer};
use crate::db::{parse_timestamp, timestamp_to_db, Database};
use crate::error::{Error, Result};

const ANSWER_COLUMNS: &str = "id, content, create_date, question_id";

fn answer_from_row(row: &Row<'_>) -> rusqlite::Result<Answer> {
    let created: String = row.get(2)?;
    Ok(Answer {
        id: row.get(0)?,
        content: row.get(1)?,
        create_date: parse_timestamp(&created, "create_date")?,
        question_id: row.get(3)?,
    })
}

/// Report a foreign key failure on insert as a missing parent question.
pub(crate) fn insert_error(err: rusqlite::Error, question_id: i64) -> Error {
    match &err {
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY =>
        {
            Error::QuestionMissing(question_id)
        }
        _ => Error::Database(err),
    }
}

impl Database {
    /// Store a new answer under an existing question.
    pub fn create_answer(&self, new: &NewAnswer) -> Result<Answer> {
        new.validate()?;
        if !self.question_exists(new.question_id)? {
            return Err(Error::QuestionMissing(new.question_id));
        }

        // The parent can vanish between the check and the insert when the
        // caller is not inside `Database::transaction`.
        self.conn
            .execute(
                "INSERT INTO answer (content, create_date, question_id) VALUES (?1, ?2, ?3)",
                params![
                    new.content,
                    timestamp_to_db(&new.create_date),
                    new.question_id
                ],
            )
            .map_err(|e| insert_error(e, new.question_id))?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, question_id = new.question_id, "created answer");

        Ok(Answer {
            id,
            content: new.content.clone(),
            create_date: new.create_date,
            question_id: new.question_id,
        })
    }

    /// Get an answer by id. Absent is not an error.
    pub fn find_answer(&self, id: i64) -> Result<Option<Answer>> {
        let sql = format!("SELECT {ANSWER_COLUMNS} FROM answer WHERE id = ?1");
        let answer = self
            .conn
            .query_row(&sql, params![id], answer_from_row)
            .optional()?;
        Ok(answer)
    }

    /// Get an answer by id, failing with [`Error::AnswerNotFound`] when absent.
    pub fn get_answer(&self, id: i64) -> Result<Answer> {
        self.find_answer(id)?.ok_or(Error::AnswerNotFound(id))
    }

    /// Get all answers to a question, oldest first.
    pub fn find_answers_by_question(&self, question_id: i64) -> Result<Vec<Answer>> {
        let sql = format!("SELECT {ANSWER_COLUMNS} FROM answer WHERE question_id = ?1 ORDER BY id");
        let mut stmt = self.conn.prepare(&sql)?;
        let answers = stmt
            .query_map(params![question_id], answer_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(answers)
    }

    /// Number of answers to a question.
    pub fn count_answers_for(&self, question_id: i64) -> Result<u64> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM answer WHERE question_id = ?1",
            params![question_id],
            |row| row.get(0),
        )?;
        Ok(u64::try_from(count).unwrap_or(0))
    }

    /// Delete every answer.
    pub fn delete_all_answers(&self) -> Result<u64> {
        let affected = self.conn.execute("DELETE FROM answer", [])?;
        tracing::info!(count = affected, "deleted all answers");
        Ok(affected as u64)
    }
}

#[cfg(test)]
#[path = "answers_tests.rs"]
mod tests;
