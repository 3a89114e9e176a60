// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Question store operations.
//!
//! Lists are ordered by ascending id, which is insertion order. Single-row
//! lookups that can match several rows return the lowest id.

use rusqlite::{params, OptionalExtension, Row};

use crate::db::{parse_timestamp, timestamp_to_db, Database};
use crate::error::{Error, Result};
use crate::pattern::like_to_glob;
use crate::question::{NewQuestion, Question};

const QUESTION_COLUMNS: &str = "id, subject, content, create_date";

fn question_from_row(row: &Row<'_>) -> rusqlite::Result<Question> {
    let created: String = row.get(3)?;
    Ok(Question {
        id: row.get(0)?,
        subject: row.get(1)?,
        content: row.get(2)?,
        create_date: parse_timestamp(&created, "create_date")?,
    })
}

impl Database {
    /// Store a new question and return it with its assigned id.
    pub fn create_question(&self, new: &NewQuestion) -> Result<Question> {
        new.validate()?;
        self.conn.execute(
            "INSERT INTO question (subject, content, create_date) VALUES (?1, ?2, ?3)",
            params![new.subject, new.content, timestamp_to_db(&new.create_date)],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, "created question");

        Ok(Question {
            id,
            subject: new.subject.clone(),
            content: new.content.clone(),
            create_date: new.create_date,
        })
    }

    /// Get a question by id. Absent is not an error.
    pub fn find_question(&self, id: i64) -> Result<Option<Question>> {
        let sql = format!("SELECT {QUESTION_COLUMNS} FROM question WHERE id = ?1");
        let question = self
            .conn
            .query_row(&sql, params![id], question_from_row)
            .optional()?;
        Ok(question)
    }

    /// Get a question by id, failing with [`Error::QuestionNotFound`] when absent.
    pub fn get_question(&self, id: i64) -> Result<Question> {
        self.find_question(id)?
            .ok_or(Error::QuestionNotFound(id))
    }

    /// Check if a question exists.
    pub fn question_exists(&self, id: i64) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM question WHERE id = ?1",
            params![id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Get all questions.
    pub fn find_all_questions(&self) -> Result<Vec<Question>> {
        let sql = format!("SELECT {QUESTION_COLUMNS} FROM question ORDER BY id");
        let mut stmt = self.conn.prepare(&sql)?;
        let questions = stmt
            .query_map([], question_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(questions)
    }

    /// Find a question whose subject matches exactly.
    pub fn find_question_by_subject(&self, subject: &str) -> Result<Option<Question>> {
        let sql = format!(
            "SELECT {QUESTION_COLUMNS} FROM question WHERE subject = ?1 ORDER BY id LIMIT 1"
        );
        let question = self
            .conn
            .query_row(&sql, params![subject], question_from_row)
            .optional()?;
        Ok(question)
    }

    /// Find a question whose subject and content both match exactly.
    pub fn find_question_by_subject_and_content(
        &self,
        subject: &str,
        content: &str,
    ) -> Result<Option<Question>> {
        let sql = format!(
            "SELECT {QUESTION_COLUMNS} FROM question
             WHERE subject = ?1 AND content = ?2 ORDER BY id LIMIT 1"
        );
        let question = self
            .conn
            .query_row(&sql, params![subject, content], question_from_row)
            .optional()?;
        Ok(question)
    }

    /// Find questions whose subject matches a `LIKE` pattern (case-sensitive).
    ///
    /// See [`crate::pattern`] for the pattern syntax.
    pub fn find_questions_by_subject_like(&self, pattern: &str) -> Result<Vec<Question>> {
        let sql = format!("SELECT {QUESTION_COLUMNS} FROM question WHERE subject GLOB ?1 ORDER BY id");
        let mut stmt = self.conn.prepare(&sql)?;
        let questions = stmt
            .query_map(params![like_to_glob(pattern)], question_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(questions)
    }

    /// Persist subject, content and creation time of an existing question.
    pub fn update_question(&self, question: &Question) -> Result<()> {
        question.validate()?;
        let affected = self.conn.execute(
            "UPDATE question SET subject = ?1, content = ?2, create_date = ?3 WHERE id = ?4",
            params![
                question.subject,
                question.content,
                timestamp_to_db(&question.create_date),
                question.id,
            ],
        )?;

        if affected == 0 {
            return Err(Error::QuestionNotFound(question.id));
        }
        tracing::debug!(id = question.id, "updated question");
        Ok(())
    }

    /// Delete a question that has no answers.
    pub fn delete_question(&self, question: &Question) -> Result<()> {
        let answers = self.count_answers_for(question.id)?;
        if answers > 0 {
            return Err(Error::QuestionHasAnswers {
                id: question.id,
                answers,
            });
        }

        let affected = self
            .conn
            .execute("DELETE FROM question WHERE id = ?1", params![question.id])?;

        if affected == 0 {
            return Err(Error::QuestionNotFound(question.id));
        }
        tracing::debug!(id = question.id, "deleted question");
        Ok(())
    }

    /// Number of stored questions.
    pub fn count_questions(&self) -> Result<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM question", [], |row| row.get(0))?;
        Ok(u64::try_from(count).unwrap_or(0))
    }

    /// Delete every question. Answers must be cleared first.
    pub fn delete_all_questions(&self) -> Result<u64> {
        let blocking: Option<(i64, i64)> = self
            .conn
            .query_row(
                "SELECT question_id, COUNT(*) FROM answer
                 GROUP BY question_id ORDER BY question_id LIMIT 1",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;

        if let Some((id, answers)) = blocking {
            return Err(Error::QuestionHasAnswers {
                id,
                answers: u64::try_from(answers).unwrap_or(0),
            });
        }

        let affected = self.conn.execute("DELETE FROM question", [])?;
        tracing::info!(count = affected, "deleted all questions");
        Ok(affected as u64)
    }
}

#[cfg(test)]
#[path = "questions_tests.rs"]
mod tests;
