// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use sbb_core::{AnswerView, QuestionView};

/// Maximum line width for wrapped text content (excluding 4-space indent).
const WRAP_WIDTH: usize = 96;

/// Placeholder for a view with no creation time.
const NO_DATE: &str = "-";

/// Wrap text at word boundaries if it's a single line.
///
/// - If content contains newlines: return as-is (preserve user formatting)
/// - If content is single line >width: wrap at word boundaries
/// - If content is single line <=width: return as-is
///
/// Width is counted in characters, not bytes.
pub fn wrap_text(content: &str, width: usize) -> String {
    if content.contains('\n') || content.chars().count() <= width {
        return content.to_string();
    }

    let mut result = String::new();
    let mut current_line = String::new();
    let mut current_len = 0;

    for word in content.split_whitespace() {
        let word_len = word.chars().count();
        if current_line.is_empty() {
            current_line = word.to_string();
            current_len = word_len;
        } else if current_len + 1 + word_len <= width {
            current_line.push(' ');
            current_line.push_str(word);
            current_len += 1 + word_len;
        } else {
            if !result.is_empty() {
                result.push('\n');
            }
            result.push_str(&current_line);
            current_line = word.to_string();
            current_len = word_len;
        }
    }

    if !current_line.is_empty() {
        if !result.is_empty() {
            result.push('\n');
        }
        result.push_str(&current_line);
    }

    result
}

/// Format a single question line for list output
pub fn format_question_line(view: &QuestionView) -> String {
    format!(
        "- [{}] {} ({})",
        view.id,
        view.subject,
        view.create_date.as_deref().unwrap_or(NO_DATE)
    )
}

/// Format a single answer with metadata line and indented content.
///
/// Output format:
/// ```text
///   [3] 2024.01.05 09:03:07
///     Content goes here, potentially
///     wrapped across multiple lines.
/// ```
pub fn format_answer(view: &AnswerView) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!(
        "  [{}] {}",
        view.id,
        view.create_date.as_deref().unwrap_or(NO_DATE)
    ));

    let wrapped = wrap_text(&view.content, WRAP_WIDTH);
    for line in wrapped.lines() {
        lines.push(format!("    {}", line));
    }
    lines
}

/// Format question details for show command
pub fn format_question_details(view: &QuestionView, answers: &[AnswerView]) -> String {
    let mut output = Vec::new();

    output.push(format!("[{}] {}", view.id, view.subject));
    output.push(format!(
        "Created: {}",
        view.create_date.as_deref().unwrap_or(NO_DATE)
    ));

    output.push(String::new());
    for line in wrap_text(&view.content, WRAP_WIDTH).lines() {
        output.push(format!("    {}", line));
    }

    if !answers.is_empty() {
        output.push(String::new());
        output.push(format!("Answers ({}):", answers.len()));
        for (i, answer) in answers.iter().enumerate() {
            if i > 0 {
                output.push(String::new());
            }
            output.extend(format_answer(answer));
        }
    }

    let mut text = output.join("\n");
    text.push('\n');
    text
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
