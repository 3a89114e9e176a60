// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal colors for help output.
//!
//! `NO_COLOR=1` turns colors off; `COLOR=1` turns them on without a TTY.

use std::io::IsTerminal;

use anstyle::{Ansi256Color, Color, Style};

use crate::env;

const fn fg(code: u8) -> Style {
    Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))))
}

/// Styles shared by clap's help renderer and the example blocks.
pub mod palette {
    use super::{fg, Style};

    /// Section headers
    pub const HEADER: Style = fg(74);
    /// Commands and flags
    pub const LITERAL: Style = fg(250);
    /// Placeholders and defaults
    pub const CONTEXT: Style = fg(245);
}

pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    env::force_color() || std::io::stdout().is_terminal()
}

fn paint(style: Style, text: &str) -> String {
    format!("{}{}{}", style.render(), text, style.render_reset())
}

pub fn header(text: &str) -> String {
    paint(palette::HEADER, text)
}

pub fn literal(text: &str) -> String {
    paint(palette::LITERAL, text)
}

/// An `after_help` examples block, colored when the terminal allows it.
pub fn examples(text: &str) -> String {
    if should_colorize() {
        colorize_examples(text)
    } else {
        text.to_string()
    }
}

/// Color an examples block: a line ending in `:` is a header, otherwise the
/// command before the first double space is a literal.
pub fn colorize_examples(text: &str) -> String {
    text.lines()
        .map(|line| {
            let body = line.trim_start();
            let indent = &line[..line.len() - body.len()];
            match body.find("  ") {
                None if body.ends_with(':') => format!("{indent}{}", header(body)),
                Some(end) => format!("{indent}{}{}", literal(&body[..end]), &body[end..]),
                None => line.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
