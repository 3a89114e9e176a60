// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `LIKE`-style subject patterns.
//!
//! SQLite's `LIKE` folds ASCII case, so subject patterns are translated to
//! `GLOB`, which is case-sensitive. `%` matches any run of characters
//! (including none) and `_` matches exactly one character. Every other
//! character, including GLOB metacharacters, matches itself.

/// Translate a `LIKE` pattern into an equivalent case-sensitive `GLOB` pattern.
pub fn like_to_glob(pattern: &str) -> String {
    let mut glob = String::with_capacity(pattern.len());
    for c in pattern.chars() {
        match c {
            '%' => glob.push('*'),
            '_' => glob.push('?'),
            '*' => glob.push_str("[*]"),
            '?' => glob.push_str("[?]"),
            '[' => glob.push_str("[[]"),
            _ => glob.push(c),
        }
    }
    glob
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
