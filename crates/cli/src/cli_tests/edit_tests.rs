// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(args)
}

#[test]
fn test_edit_subject() {
    let cli = parse(&["sbb", "edit", "1", "subject", "제목 수정"]).unwrap();
    match cli.command {
        Command::Edit { id, attr, value } => {
            assert_eq!(id, 1);
            assert_eq!(attr, "subject");
            assert_eq!(value, "제목 수정");
        }
        _ => unreachable!("expected edit"),
    }
}

#[test]
fn test_edit_rejects_empty_value() {
    assert!(parse(&["sbb", "edit", "1", "subject", ""]).is_err());
}

#[test]
fn test_delete_id() {
    let cli = parse(&["sbb", "delete", "7"]).unwrap();
    assert!(matches!(cli.command, Command::Delete { id: 7 }));
}
