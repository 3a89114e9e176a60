// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    prefix = { "sbb%", "sbb*" },
    infix = { "%모델%", "*모델*" },
    single = { "a_c", "a?c" },
    literal_star = { "5*3%", "5[*]3*" },
    literal_question = { "why?%", "why[?]*" },
    literal_bracket = { "[tag]%", "[[]tag]*" },
    plain = { "exact", "exact" },
    empty = { "", "" },
)]
fn like_translates_to_glob(like: &str, expected: &str) {
    assert_eq!(like_to_glob(like), expected);
}
