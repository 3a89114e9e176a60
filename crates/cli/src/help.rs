// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::builder::styling::Styles;

use crate::colors::{self, palette};

/// clap help styles built from the shared palette.
pub fn styles() -> Styles {
    if colors::should_colorize() {
        Styles::styled()
            .header(palette::HEADER)
            .usage(palette::HEADER)
            .literal(palette::LITERAL)
            .placeholder(palette::CONTEXT)
            .valid(palette::CONTEXT)
    } else {
        Styles::plain()
    }
}
