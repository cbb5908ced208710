/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Markup used inside rendered citations.

pub mod format;
pub mod html;
pub mod plain;

pub use format::OutputFormat;
pub use html::Html;
pub use plain::PlainText;

/// `[content]`, as used for AI model types.
pub fn square_brackets(content: &str) -> String {
    format!("[{}]", content)
}

/// `'content'`, as used for Harvard article titles.
pub fn single_quotes(content: &str) -> String {
    format!("'{}'", content)
}
