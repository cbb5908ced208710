/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Style rule sets.
//!
//! Each style implements [`CitationFormatter`], one method per source
//! variant. [`CitationFormatter::format`] matches the record exhaustively,
//! so a new source variant cannot be added without every style handling it.

pub mod apa;
pub mod harvard;

pub use apa::Apa7;
pub use harvard::Harvard;

use refgen_core::{AiToolUse, Book, JournalArticle, ReferenceOutput, Source, Website};

use crate::render::OutputFormat;

/// Formats each kind of record under one citation style.
pub trait CitationFormatter {
    fn book<F: OutputFormat>(&self, book: &Book, fmt: &F) -> ReferenceOutput;

    fn journal<F: OutputFormat>(&self, article: &JournalArticle, fmt: &F) -> ReferenceOutput;

    fn website<F: OutputFormat>(&self, site: &Website, fmt: &F) -> ReferenceOutput;

    fn ai_tool<F: OutputFormat>(&self, tool: &AiToolUse, fmt: &F) -> ReferenceOutput;

    fn format<F: OutputFormat>(&self, source: &Source, fmt: &F) -> ReferenceOutput {
        match source {
            Source::Book(book) => self.book(book, fmt),
            Source::Journal(article) => self.journal(article, fmt),
            Source::Website(site) => self.website(site, fmt),
            Source::Ai(tool) => self.ai_tool(tool, fmt),
        }
    }
}

/// `" https://doi.org/<doi>"`, else `" <url>"`, else nothing.
pub(crate) fn trailing_link(doi: Option<&str>, url: Option<&str>) -> String {
    match (doi, url) {
        (Some(doi), _) => format!(" {}", refgen_core::identifier::doi_url(doi)),
        (None, Some(url)) => format!(" {}", url),
        (None, None) => String::new(),
    }
}

/// `prefix` + `value` when the value is present.
pub(crate) fn labelled(prefix: &str, value: Option<&str>) -> String {
    value.map(|v| format!("{}{}", prefix, v)).unwrap_or_default()
}

/// Treat a required-but-blank field like a missing optional one.
pub(crate) fn filled(value: &str) -> Option<&str> {
    (!value.trim().is_empty()).then_some(value)
}
