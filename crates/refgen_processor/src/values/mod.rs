/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Values extracted from a record before a style lays them out.

pub mod contributor;
pub mod text;

use refgen_core::{AiToolUse, Author, Book, JournalArticle, Website, NO_DATE};

/// The year as given, or [`NO_DATE`] when it is blank.
pub fn year_or_no_date(year: &str) -> &str {
    if year.trim().is_empty() {
        NO_DATE
    } else {
        year
    }
}

/// Who a citation is attributed to, resolved once per record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribution<'a> {
    /// A corporate author: an organisation, or an AI tool's company.
    Organisation(&'a str),
    /// Personal authors in citation order (possibly none).
    Authors(&'a [Author]),
    /// No author at all; the page title stands in.
    Title(&'a str),
}

/// A list whose lead author has no surname names nobody.
fn named(authors: &[Author]) -> Attribution<'_> {
    if authors.first().is_some_and(Author::has_surname) {
        Attribution::Authors(authors)
    } else {
        Attribution::Authors(&[])
    }
}

impl<'a> From<&'a Book> for Attribution<'a> {
    fn from(book: &'a Book) -> Self {
        named(&book.authors)
    }
}

impl<'a> From<&'a JournalArticle> for Attribution<'a> {
    fn from(article: &'a JournalArticle) -> Self {
        named(&article.authors)
    }
}

impl<'a> From<&'a Website> for Attribution<'a> {
    fn from(site: &'a Website) -> Self {
        if let Some(org) = site.organisation() {
            Attribution::Organisation(org)
        } else if site.has_author() {
            Attribution::Authors(&site.authors)
        } else {
            Attribution::Title(&site.title)
        }
    }
}

impl<'a> From<&'a AiToolUse> for Attribution<'a> {
    fn from(tool: &'a AiToolUse) -> Self {
        if tool.company.trim().is_empty() {
            Attribution::Authors(&[])
        } else {
            Attribution::Organisation(&tool.company)
        }
    }
}
