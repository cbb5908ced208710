/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Harvard, UNSW variant.
//!
//! Differs from APA in punctuation (no parentheses around the year in the
//! reference list, no comma before the year in-text), in listing three
//! authors in-text before switching to "et al.", and in the journal layout:
//! quoted article title, title-cased journal name, labelled volume, issue
//! and pages, and an unresolved `DOI:` identifier.

use refgen_core::{AiToolUse, Book, JournalArticle, ReferenceOutput, Website};

use super::{filled, labelled, CitationFormatter};
use crate::citation::{in_text, InTextOptions};
use crate::render::{single_quotes, square_brackets, OutputFormat};
use crate::values::contributor::format_authors_harvard;
use crate::values::text::{sentence_case, title_case};
use crate::values::{year_or_no_date, Attribution};

/// (Smith 2020); "et al." from four authors.
pub const IN_TEXT: InTextOptions = InTextOptions {
    year_delimiter: " ",
    et_al_min: 4,
};

/// Emitted between the angle brackets when a website has no URL.
pub const URL_PLACEHOLDER: &str = "URL";

#[derive(Debug, Default, Clone, Copy)]
pub struct Harvard;

fn author_date(authors: &str, year: &str) -> String {
    if authors.is_empty() {
        year.to_string()
    } else {
        format!("{} {}", authors, year)
    }
}

impl CitationFormatter for Harvard {
    fn book<F: OutputFormat>(&self, book: &Book, fmt: &F) -> ReferenceOutput {
        let year = year_or_no_date(&book.year);
        let edition = book
            .edition()
            .map(|e| format!(", {} edn", e))
            .unwrap_or_default();

        let reference = format!(
            "{}, {}{}, {}{}.",
            author_date(&format_authors_harvard(&book.authors), year),
            fmt.emph(&sentence_case(&book.title)),
            edition,
            book.publisher,
            labelled(", ", book.location()),
        );
        in_text(Attribution::from(book), year, &IN_TEXT).with_reference(reference)
    }

    fn journal<F: OutputFormat>(&self, article: &JournalArticle, fmt: &F) -> ReferenceOutput {
        let year = year_or_no_date(&article.year);
        let reference = format!(
            "{}, {}, {}{}{}{}{}.",
            author_date(&format_authors_harvard(&article.authors), year),
            single_quotes(&sentence_case(&article.title)),
            fmt.emph(&title_case(&article.journal_name)),
            labelled(", vol. ", filled(&article.volume)),
            labelled(", no. ", article.issue()),
            labelled(", pp. ", article.pages()),
            labelled(", DOI:", article.doi()),
        );
        in_text(Attribution::from(article), year, &IN_TEXT).with_reference(reference)
    }

    fn website<F: OutputFormat>(&self, site: &Website, fmt: &F) -> ReferenceOutput {
        let year = year_or_no_date(&site.year);
        let accessed = format!("accessed {}", site.access_date);
        // The URL is mandatory in UNSW Harvard, so a placeholder marks a gap.
        let url = fmt.angle_url(filled(&site.url).unwrap_or(URL_PLACEHOLDER));
        let attribution = Attribution::from(site);

        let reference = if let Attribution::Title(_) = attribution {
            format!(
                "{} {}, {}, {}.",
                sentence_case(&site.title),
                year,
                accessed,
                url
            )
        } else {
            let author = site
                .organisation()
                .map(str::to_string)
                .unwrap_or_else(|| format_authors_harvard(&site.authors));
            format!(
                "{} {}, {}{}, {}, {}.",
                author,
                year,
                fmt.emph(&sentence_case(&site.title)),
                labelled(", ", site.sponsor()),
                accessed,
                url
            )
        };
        in_text(attribution, year, &IN_TEXT).with_reference(reference)
    }

    fn ai_tool<F: OutputFormat>(&self, tool: &AiToolUse, fmt: &F) -> ReferenceOutput {
        let year = year_or_no_date(&tool.year);
        let company = tool.company.trim();
        let lead = if company.is_empty() {
            year.to_string()
        } else {
            format!("{}. {}", company, year)
        };

        let reference = format!(
            "{}, {}, {}, Retrieved {}, from {}.",
            lead,
            fmt.emph(&tool.product_name),
            square_brackets(&tool.model_type),
            tool.retrieved_date,
            tool.url,
        );
        in_text(Attribution::from(tool), year, &IN_TEXT).with_reference(reference)
    }
}
