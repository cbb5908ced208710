/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! APA 7th edition.

use refgen_core::{AiToolUse, Book, JournalArticle, ReferenceOutput, Website};

use super::{filled, labelled, trailing_link, CitationFormatter};
use crate::citation::{in_text, InTextOptions};
use crate::render::{square_brackets, OutputFormat};
use crate::values::contributor::format_authors_apa;
use crate::values::text::sentence_case;
use crate::values::{year_or_no_date, Attribution};

/// (Smith, 2020); "et al." from three authors.
pub const IN_TEXT: InTextOptions = InTextOptions {
    year_delimiter: ", ",
    et_al_min: 3,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct Apa7;

/// "Authors (Year)", or just "(Year)" when there is nobody to name.
fn author_date(authors: &str, year: &str) -> String {
    if authors.is_empty() {
        format!("({})", year)
    } else {
        format!("{} ({})", authors, year)
    }
}

fn retrieved(date: &str, url: &str) -> String {
    format!("Retrieved {}, from {}", date, url)
}

impl CitationFormatter for Apa7 {
    fn book<F: OutputFormat>(&self, book: &Book, fmt: &F) -> ReferenceOutput {
        let year = year_or_no_date(&book.year);
        let edition = book
            .edition()
            .map(|e| format!(" ({} ed.)", e))
            .unwrap_or_default();

        let reference = format!(
            "{}. {}{}. {}.{}",
            author_date(&format_authors_apa(&book.authors), year),
            fmt.emph(&sentence_case(&book.title)),
            edition,
            book.publisher,
            trailing_link(book.doi(), book.url()),
        );
        in_text(Attribution::from(book), year, &IN_TEXT).with_reference(reference)
    }

    fn journal<F: OutputFormat>(&self, article: &JournalArticle, fmt: &F) -> ReferenceOutput {
        let year = year_or_no_date(&article.year);
        // Volume italic, issue in parentheses right after it.
        let volume = filled(&article.volume)
            .map(|v| format!(", {}", fmt.emph(v)))
            .unwrap_or_default();
        let issue = article
            .issue()
            .map(|i| format!("({})", i))
            .unwrap_or_default();

        let reference = format!(
            "{}. {}. {}{}{}{}.{}",
            author_date(&format_authors_apa(&article.authors), year),
            sentence_case(&article.title),
            fmt.emph(&article.journal_name),
            volume,
            issue,
            labelled(", ", article.pages()),
            trailing_link(article.doi(), article.url()),
        );
        in_text(Attribution::from(article), year, &IN_TEXT).with_reference(reference)
    }

    fn website<F: OutputFormat>(&self, site: &Website, fmt: &F) -> ReferenceOutput {
        let year = year_or_no_date(&site.year);
        let title = fmt.emph(&sentence_case(&site.title));
        let attribution = Attribution::from(site);

        let reference = if let Attribution::Title(_) = attribution {
            // No author: the title moves to the front.
            let site_name = filled(&site.site_name)
                .map(|name| format!(" {}.", name))
                .unwrap_or_default();
            format!(
                "{}. ({}).{} {}",
                title,
                year,
                site_name,
                retrieved(&site.access_date, &site.url),
            )
        } else {
            let author = site
                .organisation()
                .map(str::to_string)
                .unwrap_or_else(|| format_authors_apa(&site.authors));
            // The site name is dropped when it would just repeat the author.
            let site_name = filled(&site.site_name)
                .filter(|name| *name != author)
                .map(|name| format!(". {}", name))
                .unwrap_or_default();
            format!(
                "{} ({}). {}{}. {}",
                author,
                year,
                title,
                site_name,
                retrieved(&site.access_date, &site.url),
            )
        };
        in_text(attribution, year, &IN_TEXT).with_reference(reference)
    }

    fn ai_tool<F: OutputFormat>(&self, tool: &AiToolUse, fmt: &F) -> ReferenceOutput {
        let year = year_or_no_date(&tool.year);
        let reference = format!(
            "{}. {} {}. {}",
            author_date(tool.company.trim(), year),
            fmt.emph(&tool.product_name),
            square_brackets(&tool.model_type),
            retrieved(&tool.retrieved_date, &tool.url),
        );
        in_text(Attribution::from(tool), year, &IN_TEXT).with_reference(reference)
    }
}
