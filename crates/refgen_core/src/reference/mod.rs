/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Bibliographic records.
//!
//! A [`Source`] is one of four closed shapes. Field names on the wire are
//! camelCase and every field defaults to empty, so partially filled records
//! coming from a form or a metadata lookup deserialize without error.
//! Optional fields that are present but blank behave exactly like absent
//! ones; the accessors below apply that rule.

pub mod contributor;


pub use contributor::Author;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

crate::str_enum! {
    /// Tag of the active [`Source`] variant.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
    #[cfg_attr(feature = "schema", derive(JsonSchema))]
    #[serde(rename_all = "lowercase")]
    pub enum SourceType {
        Book = "book",
        Journal = "journal",
        Website = "website",
        Ai = "ai",
    }
}

/// A bibliographic record. Exactly one shape is active.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Source {
    Book(Book),
    Journal(JournalArticle),
    Website(Website),
    Ai(AiToolUse),
}

/// A book or other standalone monograph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct Book {
    pub authors: Vec<Author>,
    pub year: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edition: Option<String>,
    pub publisher: String,
    /// Place of publication. Harvard needs it; APA ignores it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// An article in a journal or other serial.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct JournalArticle {
    pub authors: Vec<Author>,
    pub year: String,
    pub title: String,
    pub journal_name: String,
    pub volume: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A web page. Authored either by people or by an organisation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct Website {
    pub authors: Vec<Author>,
    /// Takes precedence over `authors` when non-empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organisation_author: Option<String>,
    pub year: String,
    /// Page title. Stands in for the author when nobody is credited.
    pub title: String,
    pub site_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sponsor: Option<String>,
    pub access_date: String,
    pub url: String,
}

/// Use of a generative AI tool. The company fills the author role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct AiToolUse {
    /// e.g. "OpenAI"
    pub company: String,
    pub year: String,
    /// e.g. "ChatGPT"
    pub product_name: String,
    /// e.g. "Large language model"
    pub model_type: String,
    pub retrieved_date: String,
    pub url: String,
}

/// Returns the trimmed-non-empty contents of an optional field.
pub fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

impl Source {
    pub fn source_type(&self) -> SourceType {
        match self {
            Source::Book(_) => SourceType::Book,
            Source::Journal(_) => SourceType::Journal,
            Source::Website(_) => SourceType::Website,
            Source::Ai(_) => SourceType::Ai,
        }
    }

    /// Personal authors in citation order. AI tool records have none.
    pub fn authors(&self) -> &[Author] {
        match self {
            Source::Book(b) => &b.authors,
            Source::Journal(j) => &j.authors,
            Source::Website(w) => &w.authors,
            Source::Ai(_) => &[],
        }
    }

    pub fn year(&self) -> &str {
        match self {
            Source::Book(b) => &b.year,
            Source::Journal(j) => &j.year,
            Source::Website(w) => &w.year,
            Source::Ai(a) => &a.year,
        }
    }

    /// The record's main title; the product name for AI tool records.
    pub fn title(&self) -> &str {
        match self {
            Source::Book(b) => &b.title,
            Source::Journal(j) => &j.title,
            Source::Website(w) => &w.title,
            Source::Ai(a) => &a.product_name,
        }
    }
}

impl Book {
    pub fn edition(&self) -> Option<&str> {
        present(&self.edition)
    }

    pub fn location(&self) -> Option<&str> {
        present(&self.location)
    }

    pub fn doi(&self) -> Option<&str> {
        present(&self.doi)
    }

    pub fn url(&self) -> Option<&str> {
        present(&self.url)
    }
}

impl JournalArticle {
    pub fn issue(&self) -> Option<&str> {
        present(&self.issue)
    }

    pub fn pages(&self) -> Option<&str> {
        present(&self.pages)
    }

    pub fn doi(&self) -> Option<&str> {
        present(&self.doi)
    }

    pub fn url(&self) -> Option<&str> {
        present(&self.url)
    }
}

impl Website {
    pub fn organisation(&self) -> Option<&str> {
        present(&self.organisation_author)
    }

    pub fn sponsor(&self) -> Option<&str> {
        present(&self.sponsor)
    }

    /// True when an organisation is named or the first author has a surname.
    pub fn has_author(&self) -> bool {
        self.organisation().is_some() || self.authors.first().is_some_and(Author::has_surname)
    }
}

macro_rules! impl_from_variant {
    ($($ty:ident => $variant:ident),+ $(,)?) => {
        $(
            impl From<$ty> for Source {
                fn from(value: $ty) -> Self {
                    Source::$variant(value)
                }
            }
        )+
    };
}

impl_from_variant! {
    Book => Book,
    JournalArticle => Journal,
    Website => Website,
    AiToolUse => Ai,
}
