/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Shapes exchanged with metadata collaborators.
//!
//! Network lookup and page scraping live outside this workspace. What lives
//! here is the contract: the partial field sets those collaborators return,
//! the result envelope they report success or failure with, the mapping of a
//! Crossref work record onto those fields, and the merge of a field set into
//! a [`Source`](crate::Source) variant.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::identifier;
use crate::reference::{Author, JournalArticle, Website};

/// Failures a metadata collaborator reports to its caller.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("Invalid DOI format: '{0}'. Please enter a valid DOI (e.g., 10.1000/xyz123)")]
    InvalidDoi(String),
    #[error("Invalid URL format: '{0}'. Please enter a valid URL (e.g., https://example.com)")]
    InvalidUrl(String),
    #[error("Invalid response from Crossref: {0}")]
    Crossref(#[from] serde_json::Error),
}

/// Success/failure envelope with a human-readable message on failure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct MetadataResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> MetadataResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }

    pub fn into_result(self) -> Result<T, String> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(self
                .error
                .unwrap_or_else(|| "Unknown error occurred".to_string())),
        }
    }
}

impl<T> From<Result<T, MetadataError>> for MetadataResponse<T> {
    fn from(result: Result<T, MetadataError>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => Self::failure(e.to_string()),
        }
    }
}

/// Article fields resolved from a DOI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct DoiMetadata {
    pub authors: Vec<Author>,
    pub year: String,
    pub title: String,
    pub journal_name: String,
    pub volume: String,
    pub issue: String,
    pub pages: String,
    pub doi: String,
    pub url: String,
}

/// Best-effort page fields scraped from a URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct UrlMetadata {
    pub title: String,
    pub authors: Vec<Author>,
    pub organisation_author: String,
    pub year: String,
    pub site_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sponsor: Option<String>,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
}

/// A Crossref `/works/{doi}` response.
#[derive(Debug, Clone, Deserialize)]
pub struct CrossrefEnvelope {
    pub message: CrossrefWork,
}

/// The `message` body of a Crossref work record, reduced to what we map.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct CrossrefWork {
    pub author: Vec<CrossrefAuthor>,
    pub published_print: Option<CrossrefDate>,
    pub published_online: Option<CrossrefDate>,
    pub title: Vec<String>,
    pub container_title: Vec<String>,
    pub volume: Option<String>,
    pub issue: Option<String>,
    pub page: Option<String>,
    #[serde(rename = "DOI")]
    pub doi: Option<String>,
    #[serde(rename = "URL")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CrossrefAuthor {
    pub given: Option<String>,
    pub family: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct CrossrefDate {
    pub date_parts: Vec<Vec<Option<NumOrStr>>>,
}

/// A value that could be either a number or a string.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum NumOrStr {
    Number(i64),
    Str(String),
}

impl std::fmt::Display for NumOrStr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(i) => write!(f, "{}", i),
            Self::Str(s) => write!(f, "{}", s),
        }
    }
}

impl CrossrefDate {
    /// The year of the first date-parts entry, if one is recorded.
    pub fn year(&self) -> Option<String> {
        self.date_parts
            .first()
            .and_then(|parts| parts.first())
            .and_then(|year| year.as_ref())
            .map(ToString::to_string)
    }
}

impl CrossrefWork {
    /// Parse either a full response envelope or a bare `message` body.
    pub fn from_json(json: &str) -> Result<Self, MetadataError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if value.get("message").is_some() {
            Ok(serde_json::from_value::<CrossrefEnvelope>(value)?.message)
        } else {
            Ok(serde_json::from_value(value)?)
        }
    }

    fn year(&self) -> String {
        self.published_print
            .as_ref()
            .and_then(CrossrefDate::year)
            .or_else(|| self.published_online.as_ref().and_then(CrossrefDate::year))
            .unwrap_or_default()
    }
}

impl From<&CrossrefAuthor> for Author {
    /// Only the first given-name token is kept; it is reduced to an initial
    /// at render time anyway.
    fn from(author: &CrossrefAuthor) -> Self {
        let given = author.given.as_deref().unwrap_or_default();
        Author {
            first_name: given.split(' ').next().unwrap_or_default().to_string(),
            last_name: author.family.clone().unwrap_or_default(),
        }
    }
}

impl DoiMetadata {
    /// Map a Crossref work onto article fields. `requested_doi` fills in
    /// when the record does not echo its own DOI.
    pub fn from_crossref(work: &CrossrefWork, requested_doi: &str) -> Self {
        let authors = work
            .author
            .iter()
            .map(Author::from)
            .filter(|a| !a.first_name.is_empty() || !a.last_name.is_empty())
            .collect();
        let doi = work
            .doi
            .clone()
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| requested_doi.to_string());
        let url = work
            .url
            .clone()
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| identifier::doi_url(&doi));

        Self {
            authors,
            year: work.year(),
            title: work.title.first().cloned().unwrap_or_default(),
            journal_name: work.container_title.first().cloned().unwrap_or_default(),
            volume: work.volume.clone().unwrap_or_default(),
            issue: work.issue.clone().unwrap_or_default(),
            pages: work.page.clone().unwrap_or_default(),
            doi,
            url,
        }
    }
}

fn non_empty(s: String) -> Option<String> {
    (!s.trim().is_empty()).then_some(s)
}

impl From<DoiMetadata> for JournalArticle {
    fn from(meta: DoiMetadata) -> Self {
        JournalArticle {
            authors: meta.authors,
            year: meta.year,
            title: meta.title,
            journal_name: meta.journal_name,
            volume: meta.volume,
            issue: non_empty(meta.issue),
            pages: non_empty(meta.pages),
            doi: non_empty(meta.doi),
            url: non_empty(meta.url),
        }
    }
}

impl UrlMetadata {
    /// Fold in Crossref data found through a DOI on the page. Crossref wins
    /// for authors, year and title whenever it has them.
    pub fn enrich_with(&mut self, crossref: &DoiMetadata, doi: &str) {
        if !crossref.authors.is_empty() {
            self.authors = crossref.authors.clone();
        }
        if !crossref.year.is_empty() {
            self.year = crossref.year.clone();
        }
        if !crossref.title.is_empty() {
            self.title = crossref.title.clone();
        }
        self.doi = Some(doi.to_string());
    }

    /// Build a website record; the access date is always supplied by the user.
    pub fn into_website(self, access_date: &str) -> Website {
        Website {
            authors: self.authors,
            organisation_author: non_empty(self.organisation_author),
            year: self.year,
            title: self.title,
            site_name: self.site_name,
            sponsor: self.sponsor.and_then(non_empty),
            access_date: access_date.to_string(),
            url: self.url,
        }
    }
}
