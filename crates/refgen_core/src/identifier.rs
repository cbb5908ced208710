/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! DOI and URL helpers shared by the metadata collaborators.
//!
//! The formatting engine never calls these: it renders whatever strings it
//! is given. They exist for callers that need to check or normalise an
//! identifier before asking for metadata.

use regex::Regex;
use std::sync::OnceLock;
use url::Url;

use crate::metadata::MetadataError;

/// Resolver prefix for canonical DOI links.
pub const DOI_RESOLVER: &str = "https://doi.org/";

fn doi_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(?:https?://(?:dx\.)?doi\.org/|doi:)").expect("valid DOI prefix regex")
    })
}

fn doi_body() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^10\.\d{4,}/.+").expect("valid DOI regex"))
}

/// Strip resolver and `doi:` prefixes from `input` and return the bare DOI,
/// or `None` when what remains is not of the form `10.NNNN/suffix`.
///
/// ```
/// use refgen_core::identifier::extract_doi;
/// assert_eq!(
///     extract_doi("https://doi.org/10.1207/s15326985ep2803_5").as_deref(),
///     Some("10.1207/s15326985ep2803_5")
/// );
/// assert_eq!(extract_doi("not a doi"), None);
/// ```
pub fn extract_doi(input: &str) -> Option<String> {
    let cleaned = doi_prefix().replace(input.trim(), "");
    let cleaned = cleaned.trim();
    doi_body().is_match(cleaned).then(|| cleaned.to_string())
}

pub fn is_valid_doi(input: &str) -> bool {
    extract_doi(input).is_some()
}

/// Like [`extract_doi`], but reports a rejected input as an error.
pub fn parse_doi(input: &str) -> Result<String, MetadataError> {
    extract_doi(input).ok_or_else(|| MetadataError::InvalidDoi(input.to_string()))
}

/// Canonical resolver URL for a bare DOI.
pub fn doi_url(doi: &str) -> String {
    format!("{}{}", DOI_RESOLVER, doi)
}

/// True for absolute `http` or `https` URLs.
pub fn is_valid_url(input: &str) -> bool {
    parse_url(input).is_ok()
}

/// Parse an absolute `http` or `https` URL.
pub fn parse_url(input: &str) -> Result<Url, MetadataError> {
    Url::parse(input.trim())
        .ok()
        .filter(|u| matches!(u.scheme(), "http" | "https"))
        .ok_or_else(|| MetadataError::InvalidUrl(input.to_string()))
}
