/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! refgen core
//!
//! The record model consumed by the refgen formatting engine: the four
//! source variants ([`Source`]), the citation [`Style`] selector and the
//! three-part [`ReferenceOutput`]. It also defines the shapes exchanged with
//! metadata collaborators (DOI lookup, page scraping) and the identifier
//! helpers those collaborators share.
//!
//! Nothing in this crate formats citations; see `refgen_processor`.

pub mod macros;

pub mod identifier;
pub mod metadata;
pub mod output;
pub mod reference;
pub mod style;

pub use output::ReferenceOutput;
pub use reference::{AiToolUse, Author, Book, JournalArticle, Source, SourceType, Website};
pub use style::Style;

/// Literal rendered in place of an empty year, in every style and variant.
pub const NO_DATE: &str = "n.d.";

/// Error returned when parsing one of the string-backed enums fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: '{value}'")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}
