/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! refgen processor
//!
//! Turns a bibliographic record plus a citation style (APA 7th or UNSW
//! Harvard) into a reference-list entry and the two in-text citation forms.
//! Formatting is a pure function of its inputs: no I/O, no shared state, and
//! no error channel. Blank fields degrade the output; a missing year renders
//! as "n.d.".
//!
//! # Example
//!
//! ```rust
//! use refgen_core::{authors, JournalArticle, Source, Style};
//! use refgen_processor::generate_reference;
//!
//! let source = Source::from(JournalArticle {
//!     authors: authors![("Kozulin", "A")],
//!     year: "1993".to_string(),
//!     title: "Literature as a psychological tool".to_string(),
//!     journal_name: "Educational Psychologist".to_string(),
//!     volume: "28".to_string(),
//!     issue: Some("3".to_string()),
//!     pages: Some("253-265".to_string()),
//!     doi: Some("10.1207/s15326985ep2803_5".to_string()),
//!     url: None,
//! });
//!
//! let out = generate_reference(Style::Apa7, &source);
//! assert_eq!(out.in_text_parenthetical, "(Kozulin, 1993)");
//! assert_eq!(out.in_text_narrative, "Kozulin (1993)");
//! assert_eq!(
//!     out.reference_list,
//!     "Kozulin, A. (1993). Literature as a psychological tool. \
//!      <i>Educational Psychologist</i>, <i>28</i>(3), 253-265. \
//!      https://doi.org/10.1207/s15326985ep2803_5"
//! );
//! ```

pub mod citation;
pub mod error;
pub mod io;
pub mod processor;
pub mod render;
pub mod styles;
pub mod values;

pub use citation::{InText, InTextOptions};
pub use error::ProcessorError;
pub use processor::{generate_reference, generate_reference_with, Processor};
pub use render::{Html, OutputFormat, PlainText};
pub use styles::{Apa7, CitationFormatter, Harvard};

// Re-export the record model for convenience
pub use refgen_core::{ReferenceOutput, Source, Style, NO_DATE};
