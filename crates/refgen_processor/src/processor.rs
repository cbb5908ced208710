/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Engine entry point: (style, record) → three strings.

use refgen_core::{ReferenceOutput, Source, Style};
use tracing::trace;

use crate::render::{Html, OutputFormat};
use crate::styles::{Apa7, CitationFormatter, Harvard};

/// Format `source` under `style` with the canonical HTML markup.
///
/// Never fails: blank or missing fields degrade the output rather than
/// producing an error.
pub fn generate_reference(style: Style, source: &Source) -> ReferenceOutput {
    generate_reference_with(style, source, &Html)
}

/// Format `source` under `style` with a caller-chosen output format.
pub fn generate_reference_with<F: OutputFormat>(
    style: Style,
    source: &Source,
    fmt: &F,
) -> ReferenceOutput {
    trace!(%style, source_type = %source.source_type(), "formatting reference");
    match style {
        Style::Apa7 => Apa7.format(source, fmt),
        Style::Harvard => Harvard.format(source, fmt),
    }
}

/// Formats a batch of records under one style and output format.
#[derive(Debug, Clone, Default)]
pub struct Processor<F: OutputFormat = Html> {
    pub style: Style,
    format: F,
}

impl Processor<Html> {
    pub fn new(style: Style) -> Self {
        Self {
            style,
            format: Html,
        }
    }
}

impl<F: OutputFormat> Processor<F> {
    pub fn with_format(style: Style, format: F) -> Self {
        Self { style, format }
    }

    pub fn process(&self, source: &Source) -> ReferenceOutput {
        generate_reference_with(self.style, source, &self.format)
    }

    /// Outputs in input order.
    pub fn process_all(&self, sources: &[Source]) -> Vec<ReferenceOutput> {
        sources.iter().map(|s| self.process(s)).collect()
    }
}
