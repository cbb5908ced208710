/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Output format trait for pluggable renderers.

/// How the markup-bearing parts of a citation are written out.
///
/// Caller-supplied text is never escaped; implementations only decide how
/// italics and the Harvard URL delimiters look.
pub trait OutputFormat: Default + Clone {
    /// Render content with emphasis (italics). Empty content stays empty.
    fn emph(&self, content: &str) -> String;

    /// Wrap a URL in angle brackets.
    fn angle_url(&self, url: &str) -> String;
}
