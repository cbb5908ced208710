/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! HTML output format. This is the engine's canonical markup.

use super::format::OutputFormat;

#[derive(Debug, Default, Clone)]
pub struct Html;

impl OutputFormat for Html {
    fn emph(&self, content: &str) -> String {
        if content.is_empty() {
            return String::new();
        }
        format!("<i>{}</i>", content)
    }

    fn angle_url(&self, url: &str) -> String {
        // Only the delimiters are escaped; the URL itself goes in raw.
        format!("&lt;{}&gt;", url)
    }
}
