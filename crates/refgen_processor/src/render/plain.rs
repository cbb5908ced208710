/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Plain text output format, for terminals and clipboards without markup.

use super::format::OutputFormat;

#[derive(Debug, Default, Clone)]
pub struct PlainText;

impl OutputFormat for PlainText {
    fn emph(&self, content: &str) -> String {
        content.to_string()
    }

    fn angle_url(&self, url: &str) -> String {
        format!("<{}>", url)
    }
}
