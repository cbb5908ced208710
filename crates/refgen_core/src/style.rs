/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Citation style selector.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

crate::str_enum! {
    /// The citation rule sets the engine knows how to apply.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
    #[cfg_attr(feature = "schema", derive(JsonSchema))]
    pub enum Style {
        /// APA 7th edition.
        #[default]
        #[serde(rename = "apa7")]
        Apa7 = "apa7",
        /// UNSW variant of author-date Harvard.
        #[serde(rename = "harvard")]
        Harvard = "harvard",
    }
}

impl Style {
    /// Human-readable name, for menus and headings.
    pub fn label(&self) -> &'static str {
        match self {
            Style::Apa7 => "APA 7th",
            Style::Harvard => "Harvard (UNSW)",
        }
    }
}
