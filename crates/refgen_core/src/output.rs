/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The engine's return value.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The three rendered forms of one citation.
///
/// Each string is complete on its own and already carries the markup the
/// display surface expects (`<i>…</i>` for italics, `&lt;`/`&gt;` around
/// Harvard website URLs).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ReferenceOutput {
    /// Entry for the end-of-document reference list.
    pub reference_list: String,
    /// In-text citation in parenthetical form, e.g. "(Smith, 2020)".
    pub in_text_parenthetical: String,
    /// In-text citation in narrative form, e.g. "Smith (2020)".
    pub in_text_narrative: String,
}
