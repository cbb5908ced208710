/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A personal author. Order within a record's author list is citation order.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    pub fn new(last_name: &str, first_name: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }

    /// The uppercased first character of the first name, if any.
    pub fn initial(&self) -> Option<String> {
        self.first_name
            .trim_start()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
    }

    pub fn has_surname(&self) -> bool {
        !self.last_name.trim().is_empty()
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (true, _) => write!(f, "{}", self.last_name),
            (false, true) => write!(f, "{}", self.first_name),
            (false, false) => write!(f, "{} {}", self.first_name, self.last_name),
        }
    }
}
