/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use anyhow::{Context, Result};
use refgen_core::Style;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::cli::Format;

const DEFAULT_CONFIG: &str = "refgen.toml";

/// Defaults read from `refgen.toml`. Command-line flags win over these.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub style: Style,
    pub format: Format,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// An explicit path must exist; otherwise `./refgen.toml` is used when
    /// present, and built-in defaults when not.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG);
                if path.exists() {
                    Self::load(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
