/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Errors from loading records. Formatting itself cannot fail.

use refgen_core::metadata::MetadataError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse {0}: {1}")]
    ParseError(String, String),

    #[error(transparent)]
    Metadata(#[from] MetadataError),
}
