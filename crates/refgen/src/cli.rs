/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use clap::{Parser, Subcommand, ValueEnum};
use refgen_core::Style;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "refgen")]
#[command(author, version, about = "Format APA 7th and UNSW Harvard citations", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a refgen.toml (defaults to ./refgen.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render every record in a YAML or JSON file
    Render {
        /// Path to the records file
        records: PathBuf,

        /// Citation style (apa7 or harvard)
        #[arg(short, long)]
        style: Option<Style>,

        /// Output markup
        #[arg(short, long, value_enum)]
        format: Option<Format>,

        /// Show reference-list entries (default if neither --bib nor --cite is specified)
        #[arg(long)]
        bib: bool,

        /// Show in-text citations
        #[arg(long)]
        cite: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check that a records file parses
    Validate {
        /// Path to the records file
        records: PathBuf,
    },
    /// Normalise a DOI and print its resolver URL
    Doi {
        /// A bare DOI, a doi: reference or a doi.org link
        input: String,
    },
    /// Turn a saved Crossref works response into a journal record
    Crossref {
        /// Path to the Crossref JSON response
        response: PathBuf,

        /// DOI that was requested, used when the response omits one
        #[arg(long, default_value = "")]
        doi: String,

        /// Render the record in this style instead of printing it as YAML
        #[arg(short, long)]
        style: Option<Style>,
    },
    /// Generate JSON schema for records
    #[cfg(feature = "schema")]
    Schema,
    /// Generate shell completion scripts
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Html,
    Plain,
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Html => write!(f, "html"),
            Format::Plain => write!(f, "plain"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_render_flags() {
        let cli = Cli::try_parse_from([
            "refgen", "-vv", "render", "refs.yaml", "--style", "harvard", "--format", "plain",
            "--cite",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Render {
                style,
                format,
                cite,
                bib,
                ..
            } => {
                assert_eq!(style, Some(Style::Harvard));
                assert_eq!(format, Some(Format::Plain));
                assert!(cite);
                assert!(!bib);
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn rejects_unknown_style() {
        assert!(Cli::try_parse_from(["refgen", "render", "refs.yaml", "--style", "mla"]).is_err());
    }
}
