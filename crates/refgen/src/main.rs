/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod cli;
mod config;
mod logging;

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use refgen_core::identifier::{doi_url, extract_doi, parse_doi};
use refgen_core::metadata::DoiMetadata;
use refgen_core::{JournalArticle, ReferenceOutput, Source, Style};
use refgen_processor::io::{load_crossref, load_sources};
use refgen_processor::{PlainText, Processor};
use tracing::{error, info};

use cli::{Cli, Command, Format};
use config::Config;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose, cli.quiet) {
        eprintln!("{e}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Render {
            records,
            style,
            format,
            mut bib,
            mut cite,
            json,
        } => {
            let config = Config::resolve(cli.config.as_deref())?;
            let style = style.unwrap_or(config.style);
            let format = format.unwrap_or(config.format);

            // Default behavior: show both if neither is specified
            if !bib && !cite {
                bib = true;
                cite = true;
            }

            let sources = read_records(&records)?;
            info!(%style, %format, count = sources.len(), "rendering records");

            let outputs = match format {
                Format::Html => Processor::new(style).process_all(&sources),
                Format::Plain => Processor::with_format(style, PlainText).process_all(&sources),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&outputs)?);
            } else {
                print_human(style, &outputs, cite, bib);
            }
        }
        Command::Validate { records } => {
            let sources = read_records(&records)?;
            println!("{} valid record(s).", sources.len());
        }
        Command::Doi { input } => {
            let doi = parse_doi(&input)?;
            println!("{}", doi_url(&doi));
        }
        Command::Crossref {
            response,
            doi,
            style,
        } => {
            let work = load_crossref(&response)
                .with_context(|| format!("reading Crossref response {}", response.display()))?;
            let requested = extract_doi(&doi).unwrap_or_default();
            let article = JournalArticle::from(DoiMetadata::from_crossref(&work, &requested));
            let source = Source::from(article);

            match style {
                Some(style) => {
                    let output = Processor::new(style).process(&source);
                    print_human(style, &[output], true, true);
                }
                None => print!("{}", serde_yaml::to_string(&source)?),
            }
        }
        #[cfg(feature = "schema")]
        Command::Schema => {
            let schema = schemars::schema_for!(Source);
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
        }
    }

    Ok(())
}

fn read_records(path: &Path) -> Result<Vec<Source>> {
    load_sources(path).with_context(|| format!("reading records from {}", path.display()))
}

fn print_human(style: Style, outputs: &[ReferenceOutput], show_cite: bool, show_bib: bool) {
    println!("\n=== {} ===\n", style.label());

    if show_cite {
        println!("CITATIONS (Parenthetical):");
        for (i, out) in outputs.iter().enumerate() {
            println!("  [{}] {}", i + 1, out.in_text_parenthetical);
        }
        println!();

        println!("CITATIONS (Narrative):");
        for (i, out) in outputs.iter().enumerate() {
            println!("  [{}] {}", i + 1, out.in_text_narrative);
        }
        println!();
    }

    if show_bib {
        println!("REFERENCE LIST:");
        for out in outputs {
            println!("  {}", out.reference_list);
        }
    }
}
