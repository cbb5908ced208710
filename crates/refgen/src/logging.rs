/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Tracing subscriber setup for the binary. The library crates only emit
//! events.
//!
//! | Flag(s)   | Level |
//! |-----------|-------|
//! | (none)    | warn  |
//! | `-v`      | info  |
//! | `-vv`     | debug |
//! | `-vvv`    | trace |
//! | `--quiet` | error |
//!
//! `RUST_LOG` overrides all of the above.

use std::io::IsTerminal as _;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init(verbose: u8, quiet: bool) -> anyhow::Result<()> {
    let level = derive_level(verbose, quiet);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "refgen={level},refgen_core={level},refgen_processor={level}"
        ))
    });

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

fn derive_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
