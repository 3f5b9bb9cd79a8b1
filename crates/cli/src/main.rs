// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::Result;
use color_eyre::eyre::{WrapErr, eyre};
use drawlot::{DrawResult, perform_draw};
use drawlot_domain::Entry;
use drawlot_ingest::{DEFAULT_DELIMITER, DrawConfig, delimiter_byte, load_config, read_roster};
use std::path::PathBuf;
use tracing::info;
use tracing_log::AsTrace;

mod report;

/// drawlot - randomized team draws with hard and soft exclusion categories
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the roster file. May instead come from the configuration file.
    roster: Option<PathBuf>,

    /// Number of entries per group. Prompted for interactively when neither
    /// this flag nor a configuration file provides it.
    #[arg(short, long)]
    group_size: Option<usize>,

    /// Path to a JSON draw configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Roster field delimiter.
    #[arg(short, long)]
    delimiter: Option<char>,

    /// Emit the draw results as JSON instead of the text report.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.verbosity.log_level_filter().as_trace())
        .without_time()
        .init();

    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let config: Option<DrawConfig> = match &args.config {
        Some(path) => Some(load_config(path)?),
        None => None,
    };

    let roster_path: PathBuf = args
        .roster
        .clone()
        .or_else(|| config.as_ref().and_then(|config| config.roster.clone()))
        .ok_or_else(|| {
            eyre!("no roster file given on the command line or in the configuration")
        })?;

    let delimiter_char: char = args
        .delimiter
        .or_else(|| config.as_ref().and_then(|config| config.delimiter))
        .unwrap_or(DEFAULT_DELIMITER);
    let delimiter: u8 = delimiter_byte(delimiter_char)?;

    let entries: Vec<Entry> = read_roster(&roster_path, delimiter)?;

    // Sourcing precedence: command line, then configuration, then prompt.
    let group_size: usize = match args.group_size {
        Some(size) => size,
        None => match config.as_ref() {
            Some(config) => config.group_size,
            None => prompt_group_size()?,
        },
    };

    info!(entries = entries.len(), group_size, "performing draw");
    let result: DrawResult = perform_draw(&entries, group_size, &mut rand::rng())?;

    if args.json {
        println!("{}", report::render_json(&result)?);
    } else {
        print!("{}", report::render_text(&result));
    }

    Ok(())
}

/// Asks the operator for the group size on standard input.
fn prompt_group_size() -> Result<usize> {
    println!("Please enter the group size:");

    let mut answer: String = String::new();
    std::io::stdin()
        .read_line(&mut answer)
        .wrap_err("failed to read the group size")?;

    let trimmed: &str = answer.trim();
    trimmed
        .parse::<usize>()
        .wrap_err_with(|| format!("group size [{trimmed}] is not a positive integer"))
}
