// src/cli.rs
use std::path::PathBuf;

use clap::Parser;

use crate::config::consts::{DEFAULT_DEST, SCHEDULE_URL};
use crate::config::options::{Options, Source};
use crate::runner::{self, RunSummary};

/// Scrape the NICAR 2019 schedule into JSON and CSV.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Schedule page to fetch
    #[arg(long, default_value = SCHEDULE_URL)]
    pub url: String,

    /// Output path without extension (.json and .csv are appended)
    #[arg(short, long, value_name = "STEM", default_value = DEFAULT_DEST)]
    pub out: String,

    /// Parse a saved copy of the page instead of fetching
    #[arg(short, long, value_name = "FILE", conflicts_with = "url")]
    pub input: Option<PathBuf>,

    /// Debug-level logging (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn to_options(&self) -> Options {
        let mut opts = Options::default();
        opts.source = match &self.input {
            Some(path) => Source::File(path.clone()),
            None => Source::Remote(self.url.clone()),
        };
        opts.set_dest(&self.out);
        opts
    }
}

pub fn run(args: &Args) -> crate::error::Result<RunSummary> {
    runner::run(&args.to_options())
}
