// src/runner.rs
use std::fs;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::{
    config::consts::DATES,
    config::options::{Options, Source},
    core::{encoding::decode_and_repair, net},
    error::Result,
    file::{write_csv, write_json},
    session::Session,
    specs::schedule,
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub sessions: usize,
    pub files_written: Vec<PathBuf>,
}

/// Raw page bytes from the network or a saved copy, decoded and repaired.
pub fn load_html(opts: &Options) -> Result<String> {
    let bytes = match &opts.source {
        Source::Remote(url) => net::http_get(url, &opts.user_agent)?,
        Source::File(path) => {
            info!("Reading {}", path.display());
            fs::read(path)?
        }
    };
    decode_and_repair(bytes)
}

/// Fetch and parse the schedule. Sorted by (date, time_start, time_end, title).
pub fn get_sessions(opts: &Options) -> Result<Vec<Session>> {
    let html = load_html(opts)?;
    let sessions = schedule::parse_doc(&html, &DATES)?;

    for s in sessions.iter().filter(|s| s.is_inverted()) {
        warn!(
            "{} ends before it starts ({} {} - {}); length {}",
            s.event_id, s.date, s.time_start, s.time_end, s.length_in_hours
        );
    }
    Ok(sessions)
}

/// Full run: fetch, parse, write JSON then CSV.
pub fn run(opts: &Options) -> Result<RunSummary> {
    let sessions = get_sessions(opts)?;
    info!("Parsed {} sessions", sessions.len());

    let json_path = opts.out_path("json");
    write_json(&json_path, &sessions)?;
    info!("Wrote {}", json_path.display());

    let csv_path = opts.out_path("csv");
    write_csv(&csv_path, &sessions)?;
    info!("Wrote {}", csv_path.display());

    Ok(RunSummary {
        sessions: sessions.len(),
        files_written: vec![json_path, csv_path],
    })
}
