// src/file.rs

use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::csv::write_sessions;
use crate::error::{Result, ScrapeError};
use crate::session::Session;

/// Pretty-printed JSON array, 4-space indent, fields in declaration order.
/// Non-ASCII text is written as raw UTF-8, not `\uXXXX` escapes.
pub fn write_json(path: &Path, sessions: &[Session]) -> Result<()> {
    ensure_parent(path)?;
    let mut out = BufWriter::new(File::create(path)?);

    let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    sessions.serialize(&mut ser)?;
    out.flush()?;
    Ok(())
}

/// Read back a file written by `write_json`.
pub fn read_json(path: &Path) -> Result<Vec<Session>> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Header + one row per session, fixed column order.
pub fn write_csv(path: &Path, sessions: &[Session]) -> Result<()> {
    ensure_parent(path)?;
    let mut out = BufWriter::new(File::create(path)?);
    write_sessions(&mut out, sessions)?;
    out.flush()?;
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::Io(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
