// src/specs/mod.rs
//! # Page specs
//!
//! Page-specific scraping: *where the data lives in the HTML* and *how to read it*.
//!
//! ## What lives here
//! - **Pure HTML parsing** of an already fetched and encoding-repaired page.
//! - **Selector choice** (the constants in `config::consts`).
//! - **Shaping** into `session::Session` records.
//!
//! ## What does **not** live here
//! - Fetching (`core::net`) and encoding repair (`core::encoding`).
//! - Writing files (`file`, `csv`).
//!
//! ## Typical call chain
//! ```text
//! cli → runner::run → runner::get_sessions → specs::schedule::parse_doc
//!                   ↘ file::write_json / file::write_csv
//! ```
//!
//! ## Conventions
//! - Parsing is strict: a session missing its time block or title link fails
//!   the whole run, with the day and position in the error.
//! - Specs are testable **offline** against inline HTML snippets.
pub mod schedule;
