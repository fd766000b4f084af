// src/error.rs
//! Error type for the scrape pipeline.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ScrapeError>;

#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Transport failure or non-success status from the schedule server
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body is not UTF-8
    #[error("Response is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    /// A double-encoded run did not decode back to UTF-8
    #[error("Cannot repair encoding of {0:?}")]
    Encoding(String),

    #[error("Invalid selector {0}")]
    Selector(String),

    /// A selector or attribute the page layout requires matched nothing
    #[error("Missing element: {0}")]
    MissingElement(&'static str),

    #[error("Can't parse time range {0:?}")]
    TimeRange(String),

    #[error("Can't parse {0:?}")]
    Time(String),

    #[error("Malformed event link {0:?}")]
    Href(String),

    #[error("Session {index} on {date}")]
    Session {
        date: String,
        index: usize,
        #[source]
        source: Box<ScrapeError>,
    },

    /// Global tracing subscriber could not be installed
    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScrapeError {
    /// Attach day/position context to an error raised while parsing one session.
    pub fn in_session(self, date: &str, index: usize) -> Self {
        ScrapeError::Session {
            date: date.to_string(),
            index,
            source: Box::new(self),
        }
    }
}
