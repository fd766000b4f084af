// src/core/net.rs

// One blocking GET with a cache-busting query and a browser user agent.

use std::time::{Duration, Instant};

use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::config::consts::REQUEST_TIMEOUT_SECS;
use crate::error::Result;

/// Fetch `url` and return the raw response body.
///
/// A random `r` query parameter defeats intermediate caches. Any transport
/// error or non-2xx status is returned as `ScrapeError::Http`.
pub fn http_get(url: &str, user_agent: &str) -> Result<Vec<u8>> {
    let client = Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?;

    let r: f64 = rand::random();
    info!("GET {url}");
    let t = Instant::now();

    let body = client
        .get(url)
        .query(&[("r", r)])
        .send()?
        .error_for_status()?
        .bytes()?;

    debug!("Fetched {} bytes in {:?}", body.len(), t.elapsed());
    Ok(body.to_vec())
}
