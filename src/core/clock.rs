// src/core/clock.rs
// 12-hour schedule times ("8 am", "12:30 pm") to 24-hour "HH:MM", and durations.

use crate::error::{Result, ScrapeError};

/// Convert a schedule time token to 24-hour `HH:MM`.
///
/// `pm` adds twelve hours unless the hour is already 12. `am` is never
/// adjusted, so "12 am" comes out as "12:00"; the schedule has nothing
/// between midnight and 1am.
pub fn convert_time(ts: &str) -> Result<String> {
    let bad = || ScrapeError::Time(ts.to_string());

    let parts: Vec<&str> = ts.split(' ').collect();
    let [nums, suffix] = parts[..] else { return Err(bad()) };

    let is_pm = match suffix {
        "pm" => true,
        "am" => false,
        _ => return Err(bad()),
    };

    let (hours, minutes) = match nums.split_once(':') {
        Some((h, m)) => (h, m),
        None => (nums, "00"),
    };
    let mut hours: u32 = hours.parse().map_err(|_| bad())?;
    let minutes: u32 = minutes.parse().map_err(|_| bad())?;

    if is_pm && hours != 12 {
        hours += 12;
    }
    Ok(format!("{hours:02}:{minutes:02}"))
}

/// Split `HH:MM` into total minutes.
fn total_minutes(hhmm: &str) -> Result<i64> {
    let bad = || ScrapeError::Time(hhmm.to_string());
    let (h, m) = hhmm.split_once(':').ok_or_else(bad)?;
    let h: i64 = h.parse().map_err(|_| bad())?;
    let m: i64 = m.parse().map_err(|_| bad())?;
    Ok(h * 60 + m)
}

/// Hours between two `HH:MM` times, rounded to 3 decimals.
/// Negative when `end` is before `start`.
pub fn calculate_length(start: &str, end: &str) -> Result<f64> {
    let mins = total_minutes(end)? - total_minutes(start)?;
    Ok(round3(mins as f64 / 60.0))
}

fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}
