// src/session.rs
use serde::{Deserialize, Serialize};

/// CSV column order.
pub const COLUMNS: [&str; 11] = [
    "event_id",
    "type",
    "date",
    "time_start",
    "time_end",
    "room",
    "title",
    "speakers",
    "description",
    "event_url",
    "length_in_hours",
];

/// One scheduled conference event.
/// Field order here is the JSON field order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub description: Option<String>,
    pub speakers: Option<String>,
    pub date: String,
    /// 24-hour "HH:MM"
    pub time_start: String,
    pub time_end: String,
    pub length_in_hours: f64,
    pub room: Option<String>,
    pub event_id: String,
    pub event_url: String,
}

impl Session {
    /// End before start: the session crosses midnight or the page is wrong.
    /// Its duration is negative.
    pub fn is_inverted(&self) -> bool {
        self.time_end < self.time_start
    }

    /// Cells in `COLUMNS` order; absent fields are empty.
    pub fn to_row(&self) -> Vec<String> {
        let opt = |v: &Option<String>| v.clone().unwrap_or_default();
        vec![
            self.event_id.clone(),
            opt(&self.kind),
            self.date.clone(),
            self.time_start.clone(),
            self.time_end.clone(),
            opt(&self.room),
            opt(&self.title),
            opt(&self.speakers),
            opt(&self.description),
            self.event_url.clone(),
            // shortest round-trip form: 1.5, 1.0, 0.333
            format!("{:?}", self.length_in_hours),
        ]
    }
}

/// Stable sort by (date, time_start, time_end, title).
/// Times are zero-padded, so string order is chronological.
pub fn sort_sessions(sessions: &mut [Session]) {
    sessions.sort_by(|a, b| {
        (&a.date, &a.time_start, &a.time_end, &a.title)
            .cmp(&(&b.date, &b.time_start, &b.time_end, &b.title))
    });
}
