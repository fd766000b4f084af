// src/specs/schedule.rs
//! Schedule page: one `ul.schedule-list.pane` per conference day, one child
//! element per session.
//!
//! Days carry no usable date label, so containers are paired with the fixed
//! date list by position. Extra containers or extra dates are dropped.

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::config::consts::*;
use crate::core::clock::{calculate_length, convert_time};
use crate::core::html::{child_elements, first_attr, get_text, selector};
use crate::core::sanitize::strip_speaker_label;
use crate::error::{Result, ScrapeError};
use crate::session::{Session, sort_sessions};

/// Compiled once per document.
struct Selectors {
    title: Selector,
    title_link: Selector,
    kind: Selector,
    description: Selector,
    speakers: Selector,
    time: Selector,
    room: Selector,
}

impl Selectors {
    fn new() -> Result<Self> {
        Ok(Self {
            title: selector(SEL_TITLE)?,
            title_link: selector(SEL_TITLE_LINK)?,
            kind: selector(SEL_TYPE)?,
            description: selector(SEL_DESCRIPTION)?,
            speakers: selector(SEL_SPEAKERS)?,
            time: selector(SEL_TIME)?,
            room: selector(SEL_ROOM)?,
        })
    }
}

/// Parse a (repaired) schedule page into sessions, sorted by
/// (date, time_start, time_end, title).
pub fn parse_doc(html_doc: &str, dates: &[&str]) -> Result<Vec<Session>> {
    let doc = Html::parse_document(html_doc);
    let day_sel = selector(SEL_DAY)?;
    let sels = Selectors::new()?;

    let days: Vec<ElementRef<'_>> = doc.select(&day_sel).collect();
    if days.len() != dates.len() {
        warn!(
            "Found {} day containers for {} dates; pairing the first {}",
            days.len(),
            dates.len(),
            days.len().min(dates.len())
        );
    }

    let mut sessions = Vec::new();
    for (day, date) in days.into_iter().zip(dates.iter().copied()) {
        let parsed = parse_day(day, date, &sels)?;
        debug!("{date}: {} sessions", parsed.len());
        sessions.extend(parsed);
    }

    sort_sessions(&mut sessions);
    Ok(sessions)
}

/// Every direct child element of a day container is one session.
fn parse_day(day: ElementRef<'_>, date: &str, sels: &Selectors) -> Result<Vec<Session>> {
    child_elements(day)
        .enumerate()
        .map(|(i, el)| parse_session(el, date, sels).map_err(|e| e.in_session(date, i)))
        .collect()
}

fn parse_session(el: ElementRef<'_>, date: &str, sels: &Selectors) -> Result<Session> {
    let speakers = get_text(el, &sels.speakers).map(|s| strip_speaker_label(&s));

    let time_text = get_text(el, &sels.time).ok_or(ScrapeError::MissingElement(SEL_TIME))?;
    let (time_start, time_end) = parse_time_range(&time_text)?;
    let length_in_hours = calculate_length(&time_start, &time_end)?;

    let href = first_attr(el, &sels.title_link, "href")
        .ok_or(ScrapeError::MissingElement(SEL_TITLE_LINK))?;
    let event_id = event_id_from_href(href)?;

    Ok(Session {
        title: get_text(el, &sels.title),
        kind: get_text(el, &sels.kind),
        description: get_text(el, &sels.description),
        speakers,
        date: date.to_string(),
        time_start,
        time_end,
        length_in_hours,
        room: get_text(el, &sels.room),
        event_id,
        event_url: format!("{EVENT_HOST}{href}"),
    })
}

/// "9 am - 10:30 am" → ("09:00", "10:30")
fn parse_time_range(s: &str) -> Result<(String, String)> {
    let parts: Vec<&str> = s.split(" - ").collect();
    let [start, end] = parts[..] else {
        return Err(ScrapeError::TimeRange(s.to_string()));
    };
    Ok((convert_time(start)?, convert_time(end)?))
}

/// "/events/nicar-2019/sessions/4512/" → "sessions/4512"
/// (third- and second-from-last path segments).
fn event_id_from_href(href: &str) -> Result<String> {
    let segs: Vec<&str> = href.split('/').collect();
    if segs.len() < 3 {
        return Err(ScrapeError::Href(href.to_string()));
    }
    let n = segs.len();
    Ok(segs[n - 3..n - 1].join("/"))
}
