// tests/schedule_parse.rs
//
// parse_doc on inline pages, no files or network.
//
use nicar_schedule::config::consts::DATES;
use nicar_schedule::core::encoding::fix_encoding;
use nicar_schedule::specs::schedule::parse_doc;

fn session(href: &str, title: &str, window: &str) -> String {
    format!(
        r#"<li><h3 class="event-title"><a href="{href}">{title}</a></h3>
           <div class="event-meta"><h4>Room</h4><p>{window}</p></div></li>"#
    )
}

fn page(days: &[Vec<String>]) -> String {
    let mut html = String::from("<html><body>");
    for day in days {
        html.push_str(r#"<ul class="schedule-list pane">"#);
        for s in day {
            html.push_str(s);
        }
        html.push_str("</ul>");
    }
    html.push_str("</body></html>");
    html
}

#[test]
fn one_session_per_day_day_one_first() {
    // day 2's session starts earlier in the day than day 1's
    let doc = page(&[
        vec![session("/s/2/x/", "Late start", "4 pm - 5 pm")],
        vec![session("/s/1/x/", "Early start", "8 am - 9 am")],
    ]);
    let out = parse_doc(&doc, &DATES).unwrap();
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].date, "2019-03-06");
    assert_eq!(out[0].title.as_deref(), Some("Late start"));
    assert_eq!(out[1].date, "2019-03-07");
    assert_eq!(out[0].event_id, "2/x");
}

#[test]
fn same_start_breaks_by_end_then_title() {
    let doc = page(&[vec![
        session("/s/1/", "Zebra", "9 am - 10 am"),
        session("/s/2/", "Apple", "9 am - 11 am"),
        session("/s/3/", "Mango", "9 am - 10 am"),
        session("/s/4/", "Early", "8:30 am - 12 pm"),
    ]]);
    let out = parse_doc(&doc, &DATES).unwrap();
    let titles: Vec<_> = out.iter().filter_map(|s| s.title.as_deref()).collect();
    assert_eq!(titles, vec!["Early", "Mango", "Zebra", "Apple"]);
    assert_eq!(out[0].length_in_hours, 3.5);
}

#[test]
fn overnight_session_is_kept_and_flagged() {
    let doc = page(&[vec![session("/s/9/", "Late night", "11 pm - 1 am")]]);
    let out = parse_doc(&doc, &DATES).unwrap();
    let s = &out[0];
    assert_eq!((s.time_start.as_str(), s.time_end.as_str()), ("23:00", "01:00"));
    assert!(s.is_inverted());
    assert_eq!(s.length_in_hours, -22.0);
}

#[test]
fn no_day_containers_yields_nothing() {
    let out = parse_doc("<html><body><p>Schedule coming soon</p></body></html>", &DATES).unwrap();
    assert!(out.is_empty());
}

#[test]
fn repaired_text_parses_to_single_char() {
    let repaired = fix_encoding(&page(&[vec![session("/s/1/", "Se\u{c3}\u{b1}or data", "9 am - 10 am")]])).unwrap();
    let out = parse_doc(&repaired, &DATES).unwrap();
    assert_eq!(out[0].title.as_deref(), Some("Señor data"));
}
