// src/config/consts.rs

// Net config
pub const SCHEDULE_URL: &str =
    "https://www.ire.org/events-and-training/conferences/nicar-2019/schedule";
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.13; rv:65.0) Gecko/20100101 Firefox/65.0";
pub const EVENT_HOST: &str = "https://ire.org";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Conference days, in page order
pub const DATES: [&str; 5] = [
    "2019-03-06",
    "2019-03-07",
    "2019-03-08",
    "2019-03-09",
    "2019-03-10",
];

// Export
pub const DEFAULT_DEST: &str = "schedule/nicar-2019-schedule";

// Page layout
pub const SEL_DAY: &str = "ul.schedule-list.pane";
pub const SEL_TITLE: &str = ".event-title";
pub const SEL_TITLE_LINK: &str = ".event-title a";
pub const SEL_TYPE: &str = ".event-type";
pub const SEL_DESCRIPTION: &str = ".event-content p:not(.event-speakers)";
pub const SEL_SPEAKERS: &str = ".event-speakers";
pub const SEL_TIME: &str = ".event-meta p";
pub const SEL_ROOM: &str = ".event-meta h4";
