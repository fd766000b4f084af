// src/core/sanitize.rs

use std::sync::LazyLock;

use regex::Regex;

static SPEAKER_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Speakers?:\s+").unwrap());

/// Remove a leading "Speaker: " / "Speakers: " label.
/// Case-sensitive; anything else is returned as-is.
pub fn strip_speaker_label(s: &str) -> String {
    SPEAKER_LABEL.replace(s, "").into_owned()
}
