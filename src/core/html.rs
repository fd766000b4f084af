// src/core/html.rs
// Small helpers over `scraper` for pulling text out of a session block.

use scraper::{ElementRef, Selector};

use crate::error::{Result, ScrapeError};

pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector(format!("{css:?}: {e}")))
}

/// Full text content of an element, trimmed.
pub fn text_content(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Trimmed text of every match under `el`, non-empty ones joined by a blank
/// line. `None` when nothing (or only whitespace) matched.
pub fn get_text(el: ElementRef<'_>, sel: &Selector) -> Option<String> {
    let parts: Vec<String> = el
        .select(sel)
        .map(text_content)
        .filter(|t| !t.is_empty())
        .collect();

    if parts.is_empty() { None } else { Some(parts.join("\n\n")) }
}

/// Attribute of the first match under `el`.
pub fn first_attr<'a>(el: ElementRef<'a>, sel: &Selector, attr: &str) -> Option<&'a str> {
    el.select(sel).next()?.value().attr(attr)
}

/// Direct child elements, skipping text and comment nodes.
pub fn child_elements(el: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    el.children().filter_map(ElementRef::wrap)
}
