// src/core/html.rs
// Thin glue over `scraper`: compile selectors, require matches, read text.

use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, ScheduleError};

pub fn parse(doc: &str) -> Html {
    Html::parse_document(doc)
}

pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|_| ScheduleError::Selector(s!(css)))
}

/// First descendant matching `sel`, or a structural parse error naming `css`.
pub fn require<'a>(
    el: ElementRef<'a>,
    sel: &Selector,
    css: &str,
    context: &str,
) -> Result<ElementRef<'a>> {
    el.select(sel).next().ok_or_else(|| ScheduleError::MissingElement {
        selector: s!(css),
        context: s!(context),
    })
}

/// Concatenated descendant text, like a DOM `textContent`.
pub fn text_content(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Trimmed `text_content`.
pub fn text_trimmed(el: ElementRef<'_>) -> String {
    text_content(el).trim().to_string()
}

/// Direct element children, in document order. Text and comment nodes are skipped.
pub fn child_elements<'a>(el: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    el.children().filter_map(ElementRef::wrap)
}
