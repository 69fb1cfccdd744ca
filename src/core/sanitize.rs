// src/core/sanitize.rs
use std::sync::OnceLock;

use regex::Regex;

/// Collapse any run of two or more newlines into exactly one blank line.
pub fn collapse_blank_lines(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\n\n+").expect("static pattern"));
    re.replace_all(s, "\n\n").into_owned()
}

/// Trim each paragraph, join with a blank line, trim the whole, collapse blank runs.
pub fn join_paragraphs<I, S>(grafs: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = grafs
        .into_iter()
        .map(|p| p.as_ref().trim().to_string())
        .collect::<Vec<_>>()
        .join("\n\n");
    collapse_blank_lines(joined.trim())
}

/// Last two `/`-delimited segments before the trailing slash:
/// `/a/b/123/slug/` → `123/slug`.
pub fn event_id_from_href(href: &str) -> String {
    let parts: Vec<&str> = href.split('/').collect();
    let end = parts.len().saturating_sub(1);
    let start = parts.len().saturating_sub(3);
    parts[start..end].join("/")
}
