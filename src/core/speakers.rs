// src/core/speakers.rs
use std::sync::OnceLock;

use regex::Regex;

fn speaker_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)^(Speakers?: ([^\n]+))?(.*)$").expect("static pattern"))
}

/// Pull a leading `Speaker(s): <names>` line off a description.
///
/// Returns `(speakers, rest)`. Only a line at the very start of the text counts;
/// `rest` is always trimmed.
pub fn extract_speakers(description: &str) -> (Option<String>, String) {
    match speaker_line().captures(description) {
        Some(caps) => {
            let names = caps.get(2).map(|m| s!(m.as_str()));
            let rest = caps.get(3).map_or("", |m| m.as_str()).trim();
            (names, s!(rest))
        }
        // (?s).*$ matches any input; kept total for safety.
        None => (None, s!(description.trim())),
    }
}
