// src/scrape.rs
use crate::{
    config::options::ScrapeOptions,
    core::{encoding::fix_encoding, net::Fetch},
    data::{sort_sessions, Session},
    error::Result,
    progress::Progress,
    specs,
};

/// Fetch, repair, parse and sort every session on the schedule page.
pub fn collect_sessions(
    fetcher: &dyn Fetch,
    scrape: &ScrapeOptions,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<Vec<Session>> {
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Fetching {}…", scrape.url));
    }
    let raw = fetcher.fetch(&scrape.url)?;
    let doc = fix_encoding(&raw)?;

    let mut sessions = specs::schedule::parse_doc(&doc, scrape, progress.as_deref_mut())?;
    sort_sessions(&mut sessions);
    Ok(sessions)
}
