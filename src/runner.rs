// src/runner.rs
use std::path::PathBuf;

use crate::{
    config::options::AppOptions,
    core::net::Fetch,
    error::Result,
    file::write_exports,
    progress::Progress,
    scrape::collect_sessions,
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub sessions: usize,
    pub files_written: Vec<PathBuf>,
}

/// Top-level run: collect every session, then write both exports.
/// Nothing is written unless every session parsed.
pub fn run(
    options: &AppOptions,
    fetcher: &dyn Fetch,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<RunSummary> {
    logf!("Run: Begin url={}", options.scrape.url);

    let result = collect_sessions(fetcher, &options.scrape, progress.as_deref_mut())
        .and_then(|sessions| {
            let files_written = write_exports(&options.export, &sessions)?;
            Ok(RunSummary { sessions: sessions.len(), files_written })
        });

    match &result {
        Ok(summary) => logf!("Run: OK sessions={} files={}", summary.sessions, summary.files_written.len()),
        Err(e) => loge!("Run: Error: {}", e),
    }
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    result
}
