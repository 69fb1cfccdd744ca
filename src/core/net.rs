// src/core/net.rs

// Single blocking GET. No headers, auth, retries or pagination.

use std::time::Instant;

use crate::error::{Result, ScheduleError};

/// Source of raw page bytes. The pipeline only ever asks for one URL.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// Live fetcher backed by `reqwest`'s blocking client.
#[derive(Default)]
pub struct HttpFetcher;

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let t = Instant::now();
        let http_err = |source| ScheduleError::Http { url: s!(url), source };

        let resp = reqwest::blocking::get(url)
            .and_then(|r| r.error_for_status())
            .map_err(http_err)?;
        let body = resp.bytes().map_err(http_err)?;

        logf!("Fetch: GET {} → {} bytes in {:?}", url, body.len(), t.elapsed());
        Ok(body.to_vec())
    }
}

/// Serves a fixed body for any URL. Used for offline runs against saved pages.
pub struct StaticFetcher {
    body: Vec<u8>,
}

impl StaticFetcher {
    pub fn new(body: impl Into<Vec<u8>>) -> Self {
        Self { body: body.into() }
    }

    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let body = std::fs::read(path).map_err(|e| ScheduleError::Fetch {
            url: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { body })
    }
}

impl Fetch for StaticFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        logd!("Fetch: static body for {} ({} bytes)", url, self.body.len());
        Ok(self.body.clone())
    }
}
