// src/error.rs
use std::io;

use thiserror::Error;

/// Everything that can stop a run. Every variant is fatal: there is no
/// skip-and-continue per session.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Fetch failed for {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("Decode: response body is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    #[error("Parse: invalid selector `{0}`")]
    Selector(String),

    #[error("Parse: `{selector}` not found in {context}")]
    MissingElement { selector: String, context: String },

    #[error("Parse: found {found} day containers but {expected} dates are configured")]
    DayCountMismatch { found: usize, expected: usize },

    #[error("Parse: expected 2 metadata paragraphs (room, time) in {context}, found {found}")]
    MetaCount { context: String, found: usize },

    #[error("Parse: session {event_id} has an empty `{field}`")]
    EmptyField { field: &'static str, event_id: String },

    #[error("Parse: event id `{0}` appears on more than one session")]
    DuplicateEventId(String),

    #[error("Format: can't parse time `{0}`")]
    TimeFormat(String),

    #[error("Write: {0}")]
    Io(#[from] io::Error),

    #[error("Write JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Write CSV: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
