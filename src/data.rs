// src/data.rs
//
// The session record and the dataset-level operations on it.
//
// - Session: one scheduled event, fixed field set, serialized in declaration order.
// - sort_sessions: the one canonical ordering used for every export.

use std::cmp::Ordering;

use serde::Serialize;

use crate::core::time::{calculate_length, round3};
use crate::error::{Result, ScheduleError};

/// One scheduled session. Field order is the export key order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Session {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub speakers: Option<String>,
    pub date: String,
    pub time_start: String,
    pub time_end: String,
    pub length_in_hours: f64,
    pub room: String,
    pub event_id: String,
    pub event_url: String,
}

/// Raw pieces pulled off one session element, before derived fields exist.
#[derive(Clone, Debug, Default)]
pub struct SessionParts {
    pub title: String,
    pub kind: String,
    pub description: String,
    pub speakers: Option<String>,
    pub date: String,
    pub time_start: String,
    pub time_end: String,
    pub room: String,
    pub event_id: String,
    pub event_url: String,
}

impl Session {
    /// Build a record, deriving `length_in_hours` from the two times.
    /// `title`, `type` and `room` must be non-empty.
    pub fn new(parts: SessionParts) -> Result<Self> {
        let required = [
            ("title", &parts.title),
            ("type", &parts.kind),
            ("room", &parts.room),
        ];
        for (field, value) in required {
            if value.is_empty() {
                return Err(ScheduleError::EmptyField {
                    field,
                    event_id: parts.event_id.clone(),
                });
            }
        }

        let length = round3(calculate_length(&parts.time_start, &parts.time_end)?);
        if length < 0.0 {
            loge!(
                "Session {}: ends before it starts ({} - {}), length {}",
                parts.event_id, parts.time_start, parts.time_end, length
            );
        }

        let SessionParts {
            title, kind, description, speakers, date,
            time_start, time_end, room, event_id, event_url,
        } = parts;

        Ok(Self {
            title,
            kind,
            description,
            speakers,
            date,
            time_start,
            time_end,
            length_in_hours: length,
            room,
            event_id,
            event_url,
        })
    }

    fn sort_key(&self) -> (&str, &str, &str, &str) {
        (&self.date, &self.time_start, &self.time_end, &self.title)
    }
}

/// Order by (date, time_start, time_end, title). Stable: equal keys keep
/// their extraction order.
pub fn sort_sessions(sessions: &mut [Session]) {
    sessions.sort_by(compare);
}

fn compare(a: &Session, b: &Session) -> Ordering {
    a.sort_key().cmp(&b.sort_key())
}
