// src/csv.rs
use serde::Serialize;

use crate::data::Session;
use crate::error::{Result, ScheduleError};

/// Tabular column order.
pub const COLUMNS: [&str; 11] = [
    "event_id",
    "type",
    "date",
    "time_start",
    "time_end",
    "room",
    "title",
    "speakers",
    "description",
    "event_url",
    "length_in_hours",
];

/// One output row; field order must match `COLUMNS`.
#[derive(Serialize)]
struct Row<'a> {
    event_id: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
    date: &'a str,
    time_start: &'a str,
    time_end: &'a str,
    room: &'a str,
    title: &'a str,
    speakers: Option<&'a str>,
    description: &'a str,
    event_url: &'a str,
    length_in_hours: f64,
}

impl<'a> From<&'a Session> for Row<'a> {
    fn from(s: &'a Session) -> Self {
        Self {
            event_id: &s.event_id,
            kind: &s.kind,
            date: &s.date,
            time_start: &s.time_start,
            time_end: &s.time_end,
            room: &s.room,
            title: &s.title,
            speakers: s.speakers.as_deref(),
            description: &s.description,
            event_url: &s.event_url,
            length_in_hours: s.length_in_hours,
        }
    }
}

/// Header row plus one row per session, CRLF-terminated, quoted where needed.
/// Absent speakers are written as an empty field.
pub fn to_csv_bytes(sessions: &[Session]) -> Result<Vec<u8>> {
    let mut wtr = ::csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(::csv::Terminator::CRLF)
        .from_writer(Vec::new());

    wtr.write_record(COLUMNS)?;
    for s in sessions {
        wtr.serialize(Row::from(s))?;
    }
    wtr.into_inner()
        .map_err(|e| ScheduleError::Io(e.into_error()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::session;

    #[test]
    fn header_only_for_empty_input() {
        let out = String::from_utf8(to_csv_bytes(&[]).unwrap()).unwrap();
        assert_eq!(out, join!(&COLUMNS.join(","), "\r\n"));
    }

    #[test]
    fn fields_with_delimiters_are_quoted() {
        let mut s = session("2018-03-08", "09:00", "10:30", "Maps, charts \"and\" more", "7/maps");
        s.speakers = Some(s!("Jane Doe, John Smith"));
        s.description = s!("One.\n\nTwo.");
        let out = String::from_utf8(to_csv_bytes(&[s]).unwrap()).unwrap();
        let row = out.split_once("\r\n").unwrap().1;
        assert!(row.starts_with("7/maps,Panel,2018-03-08,09:00,10:30,Room A,"));
        assert!(row.contains(r#""Maps, charts ""and"" more""#));
        assert!(row.contains(r#""Jane Doe, John Smith""#));
        assert!(row.contains("\"One.\n\nTwo.\""));
        assert!(row.ends_with(",https://ire.org/7/maps/,1.5\r\n"));
    }

    #[test]
    fn absent_speakers_is_empty_field() {
        let s = session("2018-03-08", "09:00", "10:00", "T", "1/t");
        let out = String::from_utf8(to_csv_bytes(&[s]).unwrap()).unwrap();
        assert!(out.contains(",T,,About things.,"), "{out}");
        assert!(out.ends_with(",1.0\r\n"), "{out}");
    }
}
