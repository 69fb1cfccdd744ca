// tests/pipeline_e2e.rs
//
// Full run against a saved page: fetch (static) → repair → parse → sort → export.
//
use std::fs;
use std::path::PathBuf;

use ire_schedule::config::options::{AppOptions, ScrapeOptions};
use ire_schedule::core::net::{Fetch, StaticFetcher};
use ire_schedule::error::{Result, ScheduleError};
use ire_schedule::progress::Progress;
use ire_schedule::runner;
use ire_schedule::scrape::collect_sessions;

const ONE_DAY: &str = include_str!("fixtures/one_day.html");

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("ire_schedule_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn one_day_options(out: &PathBuf) -> AppOptions {
    let mut opts = AppOptions::default();
    opts.scrape = ScrapeOptions {
        dates: vec!["2018-03-07".into()],
        ..ScrapeOptions::default()
    };
    opts.export.set_path(out.join("schedule").to_str().unwrap());
    opts
}

#[derive(Default)]
struct Recorder {
    days: Vec<(String, usize)>,
    finished: bool,
}

impl Progress for Recorder {
    fn day_done(&mut self, date: &str, sessions: usize) {
        self.days.push((date.to_string(), sessions));
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}

struct FailingFetcher;

impl Fetch for FailingFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        Err(ScheduleError::Fetch { url: url.to_string(), reason: "connection refused".into() })
    }
}

#[test]
fn two_sessions_one_day() {
    let dir = tmp_dir("two_sessions");
    let opts = one_day_options(&dir);
    let mut progress = Recorder::default();

    let summary = runner::run(&opts, &StaticFetcher::new(ONE_DAY), Some(&mut progress)).unwrap();
    assert_eq!(summary.sessions, 2);
    assert_eq!(summary.files_written, vec![dir.join("schedule.json"), dir.join("schedule.csv")]);
    assert_eq!(progress.days, vec![("2018-03-07".to_string(), 2)]);
    assert!(progress.finished);

    let csv = fs::read_to_string(dir.join("schedule.csv")).unwrap();
    assert_eq!(csv.lines().count(), 3);
    assert!(csv.starts_with(
        "event_id,type,date,time_start,time_end,room,title,speakers,description,event_url,length_in_hours\r\n"
    ));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.join("schedule.json")).unwrap()).unwrap();
    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r["date"] == "2018-03-07"));

    // sorted by start time: the 9 a.m. panel comes first
    assert_eq!(records[0]["title"], "Ethics, data & you");
    assert_eq!(records[0]["event_id"], "3290/data-journalism-ethics");
    assert_eq!(records[0]["speakers"], serde_json::Value::Null);
    assert_eq!(records[0]["length_in_hours"], 1.0);

    let qgis = &records[1];
    assert_eq!(qgis["type"], "Hands-on");
    assert_eq!(qgis["speakers"], "José García, Jane Doe");
    assert_eq!(qgis["description"], "Learn to make a choropleth map.");
    assert_eq!(qgis["room"], "Salon 4");
    assert_eq!(qgis["time_start"], "14:15");
    assert_eq!(qgis["time_end"], "15:30");
    assert_eq!(qgis["length_in_hours"], 1.25);
    assert_eq!(
        qgis["event_url"],
        "https://ire.org/conferences/nicar18/schedule/3311/mapping-with-qgis/"
    );
}

#[test]
fn csv_rows_match_json_records() {
    let dir = tmp_dir("round_trip");
    let opts = one_day_options(&dir);
    runner::run(&opts, &StaticFetcher::new(ONE_DAY), None).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.join("schedule.json")).unwrap()).unwrap();
    let mut rdr = csv::Reader::from_path(dir.join("schedule.csv")).unwrap();
    let headers = rdr.headers().unwrap().clone();
    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();

    let records = json.as_array().unwrap();
    assert_eq!(rows.len(), records.len());
    for (row, record) in rows.iter().zip(records) {
        let obj = record.as_object().unwrap();
        assert_eq!(obj.len(), headers.len());
        for (col, cell) in headers.iter().zip(row.iter()) {
            let expected = match &obj[col] {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Null => String::new(),
                other => other.to_string(),
            };
            assert_eq!(cell, expected, "column {col}");
        }
    }
}

#[test]
fn fetch_failure_writes_nothing() {
    let dir = tmp_dir("fetch_fail");
    let opts = one_day_options(&dir);
    let err = runner::run(&opts, &FailingFetcher, None).unwrap_err();
    assert!(err.to_string().contains("connection refused"));
    assert!(!dir.join("schedule.json").exists());
    assert!(!dir.join("schedule.csv").exists());
}

#[test]
fn parse_failure_writes_nothing() {
    let dir = tmp_dir("parse_fail");
    let opts = one_day_options(&dir);
    let broken = ONE_DAY.replace("9 a.m. - 10 a.m.", "9ish - 10ish");
    let err = runner::run(&opts, &StaticFetcher::new(broken), None).unwrap_err();
    assert!(matches!(err, ScheduleError::TimeFormat(_)));
    assert!(!dir.join("schedule.json").exists());
    assert!(!dir.join("schedule.csv").exists());
}

#[test]
fn default_dates_reject_a_one_day_page() {
    let err = collect_sessions(&StaticFetcher::new(ONE_DAY), &ScrapeOptions::default(), None)
        .unwrap_err();
    assert!(matches!(err, ScheduleError::DayCountMismatch { found: 1, expected: 5 }));
}
