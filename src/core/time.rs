// src/core/time.rs
// Clock strings as printed on the schedule ("12:30 p.m.", "8 a.m.") → "HH:MM".

use crate::error::{Result, ScheduleError};

/// Convert a 12-hour schedule time to 24-hour `HH:MM`.
///
/// Minutes are optional and default to `00`. `12 p.m.` stays `12`, `1..=11 p.m.`
/// gain 12 hours, and `12 a.m.` maps to `00`. Nothing on the schedule runs
/// between midnight and 1 a.m., so that last case only matters for odd input.
pub fn convert_time(ts: &str) -> Result<String> {
    let bad = || ScheduleError::TimeFormat(s!(ts));

    let mut parts = ts.split(' ');
    let (Some(nums), Some(suffix), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(bad());
    };

    let is_pm = match suffix {
        "p.m." => true,
        "a.m." => false,
        _ => return Err(bad()),
    };

    let (h, m) = nums.split_once(':').unwrap_or((nums, "00"));
    let hours: u32 = h.parse().map_err(|_| bad())?;
    let minutes: u32 = m.parse().map_err(|_| bad())?;
    if !(1..=12).contains(&hours) || minutes > 59 {
        return Err(bad());
    }

    let hours = match (is_pm, hours) {
        (true, 12) => 12,
        (true, h) => h + 12,
        (false, 12) => 0,
        (false, h) => h,
    };
    Ok(format!("{hours:02}:{minutes:02}"))
}

fn minutes_of_day(hhmm: &str) -> Result<i64> {
    let bad = || ScheduleError::TimeFormat(s!(hhmm));
    let (h, m) = hhmm.split_once(':').ok_or_else(bad)?;
    let h: i64 = h.parse().map_err(|_| bad())?;
    let m: i64 = m.parse().map_err(|_| bad())?;
    Ok(h * 60 + m)
}

/// Hours between two same-day `HH:MM` times. Not clamped: an end before the
/// start gives a negative length.
pub fn calculate_length(start: &str, end: &str) -> Result<f64> {
    Ok((minutes_of_day(end)? - minutes_of_day(start)?) as f64 / 60.0)
}

/// Round to 3 fractional digits.
pub fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

/// Split `"<start> - <end>"` and convert both sides.
pub fn convert_range(range: &str) -> Result<(String, String)> {
    let mut sides = range.split(" - ");
    match (sides.next(), sides.next(), sides.next()) {
        (Some(start), Some(end), None) => Ok((convert_time(start)?, convert_time(end)?)),
        _ => Err(ScheduleError::TimeFormat(s!(range))),
    }
}
