// src/specs/schedule.rs
use std::collections::HashSet;
use std::time::Instant;

use scraper::{ElementRef, Selector};

use crate::config::consts::*;
use crate::config::options::ScrapeOptions;
use crate::core::html::{self, child_elements, require, text_content, text_trimmed};
use crate::core::sanitize::{event_id_from_href, join_paragraphs};
use crate::core::speakers::extract_speakers;
use crate::core::time::convert_range;
use crate::data::{Session, SessionParts};
use crate::error::{Result, ScheduleError};
use crate::progress::Progress;

/// Compiled selectors for one pass over the page.
struct Selectors {
    day: Selector,
    kind: Selector,
    title: Selector,
    link: Selector,
    grafs: Selector,
    meta: Selector,
}

impl Selectors {
    fn new() -> Result<Self> {
        Ok(Self {
            day: html::selector(SEL_DAY)?,
            kind: html::selector(SEL_TYPE)?,
            title: html::selector(SEL_TITLE)?,
            link: html::selector(SEL_LINK)?,
            grafs: html::selector(SEL_GRAFS)?,
            meta: html::selector(SEL_META)?,
        })
    }
}

/// Extract every session from the (encoding-repaired) schedule page.
///
/// Day containers pair with `opts.dates` by position; a count mismatch is an
/// error rather than a silent truncation. Output is in page order, unsorted.
pub fn parse_doc(
    doc: &str,
    opts: &ScrapeOptions,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<Vec<Session>> {
    let t = Instant::now();
    let sel = Selectors::new()?;
    let dom = html::parse(doc);

    let days: Vec<ElementRef> = dom.select(&sel.day).collect();
    if days.len() != opts.dates.len() {
        return Err(ScheduleError::DayCountMismatch {
            found: days.len(),
            expected: opts.dates.len(),
        });
    }

    if let Some(p) = progress.as_deref_mut() {
        p.begin(days.len());
    }

    let mut sessions = Vec::new();
    let mut seen_ids: HashSet<String> = HashSet::new();
    for (day, date) in days.into_iter().zip(&opts.dates) {
        let before = sessions.len();
        for (i, el) in child_elements(day).enumerate() {
            let context = format!("session {} on {}", i + 1, date);
            let session = parse_session(el, date, &opts.link_host, &sel, &context)?;
            if !seen_ids.insert(session.event_id.clone()) {
                return Err(ScheduleError::DuplicateEventId(session.event_id));
            }
            sessions.push(session);
        }
        let count = sessions.len() - before;
        logd!("Schedule: {} → {} sessions", date, count);
        if let Some(p) = progress.as_deref_mut() {
            p.day_done(date, count);
        }
    }

    logf!("Schedule: parsed {} sessions in {:?}", sessions.len(), t.elapsed());
    Ok(sessions)
}

fn parse_session(
    el: ElementRef<'_>,
    date: &str,
    link_host: &str,
    sel: &Selectors,
    context: &str,
) -> Result<Session> {
    let kind = text_trimmed(require(el, &sel.kind, SEL_TYPE, context)?);
    let title = text_trimmed(require(el, &sel.title, SEL_TITLE, context)?);

    let href = require(el, &sel.link, SEL_LINK, context)?
        .value()
        .attr("href")
        .ok_or_else(|| ScheduleError::MissingElement {
            selector: join!(SEL_LINK, "[href]"),
            context: s!(context),
        })?;

    let desc = join_paragraphs(el.select(&sel.grafs).map(text_content));
    let (speakers, description) = extract_speakers(&desc);

    let meta: Vec<String> = el.select(&sel.meta).map(text_trimmed).collect();
    let [room, range] = <[String; 2]>::try_from(meta).map_err(|meta| ScheduleError::MetaCount {
        context: s!(context),
        found: meta.len(),
    })?;
    let (time_start, time_end) = convert_range(&range)?;

    Session::new(SessionParts {
        title,
        kind,
        description,
        speakers,
        date: s!(date),
        time_start,
        time_end,
        room,
        event_id: event_id_from_href(href),
        event_url: join!(link_host, href),
    })
}
