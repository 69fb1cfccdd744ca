// src/core/encoding.rs
// Repair UTF-8 text that was encoded twice.
//
// The page is served as UTF-8, but some names and descriptions were stored
// after a latin-1 round trip, so "é" arrives as "Ã©". Each run of a lead
// char (U+00C2..=U+00F4) followed by continuation chars (U+0080..=U+00BF)
// is re-read as latin-1 bytes and decoded as UTF-8.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::error::Result;

fn mojibake() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"[\x{c2}-\x{f4}][\x{80}-\x{bf}]+").expect("static pattern")
    })
}

/// Decode the raw body as UTF-8, then repair embedded double-encoded runs.
pub fn fix_encoding(raw: &[u8]) -> Result<String> {
    let text = String::from_utf8(raw.to_vec())?;
    Ok(repair(&text))
}

/// Re-decode double-encoded runs in already-decoded text.
///
/// Passes repeat until nothing changes, so text encoded more than twice comes
/// out fully repaired and a second call is a no-op. Runs that do not form valid
/// UTF-8 are left as they are.
pub fn repair(text: &str) -> String {
    let mut out = s!(text);
    let mut passes = 0usize;
    loop {
        let (next, fixed) = repair_pass(&out);
        if fixed == 0 {
            break;
        }
        out = next;
        passes += 1;
    }
    if passes > 0 {
        logd!("Encoding: repaired in {} pass(es)", passes);
    }
    out
}

/// One replace over `text`. Returns the result and how many runs decoded.
/// Every successful decode shortens the text, so repeated passes terminate.
fn repair_pass(text: &str) -> (String, usize) {
    let mut fixed = 0usize;
    let out = mojibake().replace_all(text, |caps: &Captures| {
        let run = &caps[0];
        // Every char in the run is <= U+00F4, so each maps to one latin-1 byte.
        let bytes: Vec<u8> = run.chars().map(|c| c as u32 as u8).collect();
        match String::from_utf8(bytes) {
            Ok(s) => {
                fixed += 1;
                s
            }
            Err(_) => {
                logd!("Encoding: left undecodable run {:?}", run);
                s!(run)
            }
        }
    });
    (out.into_owned(), fixed)
}
