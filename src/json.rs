// src/json.rs
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::data::Session;
use crate::error::Result;

const INDENT: &[u8] = b"    ";

/// The full session list as one JSON array, 4-space indented.
pub fn to_json_bytes(sessions: &[Session]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    sessions.serialize(&mut ser)?;
    Ok(buf)
}
