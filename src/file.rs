// src/file.rs

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::config::options::ExportOptions;
use crate::csv::to_csv_bytes;
use crate::data::Session;
use crate::error::Result;
use crate::json::to_json_bytes;

/// Write both exports. Both documents are rendered before either file is
/// touched, and each lands via temp file + rename, so a failed run never leaves
/// a half-written file at the destination.
/// Returns the final paths, JSON first.
pub fn write_exports(export: &ExportOptions, sessions: &[Session]) -> Result<Vec<PathBuf>> {
    let json = to_json_bytes(sessions)?;
    let csv = to_csv_bytes(sessions)?;

    let json_path = export.json_path();
    let csv_path = export.csv_path();

    write_atomic(&json_path, &json)?;
    write_atomic(&csv_path, &csv)?;

    logf!(
        "Export: OK sessions={} json={} csv={}",
        sessions.len(), json_path.display(), csv_path.display()
    );
    Ok(vec![json_path, csv_path])
}

/// Replace `path` with `contents` via a sibling temp file.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    ensure_directory(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    logd!("Export: wrote {} ({} bytes)", path.display(), contents.len());
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        ))
        .into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
