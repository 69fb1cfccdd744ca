// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

/// Where the schedule lives and how day containers map to dates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub url: String,
    pub link_host: String,
    pub dates: Vec<String>,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            url: s!(SCHEDULE_URL),
            link_host: s!(LINK_HOST),
            dates: DATES.iter().map(|d| s!(*d)).collect(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

/// Both outputs share one base name; the format picks the extension.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ExportOptions {
    out_path: OutputPath,
}

impl ExportOptions {
    pub fn out_path(&self, format: ExportFormat) -> PathBuf {
        let stem = self.out_path.file_stem.to_string_lossy();
        self.out_path.dir.join(join!(stem, ".", format.ext()))
    }

    pub fn json_path(&self) -> PathBuf {
        self.out_path(ExportFormat::Json)
    }

    pub fn csv_path(&self) -> PathBuf {
        self.out_path(ExportFormat::Csv)
    }

    /// Parse user text into dir + stem. A pasted extension is dropped;
    /// the format controls it.
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
        }
    }
}
