// src/cli.rs
use std::{env, path::PathBuf};

use crate::config::options::AppOptions;
use crate::core::net::{Fetch, HttpFetcher, StaticFetcher};
use crate::error::Result;
use crate::progress::Progress;
use crate::runner::{self, RunSummary};

/// Parsed command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params {
    pub options: AppOptions,
    /// Read the page from a saved file instead of the network.
    pub from_file: Option<PathBuf>,
    pub help: bool,
}

/// Prints status lines to stderr.
struct StderrProgress;

impl Progress for StderrProgress {
    fn begin(&mut self, total_days: usize) {
        eprintln!("Parsing {total_days} days…");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn day_done(&mut self, date: &str, sessions: usize) {
        eprintln!("  {date}: {sessions} sessions");
    }
}

pub fn run(params: &Params) -> Result<RunSummary> {
    let fetcher: Box<dyn Fetch> = match &params.from_file {
        Some(path) => Box::new(StaticFetcher::from_file(path)?),
        None => Box::new(HttpFetcher),
    };
    let mut progress = StderrProgress;
    runner::run(&params.options, fetcher.as_ref(), Some(&mut progress))
}

pub fn usage() -> &'static str {
    include_str!("cli_help.txt")
}

pub fn parse_args<I>(args: I) -> std::result::Result<Params, String>
where
    I: IntoIterator<Item = String>,
{
    let mut params = Params::default();
    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "--url" => params.options.scrape.url = args.next().ok_or("Missing value for --url")?,
            "-o" | "--out" => {
                let v = args.next().ok_or("Missing output path")?;
                params.options.export.set_path(&v);
            }
            "--from-file" => {
                let v = args.next().ok_or("Missing value for --from-file")?;
                params.from_file = Some(PathBuf::from(v));
            }
            "-h" | "--help" => params.help = true,
            _ => return Err(format!("Unknown arg: {}", a)),
        }
    }
    Ok(params)
}

pub fn parse_env() -> std::result::Result<Params, String> {
    parse_args(env::args().skip(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s!(*s)).collect()
    }

    #[test]
    fn no_args_is_defaults() {
        assert_eq!(parse_args(args(&[])).unwrap(), Params::default());
    }

    #[test]
    fn parses_all_flags() {
        let p = parse_args(args(&[
            "--url", "http://localhost/sched/",
            "-o", "out/s.csv",
            "--from-file", "page.html",
        ]))
        .unwrap();
        assert_eq!(p.options.scrape.url, "http://localhost/sched/");
        assert_eq!(p.options.export.json_path(), Path::new("out").join("s.json"));
        assert_eq!(p.from_file.as_deref(), Some(Path::new("page.html")));
        assert!(!p.help);
    }

    #[test]
    fn rejects_unknown_and_missing_values() {
        assert!(parse_args(args(&["--nope"])).is_err());
        assert!(parse_args(args(&["--url"])).is_err());
        assert!(parse_args(args(&["-o"])).is_err());
    }
}
