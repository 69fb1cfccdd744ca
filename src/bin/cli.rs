// src/bin/cli.rs
use color_eyre::eyre::{eyre, WrapErr};
use ire_schedule::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let params = cli::parse_env().map_err(|e| eyre!("{e}\n\n{}", cli::usage()))?;
    if params.help {
        eprintln!("{}", cli::usage());
        return Ok(());
    }

    let summary = cli::run(&params).wrap_err("Schedule scrape failed")?;
    for path in &summary.files_written {
        println!("Wrote {}", path.display());
    }
    println!("{} sessions", summary.sessions);
    Ok(())
}
