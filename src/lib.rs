// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod csv;
pub mod data;
pub mod file;
pub mod json;
pub mod progress;
pub mod runner;
pub mod scrape;

pub use data::{sort_sessions, Session};
pub use error::{Result, ScheduleError};
