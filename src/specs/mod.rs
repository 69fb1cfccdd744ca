// src/specs/mod.rs
//! # Page “specs”
//!
//! Page-specific extraction: *where the ground truth lives in the HTML* and
//! *how to read it into records*.
//!
//! ## What lives here
//! - **Pure parsing** of an already fetched, encoding-repaired page.
//! - **Selector choice** for each field (see `config::consts::SEL_*`).
//! - **Shaping** into `data::Session` records.
//!
//! ## What does **not** live here
//! - **Fetching** (`core::net`) and **encoding repair** (`core::encoding`).
//! - **Ordering and export** (`data::sort_sessions`, `csv`, `json`, `file`).
//!
//! ## Typical call chain
//! ```text
//! runner::run → scrape::collect_sessions → core::net → core::encoding
//!                                        → specs::schedule::parse_doc
//!             → file::write_exports
//! ```
//!
//! ## Conventions & invariants
//! - The layout is assumed stable: a missing region is an error, never a
//!   fallback.
//! - Specs are testable **offline** against inline snippets or saved fixtures.
pub mod schedule;
