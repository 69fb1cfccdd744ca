// src/core/mod.rs

pub mod encoding;
pub mod html;
pub mod net;
pub mod sanitize;
pub mod speakers;
pub mod time;
