//! Shared building blocks for the content API crates: response envelopes,
//! logging setup and small text helpers.

pub mod types;
pub mod utils;
