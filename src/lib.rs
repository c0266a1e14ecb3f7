//! Launch records dashboard.
//!
//! Loads a CSV of launch records once, then serves a page whose pie and
//! scatter charts are recomputed from the immutable table on every control
//! change.

pub mod api;
pub mod charts;
pub mod client;
pub mod config;
pub mod data;
pub mod models;
