//! termbook-core — flat-file term store, statistics, and quiz grading.
//!
//! This crate owns the data files: it parses them, appends contributed terms,
//! aggregates statistics, and grades quiz submissions. Rendering is left to
//! `termbook-report` and the CLI.

pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod quiz;
pub mod statistics;
pub mod store;
pub mod texts;
pub mod traits;

pub use config::{load_config_from, TermbookConfig};
pub use error::StoreError;
pub use store::TermStore;
