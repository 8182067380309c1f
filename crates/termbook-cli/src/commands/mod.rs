//! Subcommand implementations.

pub mod add_term;
pub mod init;
pub mod quiz;
pub mod render;
pub mod stats;
pub mod terms;
pub mod texts;
