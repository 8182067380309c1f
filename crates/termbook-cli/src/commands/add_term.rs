//! The `termbook add-term` command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use termbook_core::model::{SubmissionOutcome, TermSubmission};
use termbook_core::traits::{NoopCache, ResponseCache};
use termbook_core::{load_config_from, TermStore};
use termbook_report::RenderedSite;

/// Exit code for a submission rejected by validation.
const EXIT_REJECTED: i32 = 2;

pub fn execute(
    config_path: Option<&Path>,
    term: String,
    definition: String,
    name: Option<String>,
    site: Option<PathBuf>,
    format: String,
) -> Result<()> {
    let config = load_config_from(config_path)?;
    let store = TermStore::new(config.terms_path());

    let cache: Box<dyn ResponseCache> = match site {
        Some(dir) => Box::new(RenderedSite::new(dir)),
        None => Box::new(NoopCache),
    };

    let submission = TermSubmission {
        name,
        term,
        definition,
    };
    let outcome = store.submit(&submission, &*cache)?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        match &outcome {
            SubmissionOutcome::Added { name, record } => {
                if let Some(name) = name {
                    println!("Thank you, {name}.");
                }
                println!("Added {}: {}", record.term, record.definition);
            }
            SubmissionOutcome::Rejected { reason, .. } => {
                eprintln!("Rejected ({}): {}", reason.field(), reason.message());
            }
        }
    }

    if !outcome.is_added() {
        std::process::exit(EXIT_REJECTED);
    }

    Ok(())
}
