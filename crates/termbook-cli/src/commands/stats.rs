//! The `termbook stats` command.

use std::path::Path;

use anyhow::{Context, Result};

use termbook_core::load_config_from;
use termbook_core::statistics::compute_stats;

pub fn execute(config_path: Option<&Path>, format: String) -> Result<()> {
    let config = load_config_from(config_path)?;
    let stats = compute_stats(&config.terms_path()).context("failed to compute statistics")?;

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&stats)?),
        _ => {
            println!("Terms in total:     {}", stats.terms_all);
            println!("  pre-seeded:       {}", stats.terms_own);
            println!("  added by readers: {}", stats.terms_added);
            if stats.terms_other > 0 {
                println!("  unclassified:     {}", stats.terms_other);
            }
            println!("Words per definition:");
            println!("  average:          {:.2}", stats.words_avg);
            println!("  max:              {}", stats.words_max);
            println!("  min:              {}", stats.words_min);
        }
    }

    Ok(())
}
