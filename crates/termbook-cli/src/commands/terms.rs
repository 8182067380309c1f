//! The `termbook terms` command.

use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use termbook_core::{load_config_from, TermStore};

pub fn execute(config_path: Option<&Path>, format: String) -> Result<()> {
    let config = load_config_from(config_path)?;
    let store = TermStore::new(config.terms_path());
    let terms = store.load_terms().context("failed to load terms")?;

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&terms)?),
        _ => {
            let mut table = Table::new();
            table.set_header(vec![Cell::new("#"), Cell::new("Term"), Cell::new("Definition")]);
            for t in &terms {
                table.add_row(vec![
                    Cell::new(t.index),
                    Cell::new(&t.term),
                    Cell::new(&t.definition),
                ]);
            }
            println!("{table}");
            println!("{} term(s)", terms.len());
        }
    }

    Ok(())
}
