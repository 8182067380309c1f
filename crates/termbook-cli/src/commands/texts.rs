//! The `termbook texts` command.

use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use termbook_core::load_config_from;
use termbook_core::texts::load_texts;

pub fn execute(config_path: Option<&Path>, format: String) -> Result<()> {
    let config = load_config_from(config_path)?;
    let texts = load_texts(&config.texts_path()).context("failed to load texts")?;

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&texts)?),
        _ => {
            let mut table = Table::new();
            table.set_header(vec![Cell::new("#"), Cell::new("Text"), Cell::new("Translation")]);
            for t in &texts {
                table.add_row(vec![
                    Cell::new(t.index),
                    Cell::new(&t.text),
                    Cell::new(&t.translation),
                ]);
            }
            println!("{table}");
        }
    }

    Ok(())
}
