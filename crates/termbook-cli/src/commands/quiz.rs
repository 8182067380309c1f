//! The `termbook quiz` command.
//!
//! Without answers this shows the questions; with answers it grades them.

use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use termbook_core::load_config_from;
use termbook_core::quiz::{grade, load_questions, parse_answer_pairs};
use termbook_report::html;

pub fn execute(config_path: Option<&Path>, answers: Vec<String>, format: String) -> Result<()> {
    let config = load_config_from(config_path)?;
    let questions = load_questions(&config.quiz_path()).context("failed to load quiz")?;

    if answers.is_empty() {
        match format.as_str() {
            "json" => println!("{}", serde_json::to_string_pretty(&questions)?),
            "html" => println!("{}", html::render_quiz_questions(&questions)),
            _ => {
                for q in &questions {
                    println!("{:>3}. {}", q.index, q.prompt);
                }
                println!("\nAnswer with: termbook quiz --answer INDEX=ANSWER ...");
            }
        }
        return Ok(());
    }

    let answers = parse_answer_pairs(answers.as_slice())?;
    let outcome = grade(&questions, &answers)?;

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&outcome)?),
        "html" => println!("{}", html::render_quiz_result(&outcome)),
        _ => {
            let mut table = Table::new();
            table.set_header(vec!["#", "Text", "Your answer", "Expected", ""]);
            for a in &outcome.answers {
                table.add_row(vec![
                    Cell::new(a.index),
                    Cell::new(&a.prompt),
                    Cell::new(&a.submitted),
                    Cell::new(&a.expected),
                    Cell::new(if a.correct { "OK" } else { "WRONG" }),
                ]);
            }
            println!("{table}");
            println!(
                "Score: {:.1}% ({}/{})",
                outcome.score,
                outcome.correct_count(),
                outcome.answers.len()
            );
        }
    }

    Ok(())
}
