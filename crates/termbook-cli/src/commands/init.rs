//! The `termbook init` command.

use std::path::Path;

use anyhow::{Context, Result};

pub fn execute() -> Result<()> {
    write_if_missing(Path::new("termbook.toml"), SAMPLE_CONFIG)?;

    std::fs::create_dir_all("data").context("failed to create data directory")?;
    write_if_missing(Path::new("data/terms.csv"), SEED_TERMS)?;
    write_if_missing(Path::new("data/texts.csv"), SEED_TEXTS)?;
    write_if_missing(Path::new("data/tests.csv"), SEED_QUIZ)?;

    println!("\nNext steps:");
    println!("  1. Run: termbook terms");
    println!("  2. Run: termbook quiz");
    println!("  3. Run: termbook render --output site");

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
    } else {
        std::fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Created {}", path.display());
    }
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# termbook configuration

data_dir = "./data"
terms_file = "terms.csv"
texts_file = "texts.csv"
quiz_file = "tests.csv"
"#;

const SEED_TERMS: &str = "term;definition;source
affix;a morpheme attached to a word stem to form a new word;db
cognate;a word that has the same origin as a word in another language;db
idiom;a group of words whose meaning is not deducible from the individual words;db
lexeme;an abstract unit of vocabulary underlying a set of inflected forms;db
morpheme;the smallest meaningful unit of a language;db
";

const SEED_TEXTS: &str = "text;translation;source
Break a leg;Good luck;db
Piece of cake;Something very easy;db
Under the weather;Feeling ill;db
";

const SEED_QUIZ: &str = "text;country
Bonjour;France
Ciao;Italy
Hola;Spain
Guten Tag;Germany
";
