//! termbook CLI — browse the glossary, take the quiz, contribute terms.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use termbook_core::StoreError;

mod commands;

#[derive(Parser)]
#[command(
    name = "termbook",
    version,
    about = "Glossary, texts, and quiz over flat data files"
)]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List glossary terms
    Terms {
        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// List texts with translations
    Texts {
        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Show glossary statistics
    Stats {
        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Show the quiz, or grade answers when any are given
    Quiz {
        /// Answer as INDEX=ANSWER (repeatable)
        #[arg(long = "answer", short = 'a')]
        answers: Vec<String>,

        /// Output format: text, json, html
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Contribute a new glossary term
    AddTerm {
        /// The term
        #[arg(long, default_value = "")]
        term: String,

        /// Its definition
        #[arg(long, default_value = "")]
        definition: String,

        /// Contributor name
        #[arg(long)]
        name: Option<String>,

        /// Rendered site directory to invalidate after adding
        #[arg(long)]
        site: Option<PathBuf>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Render the static HTML site
    Render {
        /// Output directory
        #[arg(long, default_value = "./site")]
        output: PathBuf,
    },

    /// Create starter config and data files
    Init,
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Terms { .. } => "terms",
            Commands::Texts { .. } => "texts",
            Commands::Stats { .. } => "stats",
            Commands::Quiz { .. } => "quiz",
            Commands::AddTerm { .. } => "add-term",
            Commands::Render { .. } => "render",
            Commands::Init => "init",
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("termbook=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.config.as_deref();

    tracing::debug!(config = ?config, "dispatching {}", cli.command.name());

    let result = match cli.command {
        Commands::Terms { format } => commands::terms::execute(config, format),
        Commands::Texts { format } => commands::texts::execute(config, format),
        Commands::Stats { format } => commands::stats::execute(config, format),
        Commands::Quiz { answers, format } => commands::quiz::execute(config, answers, format),
        Commands::AddTerm {
            term,
            definition,
            name,
            site,
            format,
        } => commands::add_term::execute(config, term, definition, name, site, format),
        Commands::Render { output } => commands::render::execute(config, output),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(exit_code(&e));
    }
}

/// 3 for malformed or empty data files, 1 for everything else.
fn exit_code(err: &anyhow::Error) -> i32 {
    let data_error = err
        .chain()
        .filter_map(|cause| cause.downcast_ref::<StoreError>())
        .any(StoreError::is_data_error);
    if data_error {
        3
    } else {
        1
    }
}
