//! quizbank CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "quizbank", version, about = "Quiz question bank editor")]
struct Cli {
    /// Quiz file to operate on (defaults to `quiz_file` from the config)
    #[arg(long, global = true)]
    quiz: Option<PathBuf>,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter config and sample quiz
    Init,

    /// Validate a quiz file, or every quiz in a directory
    Validate,

    /// List the questions in order
    List,

    /// Add a question
    Add {
        /// Question kind: multiple_choice, true_false, short_answer, essay
        #[arg(long, default_value = "multiple_choice")]
        kind: String,

        /// Question text
        #[arg(long)]
        prompt: String,

        /// Answer option (repeat for each multiple-choice option)
        #[arg(long = "option")]
        options: Vec<String>,

        /// Correct answer (an option's text, True/False, or the expected short answer)
        #[arg(long)]
        answer: Option<String>,

        /// Score weight (defaults to `default_points` from the config)
        #[arg(long)]
        points: Option<u32>,
    },

    /// Edit fields of an existing question
    Edit {
        /// Question ID
        #[arg(long)]
        id: String,

        /// Change the question kind (resets options and answer)
        #[arg(long)]
        kind: Option<String>,

        /// New question text
        #[arg(long)]
        prompt: Option<String>,

        /// Replacement options (repeat for each option)
        #[arg(long = "option")]
        options: Vec<String>,

        /// New correct answer
        #[arg(long)]
        answer: Option<String>,

        /// New score weight
        #[arg(long)]
        points: Option<u32>,
    },

    /// Delete a question
    Remove {
        /// Question ID
        #[arg(long)]
        id: String,
    },

    /// Append a copy of a question
    Duplicate {
        /// Question ID
        #[arg(long)]
        id: String,
    },

    /// Move a question one place up or down
    Move {
        /// Question ID
        #[arg(long)]
        id: String,

        /// up or down
        #[arg(long)]
        direction: String,
    },

    /// Render a preview of the quiz
    Preview {
        /// Output format: markdown, html, json
        #[arg(long, default_value = "markdown")]
        format: String,

        /// Output file (stdout for markdown/json when omitted, preview dir for html)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizbank=info".parse().expect("static directive")),
        )
        .init();

    let cli = Cli::parse();
    let target = commands::Target::new(cli.quiz, cli.config);

    let result = match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Validate => commands::validate::execute(target),
        Commands::List => commands::list::execute(target),
        Commands::Add {
            kind,
            prompt,
            options,
            answer,
            points,
        } => commands::add::execute(target, kind, prompt, options, answer, points),
        Commands::Edit {
            id,
            kind,
            prompt,
            options,
            answer,
            points,
        } => commands::edit::execute(target, id, kind, prompt, options, answer, points),
        Commands::Remove { id } => commands::remove::execute(target, id),
        Commands::Duplicate { id } => commands::duplicate::execute(target, id),
        Commands::Move { id, direction } => commands::reorder::execute(target, id, direction),
        Commands::Preview { format, output } => commands::preview::execute(target, format, output),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
