//! The `quizbank preview` command.

use std::path::PathBuf;

use anyhow::Result;

use quizbank_report::html::write_html_preview;
use quizbank_report::json::{generate_json, write_json_preview};
use quizbank_report::markdown::generate_markdown;

use super::{Session, Target};

pub fn execute(target: Target, format: String, output: Option<PathBuf>) -> Result<()> {
    let session = Session::open(target)?;
    let quiz = &session.quiz;

    if let Err(e) = quiz.check_ready() {
        tracing::warn!("previewing an incomplete quiz: {e}");
    }

    match format.as_str() {
        "html" => {
            let path = output.unwrap_or_else(|| session.config.preview_dir.join("quiz.html"));
            write_html_preview(quiz, &path)?;
            println!("HTML preview: {}", path.display());
        }
        "json" => match output {
            Some(path) => {
                write_json_preview(quiz, &path)?;
                println!("JSON export: {}", path.display());
            }
            None => println!("{}", generate_json(quiz)?),
        },
        "markdown" | "md" => {
            let md = generate_markdown(quiz);
            match output {
                Some(path) => {
                    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, md)?;
                    println!("Markdown preview: {}", path.display());
                }
                None => print!("{md}"),
            }
        }
        other => anyhow::bail!("unknown format: {other} (expected markdown, html or json)"),
    }

    Ok(())
}
