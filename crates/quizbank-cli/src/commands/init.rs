//! The `quizbank init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create quizbank.toml
    if std::path::Path::new("quizbank.toml").exists() {
        println!("quizbank.toml already exists, skipping.");
    } else {
        std::fs::write("quizbank.toml", SAMPLE_CONFIG)?;
        println!("Created quizbank.toml");
    }

    // Create sample quiz
    if std::path::Path::new("quiz.toml").exists() {
        println!("quiz.toml already exists, skipping.");
    } else {
        std::fs::write("quiz.toml", SAMPLE_QUIZ)?;
        println!("Created quiz.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: quizbank list");
    println!("  2. Run: quizbank add --kind short_answer --prompt \"2+2?\" --answer 4 --points 5");
    println!("  3. Run: quizbank preview --format html");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizbank configuration

quiz_file = "quiz.toml"
default_points = 10
default_option_count = 4
preview_dir = "./quizbank-preview"
"#;

const SAMPLE_QUIZ: &str = r#"[quiz]
title = "New Quiz"
description = "A sample quiz to get started"

[settings]
subject = "general"
time_limit_minutes = 30
randomize_questions = false
show_answers = true

[[questions]]
id = "q1"
kind = "multiple_choice"
prompt = "What is the capital of France?"
options = ["London", "Berlin", "Paris", "Madrid"]
correct_answer = "Paris"
points = 10

[[questions]]
id = "q2"
kind = "true_false"
prompt = "The Earth revolves around the Sun."
correct_answer = "True"
points = 5

[[questions]]
id = "q3"
kind = "short_answer"
prompt = "What does DNA stand for?"
correct_answer = "Deoxyribonucleic Acid"
points = 15
"#;
