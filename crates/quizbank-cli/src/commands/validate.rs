//! The `quizbank validate` command.

use anyhow::Result;

use quizbank_core::parser;

use super::Target;

pub fn execute(target: Target) -> Result<()> {
    let (_, path) = target.resolve()?;

    let files = if path.is_dir() {
        parser::load_quiz_directory(&path)?
    } else {
        vec![(path.clone(), parser::parse_quiz(&path)?)]
    };

    let mut total_warnings = 0;

    for (file_path, quiz) in &files {
        println!(
            "Quiz: {} ({} questions) [{}]",
            quiz.title,
            quiz.questions.len(),
            file_path.display()
        );

        let warnings = parser::validate_quiz(quiz);
        for w in &warnings {
            let prefix = w
                .question_id
                .as_ref()
                .map(|id| format!("  [{id}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All quizzes valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
