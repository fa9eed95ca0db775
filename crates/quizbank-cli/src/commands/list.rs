//! The `quizbank list` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use super::{Session, Target};

pub fn execute(target: Target) -> Result<()> {
    let session = Session::open(target)?;
    let quiz = &session.quiz;

    println!("{}", quiz.title);
    if !quiz.description.is_empty() {
        println!("{}", quiz.description);
    }
    let settings = &quiz.settings;
    println!(
        "Subject: {} | Time limit: {} min | Randomize: {} | Show answers: {}",
        settings.subject,
        settings.time_limit_minutes,
        if settings.randomize_questions { "yes" } else { "no" },
        if settings.show_answers { "yes" } else { "no" }
    );

    if quiz.bank.is_empty() {
        println!("\nNo questions added yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["#", "ID", "Type", "Question", "Answer", "Points"]);

    for (index, q) in quiz.bank.questions().iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(&q.id),
            Cell::new(q.kind().label()),
            Cell::new(&q.prompt),
            Cell::new(q.correct_answer().as_deref().unwrap_or("(graded manually)")),
            Cell::new(q.points),
        ]);
    }

    println!("\n{table}");

    let summary = quiz.bank.summary();
    println!(
        "\n{} question(s), {} total points",
        summary.question_count, summary.total_points
    );
    for (kind, share) in &summary.per_kind {
        println!(
            "  {}: {} question(s), {} points",
            kind.label(),
            share.questions,
            share.points
        );
    }

    if let Err(e) = quiz.check_ready() {
        println!("\nNot ready to publish: {e}");
    }

    Ok(())
}
