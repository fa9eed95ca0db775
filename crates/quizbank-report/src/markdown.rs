//! Markdown quiz preview, for pasting into issues, wikis or LMS pages.

use quizbank_core::model::QuestionBody;
use quizbank_core::quiz::Quiz;

use crate::{marked_options, points_label, settings_line, MANUAL_GRADING_NOTE};

/// Render the quiz as Markdown with the answer key marked.
pub fn generate_markdown(quiz: &Quiz) -> String {
    let summary = quiz.bank.summary();
    let mut md = String::new();

    md.push_str(&format!("# {}\n\n", quiz.title));
    if !quiz.description.trim().is_empty() {
        md.push_str(&format!("{}\n\n", quiz.description.trim()));
    }
    md.push_str(&format!(
        "**Summary:** {} questions, {}\n\n",
        summary.question_count,
        points_label(summary.total_points)
    ));
    md.push_str(&format!("**Settings:** {}\n\n", settings_line(&quiz.settings)));

    if quiz.bank.is_empty() {
        md.push_str("_No questions added yet._\n");
        return md;
    }

    for (index, q) in quiz.bank.questions().iter().enumerate() {
        md.push_str(&format!(
            "### Question {}: {}\n\n*{}, {}*\n\n",
            index + 1,
            q.prompt,
            q.kind().label(),
            points_label(q.points)
        ));

        match &q.body {
            QuestionBody::MultipleChoice { .. } | QuestionBody::TrueFalse { .. } => {
                for (option, correct) in marked_options(q).unwrap_or_default() {
                    let check = if correct { "x" } else { " " };
                    md.push_str(&format!("- [{check}] {option}\n"));
                }
            }
            QuestionBody::ShortAnswer { correct_answer } => {
                md.push_str(&format!("Correct answer: `{correct_answer}`\n"));
            }
            QuestionBody::Essay => {
                md.push_str(&format!("_{MANUAL_GRADING_NOTE}_\n"));
            }
        }
        md.push('\n');
    }

    md
}
