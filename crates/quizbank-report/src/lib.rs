//! quizbank-report — Quiz previews.
//!
//! Renders a quiz the way students will see it, with the answer key marked,
//! as self-contained HTML, Markdown, or JSON.

pub mod html;
pub mod json;
pub mod markdown;

use quizbank_core::model::Question;
use quizbank_core::quiz::QuizSettings;

/// Text shown in place of an answer key for manually graded questions.
pub const MANUAL_GRADING_NOTE: &str =
    "This question will be graded manually or with AI assistance.";

/// "10 pts" / "1 pt".
pub(crate) fn points_label(points: impl Into<u64>) -> String {
    let points = points.into();
    if points == 1 {
        "1 pt".to_string()
    } else {
        format!("{points} pts")
    }
}

/// Options paired with whether each is the correct answer.
pub(crate) fn marked_options(question: &Question) -> Option<Vec<(&str, bool)>> {
    let answer = question.correct_answer();
    question.options().map(|options| {
        options
            .into_iter()
            .map(|opt| (opt, answer.as_deref() == Some(opt)))
            .collect()
    })
}

/// "general, 30 min, shuffled, answers shown after submission".
pub(crate) fn settings_line(settings: &QuizSettings) -> String {
    let mut parts = vec![
        settings.subject.clone(),
        format!("{} min", settings.time_limit_minutes),
    ];
    if settings.randomize_questions {
        parts.push("shuffled".to_string());
    }
    parts.push(if settings.show_answers {
        "answers shown after submission".to_string()
    } else {
        "answers hidden".to_string()
    });
    parts.join(", ")
}
