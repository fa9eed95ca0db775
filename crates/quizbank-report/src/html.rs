//! HTML quiz preview.
//!
//! Produces a self-contained HTML file with all CSS inlined.

use std::path::Path;

use anyhow::{Context, Result};

use quizbank_core::model::{QuestionBody, QuestionKind};
use quizbank_core::quiz::Quiz;
use quizbank_core::store::BankSummary;

use crate::{marked_options, points_label, settings_line, MANUAL_GRADING_NOTE};

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate an HTML preview of a quiz.
pub fn generate_html(quiz: &Quiz) -> String {
    let summary = quiz.bank.summary();
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>Quiz preview: {}</title>\n",
        html_escape(&quiz.title)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str(&format!("<h1>{}</h1>\n", html_escape(&quiz.title)));
    if !quiz.description.trim().is_empty() {
        html.push_str(&format!(
            "<p class=\"description\">{}</p>\n",
            html_escape(&quiz.description)
        ));
    }
    html.push_str(&format!(
        "<p class=\"meta\">{} questions | {} | created {}</p>\n",
        summary.question_count,
        points_label(summary.total_points),
        quiz.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    html.push_str(&format!(
        "<p class=\"meta\">{}</p>\n",
        html_escape(&settings_line(&quiz.settings))
    ));
    html.push_str("</header>\n");

    if summary.question_count > 0 {
        html.push_str("<section class=\"summary\">\n<h2>Points by question type</h2>\n");
        html.push_str(&generate_bar_chart(&summary));
        html.push_str("</section>\n");
    }

    // Questions
    html.push_str("<section class=\"questions\">\n");
    if quiz.bank.is_empty() {
        html.push_str("<p class=\"empty\">No questions added yet.</p>\n");
    }
    for (index, q) in quiz.bank.questions().iter().enumerate() {
        html.push_str(&format!(
            "<article class=\"question\" id=\"{}\">\n",
            html_escape(q.id.as_str())
        ));
        html.push_str(&format!(
            "<h3>Question {}: <span>{}</span></h3>\n",
            index + 1,
            html_escape(&q.prompt)
        ));
        html.push_str(&format!(
            "<p class=\"meta\"><span class=\"badge\">{}</span> {}</p>\n",
            q.kind().label(),
            points_label(q.points)
        ));

        match &q.body {
            QuestionBody::MultipleChoice { .. } | QuestionBody::TrueFalse { .. } => {
                html.push_str("<ul class=\"options\">\n");
                for (option, correct) in marked_options(q).unwrap_or_default() {
                    let class = if correct { " class=\"correct\"" } else { "" };
                    let mark = if correct { "&#x25C9;" } else { "&#x25CB;" };
                    html.push_str(&format!(
                        "<li{class}>{mark} {}</li>\n",
                        html_escape(option)
                    ));
                }
                html.push_str("</ul>\n");
            }
            QuestionBody::ShortAnswer { correct_answer } => {
                html.push_str(&format!(
                    "<p class=\"answer\">Correct answer: <strong>{}</strong></p>\n",
                    html_escape(correct_answer)
                ));
            }
            QuestionBody::Essay => {
                html.push_str(&format!("<p class=\"note\">{MANUAL_GRADING_NOTE}</p>\n"));
            }
        }
        html.push_str("</article>\n");
    }
    html.push_str("</section>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML preview to a file.
pub fn write_html_preview(quiz: &Quiz, path: &Path) -> Result<()> {
    let html = generate_html(quiz);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)
        .with_context(|| format!("failed to write preview to {}", path.display()))?;
    Ok(())
}

fn generate_bar_chart(summary: &BankSummary) -> String {
    let bar_height = 30;
    let max_width = 400;
    let padding = 10;
    let label_width = 200;

    let max_points = summary
        .per_kind
        .values()
        .map(|k| k.points)
        .max()
        .unwrap_or(0)
        .max(1);

    let total_height = QuestionKind::ALL.len() * (bar_height + padding) + padding;

    let mut svg = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        label_width + max_width + 80,
        total_height
    );

    for (i, kind) in QuestionKind::ALL.iter().enumerate() {
        let share = summary.per_kind.get(kind).cloned().unwrap_or_default();
        let y = i * (bar_height + padding) + padding;
        let width =
            (u128::from(share.points) * max_width as u128 / u128::from(max_points)) as usize;

        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"14\" fill=\"currentColor\" text-anchor=\"end\" dominant-baseline=\"middle\">{}</text>\n",
            label_width - 10,
            y + bar_height / 2,
            kind.label()
        ));
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"#6366f1\" rx=\"4\"/>\n",
            label_width, y, width, bar_height
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"currentColor\" dominant-baseline=\"middle\">{} ({} q)</text>\n",
            label_width + width + 8,
            y + bar_height / 2,
            points_label(share.points),
            share.questions
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --correct: #dcfce7; --muted: #6b7280; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --correct: #064e3b; --muted: #9ca3af; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); max-width: 56rem; }
h1, h2 { margin-top: 2rem; }
.meta, .description, .note, .empty { color: var(--muted); }
.question { border: 1px solid var(--border); border-radius: 8px; padding: 1rem 1.5rem; margin: 1rem 0; }
.question h3 { margin: 0 0 0.5rem; }
.badge { border: 1px solid var(--border); border-radius: 999px; padding: 0 0.5rem; font-size: 0.8rem; text-transform: capitalize; }
.options { list-style: none; padding-left: 0; }
.options li { padding: 0.25rem 0.5rem; border-radius: 4px; }
.options li.correct { background: var(--correct); }
svg { margin: 1rem 0; }
"#;
