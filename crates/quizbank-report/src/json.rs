//! JSON quiz export.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use quizbank_core::model::Question;
use quizbank_core::quiz::{Quiz, QuizSettings};
use quizbank_core::store::BankSummary;

/// Serializable snapshot of a quiz.
#[derive(Debug, Serialize)]
pub struct QuizDocument<'a> {
    pub id: Uuid,
    pub title: &'a str,
    pub description: &'a str,
    pub created_at: DateTime<Utc>,
    pub settings: &'a QuizSettings,
    pub summary: BankSummary,
    pub questions: &'a [Question],
}

impl<'a> QuizDocument<'a> {
    pub fn new(quiz: &'a Quiz) -> Self {
        Self {
            id: quiz.id,
            title: &quiz.title,
            description: &quiz.description,
            created_at: quiz.created_at,
            settings: &quiz.settings,
            summary: quiz.bank.summary(),
            questions: quiz.bank.questions(),
        }
    }
}

/// Generate a pretty-printed JSON document for a quiz.
pub fn generate_json(quiz: &Quiz) -> Result<String> {
    serde_json::to_string_pretty(&QuizDocument::new(quiz)).context("failed to serialize quiz")
}

/// Write a JSON export to a file.
pub fn write_json_preview(quiz: &Quiz, path: &Path) -> Result<()> {
    let json = generate_json(quiz)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, json)
        .with_context(|| format!("failed to write JSON export to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizbank_core::model::{Draft, QuestionKind};

    #[test]
    fn json_export_has_summary_and_tagged_questions() {
        let mut quiz = Quiz::new("Export");
        let mut essay = Draft::new(QuestionKind::Essay);
        essay.set_prompt("Discuss.");
        quiz.bank.add(&mut essay).unwrap();

        let value: serde_json::Value = serde_json::from_str(&generate_json(&quiz).unwrap()).unwrap();
        assert_eq!(value["title"], "Export");
        assert_eq!(value["summary"]["total_points"], 10);
        assert_eq!(value["settings"]["time_limit_minutes"], 30);
        assert_eq!(value["summary"]["per_kind"]["essay"]["questions"], 1);
        assert_eq!(value["questions"][0]["id"], "q1");
        assert_eq!(value["questions"][0]["body"]["kind"], "essay");
    }
}
