//! A quiz: title, description and its question bank.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::QuizError;
use crate::store::QuestionBank;

/// Title given to a quiz nobody has named yet.
pub const DEFAULT_TITLE: &str = "New Quiz";

/// How the quiz is delivered to students.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSettings {
    #[serde(default = "default_subject")]
    pub subject: String,
    #[serde(default = "default_time_limit")]
    pub time_limit_minutes: u32,
    #[serde(default)]
    pub randomize_questions: bool,
    /// Reveal the answer key once a student submits.
    #[serde(default = "default_show_answers")]
    pub show_answers: bool,
}

fn default_subject() -> String {
    "general".to_string()
}
fn default_time_limit() -> u32 {
    30
}
fn default_show_answers() -> bool {
    true
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            subject: default_subject(),
            time_limit_minutes: default_time_limit(),
            randomize_questions: false,
            show_answers: default_show_answers(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Quiz {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub settings: QuizSettings,
    pub bank: QuestionBank,
}

impl Default for Quiz {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}

impl Quiz {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: String::new(),
            created_at: Utc::now(),
            settings: QuizSettings::default(),
            bank: QuestionBank::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Check the quiz can be published: it needs a title, a question and
    /// a time limit of at least one minute.
    pub fn check_ready(&self) -> Result<(), QuizError> {
        if self.title.trim().is_empty() {
            return Err(QuizError::MissingTitle);
        }
        if self.bank.is_empty() {
            return Err(QuizError::NoQuestions);
        }
        if self.settings.time_limit_minutes == 0 {
            return Err(QuizError::NoTimeLimit);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Draft, QuestionKind};

    #[test]
    fn new_quiz_is_not_ready() {
        let quiz = Quiz::default();
        assert_eq!(quiz.title, "New Quiz");
        assert_eq!(quiz.check_ready(), Err(QuizError::NoQuestions));
    }

    #[test]
    fn blank_title_is_rejected_first() {
        let quiz = Quiz::new("   ");
        assert_eq!(quiz.check_ready(), Err(QuizError::MissingTitle));
    }

    #[test]
    fn ready_with_title_and_question() {
        let mut quiz = Quiz::new("Geography").with_description("Capitals");
        let mut draft = Draft::new(QuestionKind::TrueFalse);
        draft.set_prompt("Paris is in France.");
        quiz.bank.add(&mut draft).unwrap();
        assert!(quiz.check_ready().is_ok());
        assert_eq!(quiz.description, "Capitals");

        quiz.settings.time_limit_minutes = 0;
        assert_eq!(quiz.check_ready(), Err(QuizError::NoTimeLimit));
    }

    #[test]
    fn default_settings() {
        let settings = QuizSettings::default();
        assert_eq!(settings.subject, "general");
        assert_eq!(settings.time_limit_minutes, 30);
        assert!(!settings.randomize_questions);
        assert!(settings.show_answers);
    }
}
