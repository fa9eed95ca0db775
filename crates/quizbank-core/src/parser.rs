//! TOML quiz file parser and writer.
//!
//! Loads quizzes from TOML files and directories, validates them, and writes
//! them back.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{
    parse_true_false, DraftDefaults, Question, QuestionBody, QuestionId, QuestionKind,
    DEFAULT_POINTS, TRUE_FALSE_OPTIONS,
};
use crate::quiz::{Quiz, QuizSettings, DEFAULT_TITLE};
use crate::store::QuestionBank;

/// On-disk layout of a quiz file.
#[derive(Debug, Serialize, Deserialize)]
struct TomlQuizFile {
    quiz: TomlQuizHeader,
    #[serde(default)]
    settings: QuizSettings,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TomlQuizHeader {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<Uuid>,
    #[serde(default = "default_title")]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

#[derive(Debug, Serialize, Deserialize)]
struct TomlQuestion {
    id: String,
    kind: String,
    #[serde(default)]
    prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    correct_answer: Option<String>,
    #[serde(default = "default_points")]
    points: u32,
}

fn default_points() -> u32 {
    DEFAULT_POINTS
}

impl TomlQuestion {
    fn into_question(self) -> Result<Question> {
        let kind: QuestionKind = self
            .kind
            .parse()
            .map_err(|e: String| anyhow::anyhow!("question {}: {}", self.id, e))?;

        let body = match kind {
            QuestionKind::MultipleChoice => QuestionBody::MultipleChoice {
                options: self.options.unwrap_or_default(),
                correct_answer: self.correct_answer.unwrap_or_default(),
            },
            QuestionKind::TrueFalse => {
                if let Some(options) = &self.options {
                    if options.iter().map(String::as_str).ne(TRUE_FALSE_OPTIONS) {
                        anyhow::bail!(
                            "question {}: true/false options must be exactly [\"True\", \"False\"]",
                            self.id
                        );
                    }
                }
                let answer = self.correct_answer.as_deref().unwrap_or(TRUE_FALSE_OPTIONS[0]);
                let correct_answer = parse_true_false(answer).map_err(|_| {
                    anyhow::anyhow!(
                        "question {}: true/false answer must be \"True\" or \"False\", got {answer:?}",
                        self.id
                    )
                })?;
                QuestionBody::TrueFalse { correct_answer }
            }
            QuestionKind::ShortAnswer => {
                if self.options.is_some() {
                    anyhow::bail!("question {}: short answer questions take no options", self.id);
                }
                QuestionBody::ShortAnswer {
                    correct_answer: self.correct_answer.unwrap_or_default(),
                }
            }
            QuestionKind::Essay => {
                if self.options.is_some() {
                    anyhow::bail!("question {}: essay questions take no options", self.id);
                }
                if self.correct_answer.is_some() {
                    anyhow::bail!(
                        "question {}: essay questions are graded manually and take no correct_answer",
                        self.id
                    );
                }
                QuestionBody::Essay
            }
        };

        Ok(Question {
            id: QuestionId::new(self.id),
            prompt: self.prompt,
            points: self.points,
            body,
        })
    }

    fn from_question(q: &Question) -> Self {
        Self {
            id: q.id.to_string(),
            kind: q.kind().to_string(),
            prompt: q.prompt.clone(),
            options: q
                .options()
                .map(|opts| opts.into_iter().map(str::to_string).collect()),
            correct_answer: q.correct_answer().map(|a| a.into_owned()),
            points: q.points,
        }
    }
}

/// A parsed quiz file whose questions have not yet been loaded into a bank.
///
/// Questions here may still be invalid or share ids; see [`validate_quiz`].
#[derive(Debug, Clone)]
pub struct QuizFile {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub settings: QuizSettings,
    pub questions: Vec<Question>,
}

impl QuizFile {
    /// Load the questions into a bank.
    ///
    /// Fails if any question is incomplete or ids repeat; use
    /// [`validate_quiz`] to list every problem instead of the first.
    pub fn into_quiz(self, defaults: DraftDefaults) -> Result<Quiz> {
        let bank = QuestionBank::from_questions(self.questions)
            .with_context(|| format!("quiz {:?} has an invalid question", self.title))?
            .with_defaults(defaults);
        Ok(Quiz {
            id: self.id,
            title: self.title,
            description: self.description,
            created_at: self.created_at,
            settings: self.settings,
            bank,
        })
    }
}

/// Parse a single TOML file into a [`QuizFile`].
pub fn parse_quiz(path: &Path) -> Result<QuizFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read quiz file: {}", path.display()))?;

    parse_quiz_str(&content, path)
}

/// Parse a TOML string into a [`QuizFile`] (useful for testing).
pub fn parse_quiz_str(content: &str, source_path: &Path) -> Result<QuizFile> {
    let parsed: TomlQuizFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .map(TomlQuestion::into_question)
        .collect::<Result<Vec<_>>>()
        .with_context(|| format!("invalid question in {}", source_path.display()))?;

    Ok(QuizFile {
        id: parsed.quiz.id.unwrap_or_else(Uuid::new_v4),
        title: parsed.quiz.title,
        description: parsed.quiz.description,
        created_at: parsed.quiz.created_at.unwrap_or_else(Utc::now),
        settings: parsed.settings,
        questions,
    })
}

/// Parse and load a quiz file in one step.
pub fn load_quiz(path: &Path, defaults: DraftDefaults) -> Result<Quiz> {
    parse_quiz(path)?
        .into_quiz(defaults)
        .with_context(|| format!("failed to load quiz: {}", path.display()))
}

/// Render a quiz as TOML.
pub fn quiz_to_toml(quiz: &Quiz) -> Result<String> {
    let file = TomlQuizFile {
        quiz: TomlQuizHeader {
            id: Some(quiz.id),
            title: quiz.title.clone(),
            description: quiz.description.clone(),
            created_at: Some(quiz.created_at),
        },
        settings: quiz.settings.clone(),
        questions: quiz
            .bank
            .questions()
            .iter()
            .map(TomlQuestion::from_question)
            .collect(),
    };
    toml::to_string_pretty(&file).context("failed to serialize quiz")
}

/// Write a quiz to a TOML file, creating parent directories as needed.
pub fn save_quiz(quiz: &Quiz, path: &Path) -> Result<()> {
    let content = quiz_to_toml(quiz)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("failed to write quiz to {}", path.display()))?;
    Ok(())
}

/// Recursively load all `.toml` quiz files from a directory.
pub fn load_quiz_directory(dir: &Path) -> Result<Vec<(PathBuf, QuizFile)>> {
    let mut quizzes = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            quizzes.extend(load_quiz_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_quiz(&path) {
                Ok(quiz) => quizzes.push((path, quiz)),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    quizzes.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(quizzes)
}

/// A warning from quiz validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question ID (if applicable).
    pub question_id: Option<QuestionId>,
    /// Warning message.
    pub message: String,
}

/// Validate a quiz file for problems that would block editing or publishing.
pub fn validate_quiz(quiz: &QuizFile) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if quiz.title.trim().is_empty() {
        warnings.push(ValidationWarning {
            question_id: None,
            message: "quiz title is empty".into(),
        });
    }

    if quiz.questions.is_empty() {
        warnings.push(ValidationWarning {
            question_id: None,
            message: "quiz has no questions".into(),
        });
    }

    if quiz.settings.time_limit_minutes == 0 {
        warnings.push(ValidationWarning {
            question_id: None,
            message: "time limit must be at least one minute".into(),
        });
    }

    let mut seen_ids = HashSet::new();
    for q in &quiz.questions {
        if !seen_ids.insert(&q.id) {
            warnings.push(ValidationWarning {
                question_id: Some(q.id.clone()),
                message: format!("duplicate question ID: {}", q.id),
            });
        }
    }

    for q in &quiz.questions {
        if let Err(e) = q.validate() {
            warnings.push(ValidationWarning {
                question_id: Some(q.id.clone()),
                message: e.to_string(),
            });
        }
    }

    warnings
}
