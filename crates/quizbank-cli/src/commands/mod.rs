//! Subcommand implementations.

use std::path::PathBuf;

use anyhow::Result;

use quizbank_core::config::{load_config_from, QuizbankConfig};
use quizbank_core::model::QuestionKind;
use quizbank_core::parser;
use quizbank_core::quiz::Quiz;

pub mod add;
pub mod duplicate;
pub mod edit;
pub mod init;
pub mod list;
pub mod preview;
pub mod remove;
pub mod reorder;
pub mod validate;

/// The quiz file a command operates on, plus the config that located it.
pub struct Target {
    quiz: Option<PathBuf>,
    config: Option<PathBuf>,
}

impl Target {
    pub fn new(quiz: Option<PathBuf>, config: Option<PathBuf>) -> Self {
        Self { quiz, config }
    }

    /// Load the config and resolve the quiz path (`--quiz` wins over config).
    pub fn resolve(self) -> Result<(QuizbankConfig, PathBuf)> {
        let config = load_config_from(self.config.as_deref())?;
        let path = self.quiz.unwrap_or_else(|| config.quiz_file.clone());
        Ok((config, path))
    }
}

/// A loaded quiz and where to write it back.
pub struct Session {
    pub config: QuizbankConfig,
    pub path: PathBuf,
    pub quiz: Quiz,
}

impl Session {
    pub fn open(target: Target) -> Result<Self> {
        let (config, path) = target.resolve()?;
        let quiz = parser::load_quiz(&path, config.draft_defaults())?;
        tracing::debug!(path = %path.display(), questions = quiz.bank.len(), "quiz loaded");
        Ok(Self { config, path, quiz })
    }

    pub fn save(&self) -> Result<()> {
        parser::save_quiz(&self.quiz, &self.path)
    }

    /// One-line status printed after every edit.
    pub fn status(&self) -> String {
        format!(
            "{} now has {} question(s), {} total points",
            self.path.display(),
            self.quiz.bank.len(),
            self.quiz.bank.total_points()
        )
    }
}

pub(crate) fn parse_kind(kind: &str) -> Result<QuestionKind> {
    kind.parse().map_err(|e: String| anyhow::anyhow!("{}", e))
}
