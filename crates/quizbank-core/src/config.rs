//! quizbank configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::{DraftDefaults, QuestionKind, DEFAULT_OPTION_COUNT, DEFAULT_POINTS};

/// Top-level quizbank configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizbankConfig {
    /// Quiz file the CLI operates on when `--quiz` is not given.
    #[serde(default = "default_quiz_file")]
    pub quiz_file: PathBuf,
    /// Points assigned to a new question.
    #[serde(default = "default_points")]
    pub default_points: u32,
    /// Blank options offered by a new multiple-choice question.
    #[serde(default = "default_option_count")]
    pub default_option_count: usize,
    /// Output directory for rendered previews.
    #[serde(default = "default_preview_dir")]
    pub preview_dir: PathBuf,
}

fn default_quiz_file() -> PathBuf {
    PathBuf::from("quiz.toml")
}
fn default_points() -> u32 {
    DEFAULT_POINTS
}
fn default_option_count() -> usize {
    DEFAULT_OPTION_COUNT
}
fn default_preview_dir() -> PathBuf {
    PathBuf::from("./quizbank-preview")
}

impl Default for QuizbankConfig {
    fn default() -> Self {
        Self {
            quiz_file: default_quiz_file(),
            default_points: default_points(),
            default_option_count: default_option_count(),
            preview_dir: default_preview_dir(),
        }
    }
}

impl QuizbankConfig {
    /// Draft defaults derived from this configuration.
    pub fn draft_defaults(&self) -> DraftDefaults {
        DraftDefaults {
            kind: QuestionKind::MultipleChoice,
            points: self.default_points.max(1),
            option_count: self.default_option_count.max(2),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are not scanned again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    let mut from = 0;
    while let Some(offset) = result[from..].find("${") {
        let start = from + offset;
        let Some(end) = result[start..].find('}') else {
            break;
        };
        let var_name = &result[start + 2..start + end];
        let value = std::env::var(var_name).unwrap_or_default();
        result = format!(
            "{}{}{}",
            &result[..start],
            value,
            &result[start + end + 1..]
        );
        from = start + value.len();
    }
    result
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order when no path is given:
/// 1. `quizbank.toml` in the current directory
/// 2. `~/.config/quizbank/config.toml`
///
/// Environment variable overrides: `QUIZBANK_QUIZ_FILE`, `QUIZBANK_DEFAULT_POINTS`.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizbankConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizbank.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<QuizbankConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizbankConfig::default(),
    };

    // Apply env var overrides
    if let Ok(file) = std::env::var("QUIZBANK_QUIZ_FILE") {
        config.quiz_file = PathBuf::from(file);
    }
    if let Ok(points) = std::env::var("QUIZBANK_DEFAULT_POINTS") {
        config.default_points = points
            .parse()
            .with_context(|| format!("QUIZBANK_DEFAULT_POINTS is not a number: {points}"))?;
    }

    config.quiz_file = resolve_path(&config.quiz_file);
    config.preview_dir = resolve_path(&config.preview_dir);

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizbank"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_env_vars_basic() {
        std::env::set_var("_QUIZBANK_TEST_VAR", "hello");
        assert_eq!(resolve_env_vars("${_QUIZBANK_TEST_VAR}"), "hello");
        assert_eq!(
            resolve_env_vars("prefix_${_QUIZBANK_TEST_VAR}_suffix"),
            "prefix_hello_suffix"
        );
        assert_eq!(resolve_env_vars("${unterminated"), "${unterminated");
        std::env::remove_var("_QUIZBANK_TEST_VAR");
    }

    #[test]
    fn resolve_env_vars_does_not_expand_values() {
        std::env::set_var("_QUIZBANK_SELF_REF", "${_QUIZBANK_SELF_REF}");
        assert_eq!(
            resolve_env_vars("a/${_QUIZBANK_SELF_REF}/b"),
            "a/${_QUIZBANK_SELF_REF}/b"
        );
        std::env::remove_var("_QUIZBANK_SELF_REF");
    }

    #[test]
    fn default_config() {
        let config = QuizbankConfig::default();
        assert_eq!(config.quiz_file, PathBuf::from("quiz.toml"));
        assert_eq!(config.default_points, 10);
        assert_eq!(config.default_option_count, 4);
    }

    #[test]
    fn parse_partial_config() {
        let config: QuizbankConfig = toml::from_str(
            r#"
quiz_file = "quizzes/week1.toml"
default_option_count = 1
"#,
        )
        .unwrap();
        assert_eq!(config.quiz_file, PathBuf::from("quizzes/week1.toml"));
        assert_eq!(config.default_points, 10);

        let defaults = config.draft_defaults();
        assert_eq!(defaults.option_count, 2);
        assert_eq!(defaults.kind, QuestionKind::MultipleChoice);
    }

    #[test]
    fn explicit_config_path_must_exist() {
        let err = load_config_from(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn explicit_config_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quizbank.toml");
        std::fs::write(&path, "default_points = 5\npreview_dir = \"out\"\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.preview_dir, PathBuf::from("out"));
    }
}
