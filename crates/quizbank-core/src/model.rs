//! Core data model types for quizbank.
//!
//! A [`Question`] is a committed quiz item; a [`Draft`] is the same record
//! without an id, possibly incomplete, while it is being composed. The
//! fields that depend on the question kind live in [`QuestionBody`].

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Suffix appended to the prompt of a duplicated question.
pub const COPY_MARKER: &str = " (Copy)";

/// The fixed option pair of every true/false question.
pub const TRUE_FALSE_OPTIONS: [&str; 2] = ["True", "False"];

/// Default score weight of a new draft.
pub const DEFAULT_POINTS: u32 = 10;

/// Default number of blank options in a new multiple-choice draft.
pub const DEFAULT_OPTION_COUNT: usize = 4;

/// Opaque, stable question identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QuestionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for QuestionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Question categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    MultipleChoice,
    TrueFalse,
    ShortAnswer,
    Essay,
}

impl QuestionKind {
    pub const ALL: [QuestionKind; 4] = [
        QuestionKind::MultipleChoice,
        QuestionKind::TrueFalse,
        QuestionKind::ShortAnswer,
        QuestionKind::Essay,
    ];

    /// Human-readable label ("multiple choice").
    pub fn label(&self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice => "multiple choice",
            QuestionKind::TrueFalse => "true false",
            QuestionKind::ShortAnswer => "short answer",
            QuestionKind::Essay => "essay",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionKind::MultipleChoice => write!(f, "multiple_choice"),
            QuestionKind::TrueFalse => write!(f, "true_false"),
            QuestionKind::ShortAnswer => write!(f, "short_answer"),
            QuestionKind::Essay => write!(f, "essay"),
        }
    }
}

impl FromStr for QuestionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "multiple_choice" | "mc" => Ok(QuestionKind::MultipleChoice),
            "true_false" | "tf" => Ok(QuestionKind::TrueFalse),
            "short_answer" | "short" => Ok(QuestionKind::ShortAnswer),
            "essay" => Ok(QuestionKind::Essay),
            other => Err(format!("unknown question kind: {other}")),
        }
    }
}

/// The kind-specific part of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuestionBody {
    MultipleChoice {
        options: Vec<String>,
        correct_answer: String,
    },
    TrueFalse {
        correct_answer: bool,
    },
    ShortAnswer {
        correct_answer: String,
    },
    /// Graded manually, so there is no answer key.
    Essay,
}

impl QuestionBody {
    /// A blank body of the given kind, as the authoring form presents it.
    pub fn blank(kind: QuestionKind, option_count: usize) -> Self {
        match kind {
            QuestionKind::MultipleChoice => QuestionBody::MultipleChoice {
                options: vec![String::new(); option_count.max(2)],
                correct_answer: String::new(),
            },
            QuestionKind::TrueFalse => QuestionBody::TrueFalse {
                correct_answer: true,
            },
            QuestionKind::ShortAnswer => QuestionBody::ShortAnswer {
                correct_answer: String::new(),
            },
            QuestionKind::Essay => QuestionBody::Essay,
        }
    }

    pub fn kind(&self) -> QuestionKind {
        match self {
            QuestionBody::MultipleChoice { .. } => QuestionKind::MultipleChoice,
            QuestionBody::TrueFalse { .. } => QuestionKind::TrueFalse,
            QuestionBody::ShortAnswer { .. } => QuestionKind::ShortAnswer,
            QuestionBody::Essay => QuestionKind::Essay,
        }
    }

    /// Answer options, or `None` for kinds without options.
    pub fn options(&self) -> Option<Vec<&str>> {
        match self {
            QuestionBody::MultipleChoice { options, .. } => {
                Some(options.iter().map(String::as_str).collect())
            }
            QuestionBody::TrueFalse { .. } => Some(TRUE_FALSE_OPTIONS.to_vec()),
            QuestionBody::ShortAnswer { .. } | QuestionBody::Essay => None,
        }
    }

    /// The answer key as text, or `None` for essays.
    pub fn correct_answer(&self) -> Option<Cow<'_, str>> {
        match self {
            QuestionBody::MultipleChoice { correct_answer, .. }
            | QuestionBody::ShortAnswer { correct_answer } => {
                Some(Cow::Borrowed(correct_answer.as_str()))
            }
            QuestionBody::TrueFalse { correct_answer } => {
                Some(Cow::Borrowed(true_false_label(*correct_answer)))
            }
            QuestionBody::Essay => None,
        }
    }

    /// Replace the answer key from its textual form.
    pub fn set_correct_answer(&mut self, answer: &str) -> Result<(), ValidationError> {
        match self {
            QuestionBody::MultipleChoice { correct_answer, .. }
            | QuestionBody::ShortAnswer { correct_answer } => {
                *correct_answer = answer.to_string();
                Ok(())
            }
            QuestionBody::TrueFalse { correct_answer } => {
                *correct_answer = parse_true_false(answer)?;
                Ok(())
            }
            QuestionBody::Essay => Err(ValidationError::AnswerNotAllowed {
                kind: QuestionKind::Essay,
            }),
        }
    }

    /// Replace the option list. Only multiple-choice options are editable.
    pub fn set_options(&mut self, new_options: Vec<String>) -> Result<(), ValidationError> {
        match self {
            QuestionBody::MultipleChoice { options, .. } => {
                *options = new_options;
                Ok(())
            }
            other => Err(ValidationError::OptionsNotAllowed { kind: other.kind() }),
        }
    }

    /// Check the kind-specific invariants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            QuestionBody::MultipleChoice {
                options,
                correct_answer,
            } => {
                if options.len() < 2 {
                    return Err(ValidationError::TooFewOptions);
                }
                if let Some(index) = options.iter().position(|o| o.trim().is_empty()) {
                    return Err(ValidationError::EmptyOption { index });
                }
                if correct_answer.is_empty() {
                    return Err(ValidationError::MissingCorrectAnswer);
                }
                if !options.iter().any(|o| o == correct_answer) {
                    return Err(ValidationError::AnswerNotAnOption {
                        answer: correct_answer.clone(),
                    });
                }
                Ok(())
            }
            QuestionBody::ShortAnswer { correct_answer } => {
                if correct_answer.trim().is_empty() {
                    Err(ValidationError::MissingCorrectAnswer)
                } else {
                    Ok(())
                }
            }
            QuestionBody::TrueFalse { .. } | QuestionBody::Essay => Ok(()),
        }
    }
}

pub(crate) fn true_false_label(value: bool) -> &'static str {
    if value {
        TRUE_FALSE_OPTIONS[0]
    } else {
        TRUE_FALSE_OPTIONS[1]
    }
}

/// Parse "True"/"False" (case-insensitive).
pub fn parse_true_false(answer: &str) -> Result<bool, ValidationError> {
    match answer.trim().to_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        "" => Err(ValidationError::MissingCorrectAnswer),
        _ => Err(ValidationError::AnswerNotAnOption {
            answer: answer.to_string(),
        }),
    }
}

/// Check the invariants shared by drafts and committed questions.
fn validate_fields(
    prompt: &str,
    points: u32,
    body: &QuestionBody,
) -> Result<(), ValidationError> {
    if prompt.trim().is_empty() {
        return Err(ValidationError::MissingPrompt);
    }
    body.validate()?;
    if points == 0 {
        return Err(ValidationError::ZeroPoints);
    }
    Ok(())
}

/// A committed quiz item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: String,
    pub points: u32,
    pub body: QuestionBody,
}

impl Question {
    pub fn kind(&self) -> QuestionKind {
        self.body.kind()
    }

    pub fn options(&self) -> Option<Vec<&str>> {
        self.body.options()
    }

    pub fn correct_answer(&self) -> Option<Cow<'_, str>> {
        self.body.correct_answer()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&self.prompt, self.points, &self.body)
    }
}

/// A question being composed; not yet committed and possibly incomplete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub prompt: String,
    pub points: u32,
    pub body: QuestionBody,
}

impl Default for Draft {
    fn default() -> Self {
        DraftDefaults::default().blank_draft()
    }
}

impl Draft {
    /// Blank draft of the given kind with default points.
    pub fn new(kind: QuestionKind) -> Self {
        Self {
            prompt: String::new(),
            points: DEFAULT_POINTS,
            body: QuestionBody::blank(kind, DEFAULT_OPTION_COUNT),
        }
    }

    pub fn kind(&self) -> QuestionKind {
        self.body.kind()
    }

    /// Switch kind, resetting the kind-specific fields. Prompt and points stay.
    pub fn set_kind(&mut self, kind: QuestionKind) {
        let option_count = match &self.body {
            QuestionBody::MultipleChoice { options, .. } => options.len(),
            _ => DEFAULT_OPTION_COUNT,
        };
        self.body = QuestionBody::blank(kind, option_count);
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn set_points(&mut self, points: u32) {
        self.points = points;
    }

    pub fn set_correct_answer(&mut self, answer: &str) -> Result<(), ValidationError> {
        self.body.set_correct_answer(answer)
    }

    /// Overwrite the option at `index`. If that option was the answer, the
    /// answer follows the edit.
    pub fn set_option(
        &mut self,
        index: usize,
        text: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let kind = self.kind();
        let QuestionBody::MultipleChoice {
            options,
            correct_answer,
        } = &mut self.body
        else {
            return Err(ValidationError::OptionsNotAllowed { kind });
        };
        let Some(slot) = options.get_mut(index) else {
            return Err(ValidationError::OptionOutOfRange { index });
        };
        let text = text.into();
        if !correct_answer.is_empty() && *slot == *correct_answer {
            *correct_answer = text.clone();
        }
        *slot = text;
        Ok(())
    }

    /// Append a blank option.
    pub fn add_option(&mut self) -> Result<(), ValidationError> {
        match &mut self.body {
            QuestionBody::MultipleChoice { options, .. } => {
                options.push(String::new());
                Ok(())
            }
            other => Err(ValidationError::OptionsNotAllowed { kind: other.kind() }),
        }
    }

    /// Remove the option at `index`; at least two options always remain.
    pub fn remove_option(&mut self, index: usize) -> Result<(), ValidationError> {
        let kind = self.kind();
        let QuestionBody::MultipleChoice {
            options,
            correct_answer,
        } = &mut self.body
        else {
            return Err(ValidationError::OptionsNotAllowed { kind });
        };
        if index >= options.len() {
            return Err(ValidationError::OptionOutOfRange { index });
        }
        if options.len() <= 2 {
            return Err(ValidationError::TooFewOptions);
        }
        let removed = options.remove(index);
        if removed == *correct_answer {
            correct_answer.clear();
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&self.prompt, self.points, &self.body)
    }

    pub(crate) fn into_question(self, id: QuestionId) -> Question {
        Question {
            id,
            prompt: self.prompt,
            points: self.points,
            body: self.body,
        }
    }
}

/// Values a draft is reset to after submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftDefaults {
    pub kind: QuestionKind,
    pub points: u32,
    pub option_count: usize,
}

impl Default for DraftDefaults {
    fn default() -> Self {
        Self {
            kind: QuestionKind::MultipleChoice,
            points: DEFAULT_POINTS,
            option_count: DEFAULT_OPTION_COUNT,
        }
    }
}

impl DraftDefaults {
    pub fn blank_draft(&self) -> Draft {
        Draft {
            prompt: String::new(),
            points: self.points,
            body: QuestionBody::blank(self.kind, self.option_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mc(options: &[&str], answer: &str) -> QuestionBody {
        QuestionBody::MultipleChoice {
            options: options.iter().map(|s| s.to_string()).collect(),
            correct_answer: answer.into(),
        }
    }

    #[test]
    fn kind_display_and_parse() {
        assert_eq!(QuestionKind::MultipleChoice.to_string(), "multiple_choice");
        assert_eq!(QuestionKind::Essay.to_string(), "essay");
        assert_eq!(
            "true-false".parse::<QuestionKind>().unwrap(),
            QuestionKind::TrueFalse
        );
        assert_eq!(
            "Short_Answer".parse::<QuestionKind>().unwrap(),
            QuestionKind::ShortAnswer
        );
        assert_eq!("mc".parse::<QuestionKind>().unwrap(), QuestionKind::MultipleChoice);
        assert!("matching".parse::<QuestionKind>().is_err());
    }

    #[test]
    fn default_draft_is_blank_multiple_choice() {
        let draft = Draft::default();
        assert_eq!(draft.kind(), QuestionKind::MultipleChoice);
        assert_eq!(draft.points, 10);
        assert_eq!(draft.body.options().unwrap(), vec!["", "", "", ""]);
        assert_eq!(draft.validate(), Err(ValidationError::MissingPrompt));
    }

    #[test]
    fn true_false_options_are_fixed() {
        let body = QuestionBody::blank(QuestionKind::TrueFalse, 4);
        assert_eq!(body.options().unwrap(), vec!["True", "False"]);
        assert_eq!(body.correct_answer().as_deref(), Some("True"));

        let mut body = body;
        assert!(body.set_options(vec!["Yes".into(), "No".into()]).is_err());
        body.set_correct_answer("false").unwrap();
        assert_eq!(body.correct_answer().as_deref(), Some("False"));
        assert!(body.set_correct_answer("maybe").is_err());
    }

    #[test]
    fn essay_has_no_answer() {
        let mut body = QuestionBody::Essay;
        assert!(body.correct_answer().is_none());
        assert!(body.options().is_none());
        assert_eq!(
            body.set_correct_answer("anything"),
            Err(ValidationError::AnswerNotAllowed {
                kind: QuestionKind::Essay
            })
        );
        assert!(body.validate().is_ok());
    }

    #[test]
    fn multiple_choice_validation() {
        assert_eq!(mc(&["A"], "A").validate(), Err(ValidationError::TooFewOptions));
        assert_eq!(
            mc(&["A", " ", "C"], "A").validate(),
            Err(ValidationError::EmptyOption { index: 1 })
        );
        assert_eq!(
            mc(&["A", "B"], "").validate(),
            Err(ValidationError::MissingCorrectAnswer)
        );
        assert_eq!(
            mc(&["A", "B"], "C").validate(),
            Err(ValidationError::AnswerNotAnOption { answer: "C".into() })
        );
        assert!(mc(&["A", "B"], "B").validate().is_ok());
    }

    #[test]
    fn switching_kind_resets_answer_fields() {
        let mut draft = Draft::default();
        draft.set_prompt("Capital of France?");
        draft.set_points(7);
        draft.set_option(0, "Paris").unwrap();
        draft.set_kind(QuestionKind::ShortAnswer);
        assert_eq!(draft.prompt, "Capital of France?");
        assert_eq!(draft.points, 7);
        assert_eq!(draft.body.correct_answer().as_deref(), Some(""));

        draft.set_kind(QuestionKind::Essay);
        assert!(draft.body.correct_answer().is_none());
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn editing_the_answer_option_keeps_answer_in_sync() {
        let mut draft = Draft::new(QuestionKind::MultipleChoice);
        draft.set_option(0, "Pari").unwrap();
        draft.set_option(1, "Lyon").unwrap();
        draft.set_correct_answer("Pari").unwrap();
        draft.set_option(0, "Paris").unwrap();
        assert_eq!(draft.body.correct_answer().as_deref(), Some("Paris"));
    }

    #[test]
    fn option_removal_keeps_two() {
        let mut draft = Draft::new(QuestionKind::MultipleChoice);
        draft.set_option(3, "D").unwrap();
        draft.set_correct_answer("D").unwrap();
        draft.remove_option(3).unwrap();
        assert_eq!(draft.body.correct_answer().as_deref(), Some(""));
        draft.remove_option(0).unwrap();
        assert_eq!(draft.remove_option(0), Err(ValidationError::TooFewOptions));
        draft.add_option().unwrap();
        assert_eq!(draft.body.options().unwrap().len(), 3);
    }

    #[test]
    fn option_edits_rejected_for_other_kinds() {
        let mut draft = Draft::new(QuestionKind::ShortAnswer);
        assert!(draft.add_option().is_err());
        assert!(draft.set_option(0, "x").is_err());
    }

    #[test]
    fn zero_points_rejected() {
        let mut draft = Draft::new(QuestionKind::Essay);
        draft.set_prompt("Discuss.");
        draft.set_points(0);
        assert_eq!(draft.validate(), Err(ValidationError::ZeroPoints));
    }

    #[test]
    fn body_serde_is_tagged_by_kind() {
        let json = serde_json::to_value(mc(&["A", "B"], "A")).unwrap();
        assert_eq!(json["kind"], "multiple_choice");
        let essay: QuestionBody = serde_json::from_str(r#"{"kind":"essay"}"#).unwrap();
        assert_eq!(essay, QuestionBody::Essay);
    }
}
