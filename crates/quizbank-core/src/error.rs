//! Question bank error types.
//!
//! Every failure is a precondition violation reported to the caller; none of
//! them leave the bank in a partially mutated state.

use thiserror::Error;

use crate::model::{QuestionId, QuestionKind};
use crate::store::Direction;

/// A draft or edited question is missing a required field or has an
/// inconsistent option/answer pairing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("please enter a question")]
    MissingPrompt,

    #[error("multiple-choice questions need at least two options")]
    TooFewOptions,

    #[error("please fill in all answer options (option {} is empty)", .index + 1)]
    EmptyOption { index: usize },

    #[error("there is no option {}", .index + 1)]
    OptionOutOfRange { index: usize },

    #[error("please select a correct answer")]
    MissingCorrectAnswer,

    #[error("correct answer {answer:?} is not one of the options")]
    AnswerNotAnOption { answer: String },

    #[error("points must be a positive number")]
    ZeroPoints,

    /// Only multiple-choice options can be edited.
    #[error("{kind} questions do not take editable options")]
    OptionsNotAllowed { kind: QuestionKind },

    #[error("{kind} questions do not take a correct answer")]
    AnswerNotAllowed { kind: QuestionKind },
}

/// The referenced question does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("question not found: {0}")]
pub struct NotFoundError(pub QuestionId);

/// Questions handed to [`QuestionBank::from_questions`](crate::store::QuestionBank::from_questions)
/// cannot form a bank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("duplicate question id: {0}")]
    DuplicateId(QuestionId),

    #[error("question {id}: {source}")]
    Invalid {
        id: QuestionId,
        source: ValidationError,
    },
}

/// Errors from [`QuestionBank::move_question`](crate::store::QuestionBank::move_question).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The question already sits at the boundary in that direction.
    #[error("question {id} is already at the {} of the quiz", .direction.boundary())]
    NoOp { id: QuestionId, direction: Direction },
}

impl MoveError {
    /// Returns `true` for the expected boundary case.
    pub fn is_noop(&self) -> bool {
        matches!(self, MoveError::NoOp { .. })
    }
}

/// Errors from [`QuestionBank::update`](crate::store::QuestionBank::update).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpdateError {
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// A quiz is not ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("please provide a title for this quiz")]
    MissingTitle,

    #[error("please add at least one question to the quiz")]
    NoQuestions,

    #[error("the time limit must be at least one minute")]
    NoTimeLimit,
}
