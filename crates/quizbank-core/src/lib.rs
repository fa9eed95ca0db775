//! quizbank-core — Quiz question bank model, store, and file format.
//!
//! This crate defines the question data model, the question bank that owns
//! and mutates an ordered set of questions, and the TOML quiz file format
//! the rest of quizbank builds on.

pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod quiz;
pub mod store;

pub use error::{
    LoadError, MoveError, NotFoundError, QuizError, UpdateError, ValidationError,
};
pub use model::{Draft, DraftDefaults, Question, QuestionBody, QuestionId, QuestionKind};
pub use quiz::{Quiz, QuizSettings};
pub use store::{BankSummary, Direction, QuestionBank, QuestionPatch};
