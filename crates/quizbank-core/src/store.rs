//! The question bank: an ordered collection of questions, the only place
//! they are mutated.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LoadError, MoveError, NotFoundError, UpdateError, ValidationError};
use crate::model::{
    Draft, DraftDefaults, Question, QuestionBody, QuestionId, QuestionKind, COPY_MARKER,
};

/// Direction for [`QuestionBank::move_question`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// The end of the quiz a question cannot move past in this direction.
    pub fn boundary(&self) -> &'static str {
        match self {
            Direction::Up => "top",
            Direction::Down => "bottom",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            other => Err(format!("unknown direction: {other}")),
        }
    }
}

/// Field-level edits merged into an existing question by
/// [`QuestionBank::update`]. `None` leaves a field untouched.
///
/// `body` replaces the kind-specific part wholesale (this is how a question
/// changes kind); `options` and `correct_answer` are then applied on top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionPatch {
    pub prompt: Option<String>,
    pub points: Option<u32>,
    pub body: Option<QuestionBody>,
    pub options: Option<Vec<String>>,
    pub correct_answer: Option<String>,
}

impl QuestionPatch {
    pub fn is_empty(&self) -> bool {
        *self == QuestionPatch::default()
    }

    fn apply_to(self, question: &mut Question) -> Result<(), ValidationError> {
        if let Some(prompt) = self.prompt {
            question.prompt = prompt;
        }
        if let Some(points) = self.points {
            question.points = points;
        }
        if let Some(body) = self.body {
            question.body = body;
        }
        if let Some(options) = self.options {
            question.body.set_options(options)?;
        }
        if let Some(answer) = self.correct_answer {
            question.body.set_correct_answer(&answer)?;
        }
        Ok(())
    }
}

/// Per-kind share of a bank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindSummary {
    pub questions: usize,
    pub points: u64,
}

/// Aggregate view of a bank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankSummary {
    pub question_count: usize,
    pub total_points: u64,
    pub per_kind: BTreeMap<QuestionKind, KindSummary>,
}

/// Ordered, id-unique collection of questions plus the current selection.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
    selected: Option<QuestionId>,
    next_id: u64,
    defaults: DraftDefaults,
}

impl QuestionBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `defaults` when resetting a submitted draft.
    pub fn with_defaults(mut self, defaults: DraftDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Rebuild a bank from questions in presentation order.
    ///
    /// Every question must pass the same checks as a submitted draft.
    pub fn from_questions(questions: Vec<Question>) -> Result<Self, LoadError> {
        let mut seen = HashSet::new();
        for q in &questions {
            if !seen.insert(&q.id) {
                return Err(LoadError::DuplicateId(q.id.clone()));
            }
            q.validate().map_err(|source| LoadError::Invalid {
                id: q.id.clone(),
                source,
            })?;
        }
        Ok(Self {
            questions,
            ..Self::default()
        })
    }

    /// A blank draft using this bank's defaults.
    pub fn new_draft(&self) -> Draft {
        self.defaults.blank_draft()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| &q.id == id)
    }

    /// Zero-based position of `id` in the quiz.
    pub fn position(&self, id: &QuestionId) -> Option<usize> {
        self.questions.iter().position(|q| &q.id == id)
    }

    /// Sum of all points, widened so a full bank cannot overflow.
    pub fn total_points(&self) -> u64 {
        self.questions.iter().map(|q| u64::from(q.points)).sum()
    }

    pub fn summary(&self) -> BankSummary {
        let mut per_kind: BTreeMap<QuestionKind, KindSummary> = BTreeMap::new();
        for q in &self.questions {
            let entry = per_kind.entry(q.kind()).or_default();
            entry.questions += 1;
            entry.points += u64::from(q.points);
        }
        BankSummary {
            question_count: self.questions.len(),
            total_points: self.total_points(),
            per_kind,
        }
    }

    /// Validate `draft` and append it as a new question.
    ///
    /// On success the draft is reset to the bank's defaults and the new
    /// question becomes the selection. On failure neither the bank nor the
    /// draft changes.
    pub fn add(&mut self, draft: &mut Draft) -> Result<QuestionId, ValidationError> {
        draft.validate()?;

        let id = self.fresh_id();
        let submitted = std::mem::replace(draft, self.defaults.blank_draft());
        self.questions.push(submitted.into_question(id.clone()));
        self.selected = Some(id.clone());

        tracing::debug!(id = %id, position = self.questions.len(), "question added");
        Ok(id)
    }

    /// Merge `patch` into the question named by `id`.
    ///
    /// The merged question must still be valid; otherwise it is left as it was.
    pub fn update(&mut self, id: &QuestionId, patch: QuestionPatch) -> Result<(), UpdateError> {
        let index = self.index_of(id)?;

        let mut edited = self.questions[index].clone();
        patch.apply_to(&mut edited)?;
        edited.validate()?;
        self.questions[index] = edited;

        tracing::debug!(id = %id, "question updated");
        Ok(())
    }

    /// Delete the question, clearing the selection if it pointed at it.
    pub fn remove(&mut self, id: &QuestionId) -> Result<(), NotFoundError> {
        let index = self.index_of(id)?;
        self.questions.remove(index);
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }

        tracing::debug!(id = %id, "question removed");
        Ok(())
    }

    /// Append a copy of the question under a new id, with the copy marker
    /// appended to its prompt. The copy becomes the selection.
    pub fn duplicate(&mut self, id: &QuestionId) -> Result<QuestionId, NotFoundError> {
        let index = self.index_of(id)?;
        let new_id = self.fresh_id();

        let original = &self.questions[index];
        let copy = Question {
            id: new_id.clone(),
            prompt: format!("{}{COPY_MARKER}", original.prompt),
            points: original.points,
            body: original.body.clone(),
        };
        self.questions.push(copy);
        self.selected = Some(new_id.clone());

        tracing::debug!(id = %id, copy = %new_id, "question duplicated");
        Ok(new_id)
    }

    /// Swap the question with its neighbour in `direction`.
    pub fn move_question(
        &mut self,
        id: &QuestionId,
        direction: Direction,
    ) -> Result<(), MoveError> {
        let index = self.index_of(id)?;
        let target = match direction {
            Direction::Up => index.checked_sub(1),
            Direction::Down => Some(index + 1).filter(|&i| i < self.questions.len()),
        };
        let Some(target) = target else {
            return Err(MoveError::NoOp {
                id: id.clone(),
                direction,
            });
        };
        self.questions.swap(index, target);

        tracing::debug!(id = %id, %direction, from = index, to = target, "question moved");
        Ok(())
    }

    pub fn select(&mut self, id: &QuestionId) -> Result<(), NotFoundError> {
        self.index_of(id)?;
        self.selected = Some(id.clone());
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Question> {
        self.selected.as_ref().and_then(|id| self.get(id))
    }

    fn index_of(&self, id: &QuestionId) -> Result<usize, NotFoundError> {
        self.position(id).ok_or_else(|| NotFoundError(id.clone()))
    }

    /// Next `q<n>` id not already present in the bank.
    fn fresh_id(&mut self) -> QuestionId {
        loop {
            self.next_id += 1;
            let candidate = QuestionId::new(format!("q{}", self.next_id));
            if self.get(&candidate).is_none() {
                return candidate;
            }
        }
    }
}
