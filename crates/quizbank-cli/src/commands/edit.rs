//! The `quizbank edit` command.

use anyhow::Result;

use quizbank_core::model::{QuestionBody, QuestionId};
use quizbank_core::store::QuestionPatch;

use super::{parse_kind, Session, Target};

pub fn execute(
    target: Target,
    id: String,
    kind: Option<String>,
    prompt: Option<String>,
    options: Vec<String>,
    answer: Option<String>,
    points: Option<u32>,
) -> Result<()> {
    let mut session = Session::open(target)?;
    let option_count = session.config.draft_defaults().option_count;
    let patch = build_patch(kind, prompt, options, answer, points, option_count)?;

    let id = QuestionId::new(id);
    session.quiz.bank.update(&id, patch)?;
    session.save()?;

    println!("Updated question {id}");
    println!("{}", session.status());
    Ok(())
}

/// A changed kind starts from a blank body with `option_count` options.
fn build_patch(
    kind: Option<String>,
    prompt: Option<String>,
    options: Vec<String>,
    answer: Option<String>,
    points: Option<u32>,
    option_count: usize,
) -> Result<QuestionPatch> {
    let body = kind
        .as_deref()
        .map(parse_kind)
        .transpose()?
        .map(|k| QuestionBody::blank(k, option_count));

    let patch = QuestionPatch {
        prompt,
        points,
        body,
        options: (!options.is_empty()).then_some(options),
        correct_answer: answer,
    };
    anyhow::ensure!(
        !patch.is_empty(),
        "nothing to edit: pass at least one of --kind, --prompt, --option, --answer, --points"
    );
    Ok(patch)
}
