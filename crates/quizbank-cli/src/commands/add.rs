//! The `quizbank add` command.

use anyhow::Result;

use super::{parse_kind, Session, Target};

pub fn execute(
    target: Target,
    kind: String,
    prompt: String,
    options: Vec<String>,
    answer: Option<String>,
    points: Option<u32>,
) -> Result<()> {
    let kind = parse_kind(&kind)?;
    let mut session = Session::open(target)?;

    let mut draft = session.quiz.bank.new_draft();
    draft.set_kind(kind);
    draft.set_prompt(prompt);
    if !options.is_empty() {
        draft.body.set_options(options)?;
    }
    if let Some(answer) = answer {
        draft.set_correct_answer(&answer)?;
    }
    if let Some(points) = points {
        draft.set_points(points);
    }

    let id = session.quiz.bank.add(&mut draft)?;
    session.save()?;

    println!("Added question {id}");
    println!("{}", session.status());
    Ok(())
}
