//! The `quizbank remove` command.

use anyhow::Result;

use quizbank_core::model::QuestionId;

use super::{Session, Target};

pub fn execute(target: Target, id: String) -> Result<()> {
    let mut session = Session::open(target)?;
    let id = QuestionId::new(id);
    session.quiz.bank.remove(&id)?;
    session.save()?;

    println!("Removed question {id}");
    println!("{}", session.status());
    Ok(())
}
