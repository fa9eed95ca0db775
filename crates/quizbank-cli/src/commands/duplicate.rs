//! The `quizbank duplicate` command.

use anyhow::Result;

use quizbank_core::model::QuestionId;

use super::{Session, Target};

pub fn execute(target: Target, id: String) -> Result<()> {
    let mut session = Session::open(target)?;
    let copy = session.quiz.bank.duplicate(&QuestionId::new(id.as_str()))?;
    session.save()?;

    println!("Duplicated question {id} as {copy}");
    println!("{}", session.status());
    Ok(())
}
