//! The `quizbank move` command.

use anyhow::Result;

use quizbank_core::error::MoveError;
use quizbank_core::model::QuestionId;
use quizbank_core::store::Direction;

use super::{Session, Target};

pub fn execute(target: Target, id: String, direction: String) -> Result<()> {
    let direction: Direction = direction
        .parse()
        .map_err(|e: String| anyhow::anyhow!("{}", e))?;

    let mut session = Session::open(target)?;
    let id = QuestionId::new(id);

    match session.quiz.bank.move_question(&id, direction) {
        Ok(()) => {}
        Err(e @ MoveError::NoOp { .. }) => {
            println!("Nothing to do: {e}");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }
    session.save()?;

    let position = session.quiz.bank.position(&id).map_or(0, |p| p + 1);
    println!("Moved question {id} {direction} to position {position}");
    Ok(())
}
