use crate::core::timer::Cancellation;
use crate::domain::model::{Quiz, SessionOutcome};
use crate::utils::error::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionState {
    Idle,
    AwaitingAnswer(usize),
    Scoring(usize, String),
    Finished,
}

/// Drives a quiz one problem at a time over a line-oriented text stream.
pub struct SessionRunner<R, W> {
    input: R,
    output: W,
    state: SessionState,
    answered: usize,
}

impl<R, W> SessionRunner<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            state: SessionState::Idle,
            answered: 0,
        }
    }

    /// Number of problems scored so far.
    pub fn answered(&self) -> usize {
        self.answered
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until every problem is scored or `cancel` fires.
    ///
    /// A pending answer is not credited when the session is cancelled. End of
    /// input counts as an empty answer.
    pub async fn run(
        &mut self,
        quiz: &mut Quiz,
        cancel: &mut Cancellation,
    ) -> Result<SessionOutcome> {
        // 發送端消失而未觸發時不再等待逾時
        let mut cancel_live = true;

        loop {
            let state = std::mem::replace(&mut self.state, SessionState::Finished);

            self.state = match state {
                SessionState::Idle => {
                    if quiz.problems().is_empty() {
                        SessionState::Finished
                    } else {
                        SessionState::AwaitingAnswer(0)
                    }
                }
                SessionState::AwaitingAnswer(index) => {
                    let problem = &quiz.problems()[index];
                    self.output
                        .write_all(format!("Q{}: {}? ", index + 1, problem.question).as_bytes())
                        .await?;
                    self.output.flush().await?;

                    let mut line = String::new();
                    let read = loop {
                        tokio::select! {
                            biased;
                            fired = &mut *cancel, if cancel_live => {
                                if fired.is_ok() {
                                    tracing::info!("Session cancelled at question {}", index + 1);
                                    self.state = SessionState::AwaitingAnswer(index);
                                    return Ok(SessionOutcome::TimedOut);
                                }
                                cancel_live = false;
                            }
                            read = self.input.read_line(&mut line) => break read?,
                        }
                    };

                    if read == 0 {
                        tracing::debug!("Input closed before question {}", index + 1);
                    }
                    SessionState::Scoring(index, line.trim().to_string())
                }
                SessionState::Scoring(index, answer) => {
                    let problem = &quiz.problems()[index];
                    let correct = problem.validate(&answer);
                    tracing::debug!("Q{} answered {:?}, correct: {}", index + 1, answer, correct);

                    let feedback = if correct {
                        "Correct!\n".to_string()
                    } else {
                        format!("Incorrect answer! Correct answer was {}.\n", problem.answer)
                    };
                    if correct {
                        quiz.record_correct();
                    }
                    self.answered += 1;
                    self.output.write_all(feedback.as_bytes()).await?;

                    if index + 1 < quiz.problems().len() {
                        SessionState::AwaitingAnswer(index + 1)
                    } else {
                        SessionState::Finished
                    }
                }
                SessionState::Finished => {
                    self.output.flush().await?;
                    return Ok(SessionOutcome::Completed);
                }
            };
        }
    }
}
