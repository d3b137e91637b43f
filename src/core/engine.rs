use crate::core::session::SessionRunner;
use crate::core::timer::TimeoutController;
use crate::core::{ProblemSource, QuizSettings};
use crate::domain::model::{Quiz, SessionOutcome, SessionReport};
use crate::utils::error::Result;
use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt};

pub struct QuizEngine<S: ProblemSource, C: QuizSettings> {
    source: S,
    settings: C,
}

impl<S: ProblemSource, C: QuizSettings> QuizEngine<S, C> {
    pub fn new(source: S, settings: C) -> Self {
        Self { source, settings }
    }

    pub async fn load_quiz(&self) -> Result<Quiz> {
        let problems = self.source.load().await?;
        tracing::info!("Loaded {} problems", problems.len());
        Ok(Quiz::new(problems, self.settings.points_per_correct()))
    }

    /// Loads the problems, then plays them over `input`/`output` against the clock.
    pub async fn run<R, W>(&self, input: R, output: W) -> Result<SessionReport>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut quiz = self.load_quiz().await?;

        // 題目載入後才開始計時
        let limit = self.settings.time_limit();
        tracing::info!("Starting quiz with a time limit of {:?}", limit);
        let (timer, mut cancel) = TimeoutController::start(limit);

        let mut runner = SessionRunner::new(input, output);
        let outcome = runner.run(&mut quiz, &mut cancel).await;
        timer.stop();
        let outcome = outcome?;

        let answered = runner.answered();
        let mut output = runner.into_output();

        output
            .write_all(format!("\n{}\n", quiz.score_message()).as_bytes())
            .await?;
        if outcome == SessionOutcome::TimedOut {
            output.write_all(b"Time is up!\n").await?;
        }
        output.flush().await?;

        tracing::info!(
            "Quiz finished ({:?}): {} of {} points, {} answered",
            outcome,
            quiz.score(),
            quiz.total(),
            answered
        );

        Ok(SessionReport {
            outcome,
            score: quiz.score(),
            total: quiz.total(),
            answered,
        })
    }
}
