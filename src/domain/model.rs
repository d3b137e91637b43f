/// One question with its expected answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub question: String,
    pub answer: String,
}

impl Problem {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Case-insensitive comparison after trimming surrounding whitespace on both sides.
    pub fn validate(&self, candidate: &str) -> bool {
        normalize(candidate) == normalize(&self.answer)
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

#[derive(Debug, Clone)]
pub struct Quiz {
    problems: Vec<Problem>,
    score: u64,
    points_per_correct: u64,
}

impl Quiz {
    pub fn new(problems: Vec<Problem>, points_per_correct: u64) -> Self {
        Self {
            problems,
            score: 0,
            points_per_correct,
        }
    }

    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn increment_score(&mut self, amount: u64) {
        self.score = self.score.saturating_add(amount);
    }

    pub fn record_correct(&mut self) {
        self.increment_score(self.points_per_correct);
    }

    /// Highest reachable score; does not depend on how far the session got.
    pub fn total(&self) -> u64 {
        (self.problems.len() as u64).saturating_mul(self.points_per_correct)
    }

    pub fn score_message(&self) -> String {
        format!("You scored {} out of {}!", self.score, self.total())
    }
}

/// What the loader does with a row that lacks a question or an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum MalformedRowPolicy {
    Error,
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Completed,
    TimedOut,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub outcome: SessionOutcome,
    pub score: u64,
    pub total: u64,
    pub answered: usize,
}
