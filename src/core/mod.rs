pub mod engine;
pub mod loader;
pub mod session;
pub mod timer;

pub use crate::domain::model::{MalformedRowPolicy, Problem, Quiz, SessionOutcome, SessionReport};
pub use crate::domain::ports::{ProblemSource, QuizSettings};
pub use crate::utils::error::Result;
