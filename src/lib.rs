pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::cli::CsvFileSource;
pub use crate::core::{engine::QuizEngine, timer::TimeoutController};
pub use domain::model::{MalformedRowPolicy, Problem, Quiz, SessionOutcome, SessionReport};
pub use utils::error::{QuizError, Result};
