use crate::core::{MalformedRowPolicy, QuizSettings};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use std::ffi::OsString;
use std::time::Duration;

const LONG_FLAGS: &[&str] = &["time", "filename", "score", "on-malformed", "verbose", "help"];

#[derive(Debug, Clone, Parser)]
#[command(name = "quiz-runner")]
#[command(about = "A timed quiz over question/answer pairs from a CSV file")]
pub struct CliConfig {
    #[arg(long, default_value = "30", help = "Time limit for the whole quiz, in seconds")]
    pub time: u64,

    #[arg(long, default_value = "./problems.csv", help = "Path to the problems CSV file")]
    pub filename: String,

    #[arg(long, default_value = "5", help = "Points for each correct answer")]
    pub score: u64,

    #[arg(long, value_enum, default_value_t = MalformedRowPolicy::Error)]
    pub on_malformed: MalformedRowPolicy,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Parses process arguments, accepting `-time 10` and `-time=10` as well as `--time 10`.
    pub fn from_env_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }
}

/// Rewrites single-dash long flags (`-filename x`) to the double-dash form clap expects.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;

    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if passthrough {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                passthrough = true;
                return arg;
            }
            match text.strip_prefix('-') {
                Some(rest) if !rest.starts_with('-') => {
                    let name = rest.split('=').next().unwrap_or(rest);
                    if LONG_FLAGS.contains(&name) {
                        OsString::from(format!("-{}", text))
                    } else {
                        arg
                    }
                }
                _ => arg,
            }
        })
        .collect()
}

impl QuizSettings for CliConfig {
    fn time_limit(&self) -> Duration {
        Duration::from_secs(self.time)
    }

    fn filename(&self) -> &str {
        &self.filename
    }

    fn points_per_correct(&self) -> u64 {
        self.score
    }

    fn malformed_rows(&self) -> MalformedRowPolicy {
        self.on_malformed
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("filename", &self.filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliConfig {
        CliConfig::parse_from(normalize_args(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let config = parse(&["quiz-runner"]);
        assert_eq!(config.time, 30);
        assert_eq!(config.filename, "./problems.csv");
        assert_eq!(config.score, 5);
        assert_eq!(config.on_malformed, MalformedRowPolicy::Error);
        assert!(!config.verbose);
        assert_eq!(config.time_limit(), Duration::from_secs(30));
    }

    #[test]
    fn test_single_dash_flags() {
        let config = parse(&["quiz-runner", "-time", "10", "-filename=quiz.csv", "-score", "2"]);
        assert_eq!(config.time, 10);
        assert_eq!(config.filename, "quiz.csv");
        assert_eq!(config.points_per_correct(), 2);
    }

    #[test]
    fn test_double_dash_flags_and_policy() {
        let config = parse(&["quiz-runner", "--time=0", "--on-malformed", "skip", "-v"]);
        assert_eq!(config.time_limit(), Duration::ZERO);
        assert_eq!(config.malformed_rows(), MalformedRowPolicy::Skip);
        assert!(config.verbose);
    }

    #[test]
    fn test_normalize_leaves_unknown_and_short_flags() {
        let args = normalize_args(["quiz-runner", "-v", "-x", "--", "-time"]);
        assert_eq!(args, vec!["quiz-runner", "-v", "-x", "--", "-time"]);
    }

    #[test]
    fn test_negative_score_rejected() {
        let result = CliConfig::try_parse_from(normalize_args(["quiz-runner", "-score", "-1"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_filename_fails_validation() {
        let config = parse(&["quiz-runner", "-filename", ""]);
        assert!(config.validate().is_err());
    }
}
