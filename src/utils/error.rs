use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Malformed row at line {line}: {reason}")]
    MalformedRowError { line: u64, reason: String },

    #[error("Malformed CSV at line {line}: {reason}")]
    MalformedCsvError { line: u64, reason: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl QuizError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            QuizError::InvalidConfigValueError { .. } => ErrorSeverity::Medium,
            QuizError::MalformedRowError { .. }
            | QuizError::MalformedCsvError { .. }
            | QuizError::CsvError(_) => ErrorSeverity::High,
            QuizError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// 依嚴重程度決定的退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            QuizError::IoError(e) => format!("Could not read the problems file: {}", e),
            QuizError::CsvError(e) => format!("The problems file is not valid CSV: {}", e),
            QuizError::MalformedRowError { line, reason } => {
                format!("Line {} of the problems file is unusable: {}", line, reason)
            }
            QuizError::MalformedCsvError { line, reason } => {
                format!("The problems file is not valid CSV at line {}: {}", line, reason)
            }
            QuizError::InvalidConfigValueError { field, reason, .. } => {
                format!("Option '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            QuizError::IoError(_) => "Check that -filename points to an existing, readable file",
            QuizError::CsvError(_) => "Make sure quotes are balanced and the file is UTF-8",
            QuizError::MalformedRowError { .. } => {
                "Give every row a question and an answer, or run with --on-malformed skip"
            }
            QuizError::MalformedCsvError { .. } => {
                "Quote fields containing quotes or commas, and give every row the same columns"
            }
            QuizError::InvalidConfigValueError { .. } => "Run with --help to see accepted values",
        }
    }
}

pub type Result<T> = std::result::Result<T, QuizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_follow_severity() {
        let io = QuizError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert_eq!(io.severity(), ErrorSeverity::Critical);
        assert_eq!(io.exit_code(), 3);

        let row = QuizError::MalformedRowError {
            line: 4,
            reason: "expected 2 fields, found 1".to_string(),
        };
        assert_eq!(row.exit_code(), 1);
        assert!(row.to_string().contains("line 4"));

        let config = QuizError::InvalidConfigValueError {
            field: "filename".to_string(),
            value: String::new(),
            reason: "Path cannot be empty".to_string(),
        };
        assert_eq!(config.exit_code(), 2);

        let csv = QuizError::MalformedCsvError {
            line: 3,
            reason: "quoted field is never closed".to_string(),
        };
        assert_eq!(csv.exit_code(), 1);
        assert_eq!(
            csv.user_friendly_message(),
            "The problems file is not valid CSV at line 3: quoted field is never closed"
        );
    }

    #[test]
    fn test_user_friendly_message_names_the_line() {
        let err = QuizError::MalformedRowError {
            line: 7,
            reason: "question is empty".to_string(),
        };
        assert_eq!(
            err.user_friendly_message(),
            "Line 7 of the problems file is unusable: question is empty"
        );
        assert!(err.recovery_suggestion().contains("--on-malformed skip"));
    }
}
