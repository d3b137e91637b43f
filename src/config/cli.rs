use crate::core::loader::parse_problems;
use crate::core::{MalformedRowPolicy, Problem, ProblemSource};
use crate::utils::error::Result;

/// Problems read from a CSV file on local disk.
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: String,
    policy: MalformedRowPolicy,
}

impl CsvFileSource {
    pub fn new(path: impl Into<String>, policy: MalformedRowPolicy) -> Self {
        Self {
            path: path.into(),
            policy,
        }
    }
}

#[async_trait::async_trait]
impl ProblemSource for CsvFileSource {
    async fn load(&self) -> Result<Vec<Problem>> {
        tracing::debug!("Reading problems from {}", self.path);
        let data = tokio::fs::read(&self.path).await?;

        parse_problems(&data, self.policy)
    }
}
