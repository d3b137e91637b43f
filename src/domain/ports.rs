use crate::domain::model::{MalformedRowPolicy, Problem};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

#[async_trait]
pub trait ProblemSource: Send + Sync {
    async fn load(&self) -> Result<Vec<Problem>>;
}

pub trait QuizSettings: Send + Sync {
    fn time_limit(&self) -> Duration;
    fn filename(&self) -> &str;
    fn points_per_correct(&self) -> u64;
    fn malformed_rows(&self) -> MalformedRowPolicy;
}
