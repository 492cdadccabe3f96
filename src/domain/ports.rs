use crate::domain::model::{
    CreateSolutionCommand, CreateSolutionResult, FetchProblemCommand, FetchSolutionCommand,
    ProblemDataResult, SaveSolutionCommand, SaveSolutionResult, SearchByKeyCommand,
    SearchByKeyResult, SolutionDataResult,
};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Outbound port for problem operations against the legacy system.
/// The concrete implementation lives in the adapters layer; services only see
/// this trait, so it can be swapped for a test double.
#[async_trait]
pub trait ProblemPort: Send + Sync {
    async fn search_by_key(&self, command: &SearchByKeyCommand) -> Result<SearchByKeyResult>;

    async fn fetch_problem(&self, command: &FetchProblemCommand) -> Result<ProblemDataResult>;
}

/// Outbound port for solution operations against the legacy system.
#[async_trait]
pub trait SolutionPort: Send + Sync {
    async fn fetch_solution(&self, command: &FetchSolutionCommand) -> Result<SolutionDataResult>;

    async fn create_solution(&self, command: &CreateSolutionCommand)
        -> Result<CreateSolutionResult>;

    async fn save_solution(&self, command: &SaveSolutionCommand) -> Result<SaveSolutionResult>;
}
