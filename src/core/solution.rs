use crate::domain::model::{
    CreateSolutionCommand, CreateSolutionResult, FetchSolutionCommand, SaveSolutionCommand,
    SaveSolutionResult, SolutionDataResult,
};
use crate::domain::ports::SolutionPort;
use crate::utils::error::Result;
use crate::utils::validation::ensure_session;

/// Orchestrator for solution operations. The session check is applied
/// uniformly; the transport layer already guarantees the remaining fields.
pub struct SolutionService<S: SolutionPort> {
    port: S,
}

impl<S: SolutionPort> SolutionService<S> {
    pub fn new(port: S) -> Self {
        Self { port }
    }

    pub async fn fetch_solution(
        &self,
        command: FetchSolutionCommand,
    ) -> Result<SolutionDataResult> {
        ensure_session(&command.session)?;

        self.port.fetch_solution(&command).await
    }

    pub async fn create_solution(
        &self,
        command: CreateSolutionCommand,
    ) -> Result<CreateSolutionResult> {
        ensure_session(&command.session)?;

        self.port.create_solution(&command).await
    }

    pub async fn save_solution(&self, command: SaveSolutionCommand) -> Result<SaveSolutionResult> {
        ensure_session(&command.session)?;

        self.port.save_solution(&command).await
    }
}
