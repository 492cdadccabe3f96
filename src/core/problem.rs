use crate::domain::model::{
    FetchProblemCommand, ProblemDataResult, SearchByKeyCommand, SearchByKeyResult,
};
use crate::domain::ports::ProblemPort;
use crate::utils::error::{MiddlewareError, Result};
use crate::utils::validation::{ensure_session, is_blank};

/// Orchestrator for problem operations: checks preconditions, then delegates
/// to the port. This is the only place business failures are raised, so every
/// rejection happens before an outbound call is made.
pub struct ProblemService<P: ProblemPort> {
    port: P,
}

impl<P: ProblemPort> ProblemService<P> {
    pub fn new(port: P) -> Self {
        Self { port }
    }

    pub async fn search_by_key(&self, command: SearchByKeyCommand) -> Result<SearchByKeyResult> {
        if is_blank(&command.key) {
            tracing::warn!("search-by-key rejected: empty search key");
            return Err(MiddlewareError::InvalidInput {
                message: "search key is required".to_string(),
            });
        }
        ensure_session(&command.session)?;

        self.port.search_by_key(&command).await
    }

    pub async fn fetch_problem(&self, command: FetchProblemCommand) -> Result<ProblemDataResult> {
        ensure_session(&command.session)?;

        self.port.fetch_problem(&command).await
    }
}
