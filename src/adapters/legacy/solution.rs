use crate::adapters::legacy::wire::{
    LegacyCreateSolutionResponse, LegacySaveSolutionResponse, LegacySolutionDataResponse,
};
use crate::adapters::legacy::post_form;
use crate::domain::model::{
    CreateSolutionCommand, CreateSolutionResult, FetchSolutionCommand, SaveSolutionCommand,
    SaveSolutionResult, SolutionDataResult, SolutionIoPair,
};
use crate::domain::ports::SolutionPort;
use crate::utils::error::{MiddlewareError, Result};
use async_trait::async_trait;

/// Status string the legacy host itself uses for a failed save. A null status
/// in the response maps to this sentinel so callers never see a null status.
pub const SAVE_FAILURE_STATUS: &str = "erro";

/// Legacy client for the solution endpoints (`/dadosSolucao`, `/cadSolucao`,
/// `/alteraAlgo`).
pub struct LegacySolutionClient {
    client: reqwest::Client,
    base_url: String,
}

impl LegacySolutionClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl SolutionPort for LegacySolutionClient {
    async fn fetch_solution(&self, command: &FetchSolutionCommand) -> Result<SolutionDataResult> {
        let form = [("codigoPS", command.code.as_str())];

        let response: LegacySolutionDataResponse = post_form(
            &self.client,
            &self.base_url,
            "/dadosSolucao",
            &form,
            &command.session,
        )
        .await?;

        Ok(map_solution_result(response))
    }

    async fn create_solution(
        &self,
        command: &CreateSolutionCommand,
    ) -> Result<CreateSolutionResult> {
        let form = [("dadosProb", command.problem_code.as_str())];

        let response: LegacyCreateSolutionResponse = post_form(
            &self.client,
            &self.base_url,
            "/cadSolucao",
            &form,
            &command.session,
        )
        .await?;

        map_create_result(response, &command.problem_code)
    }

    async fn save_solution(&self, command: &SaveSolutionCommand) -> Result<SaveSolutionResult> {
        let cost = command.cost.to_string();
        let form = [
            ("algo", command.algorithm.as_str()),
            ("dadosProb", command.problem_code.as_str()),
            ("custo", cost.as_str()),
            ("resposta", command.answer.as_str()),
        ];

        let response: LegacySaveSolutionResponse = post_form(
            &self.client,
            &self.base_url,
            "/alteraAlgo",
            &form,
            &command.session,
        )
        .await?;

        Ok(map_save_result(response))
    }
}

/// A null `resposta` wrapper is a legitimate "no data" answer from the legacy
/// host; it maps to a structurally valid result with every field empty.
fn map_solution_result(response: LegacySolutionDataResponse) -> SolutionDataResult {
    let Some(data) = response.resposta else {
        return SolutionDataResult {
            cost: None,
            algorithm: None,
            io_pairs: None,
        };
    };

    let io_pairs = data.io.map(|pairs| {
        pairs
            .into_iter()
            .map(|io| SolutionIoPair {
                input: io.ent,
                output: io.sai,
            })
            .collect()
    });

    SolutionDataResult {
        cost: data.custo,
        algorithm: data.algo,
        io_pairs,
    }
}

/// The raw code from `/cadSolucao` is only unique within its problem, so the
/// parent code is appended before the result leaves the adapter.
fn map_create_result(
    response: LegacyCreateSolutionResponse,
    problem_code: &str,
) -> Result<CreateSolutionResult> {
    let raw = response
        .resposta
        .ok_or_else(|| MiddlewareError::ContractError {
            message: "legacy create-solution response is missing its solution code".to_string(),
        })?;

    Ok(CreateSolutionResult {
        code: format!("{}_{}", raw, problem_code),
    })
}

fn map_save_result(response: LegacySaveSolutionResponse) -> SaveSolutionResult {
    SaveSolutionResult {
        status: response
            .resposta
            .unwrap_or_else(|| SAVE_FAILURE_STATUS.to_string()),
    }
}
