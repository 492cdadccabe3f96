use crate::adapters::legacy::wire::{LegacyProblemDataResponse, LegacySearchByKeyResponse};
use crate::adapters::legacy::post_form;
use crate::domain::model::{
    FetchProblemCommand, ProblemDataResult, SearchByKeyCommand, SearchByKeyResult,
};
use crate::domain::ports::ProblemPort;
use crate::utils::error::{MiddlewareError, Result};
use async_trait::async_trait;

/// Legacy client for the problem endpoints (`/buscaProblemasChave`,
/// `/dadosProblema`). Pure transport translation; preconditions belong to
/// `ProblemService`.
pub struct LegacyProblemClient {
    client: reqwest::Client,
    base_url: String,
}

impl LegacyProblemClient {
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
impl ProblemPort for LegacyProblemClient {
    async fn search_by_key(&self, command: &SearchByKeyCommand) -> Result<SearchByKeyResult> {
        // The legacy endpoint expects pChave even though the search only uses
        // pTipo; it is sent empty.
        let form = [("pChave", ""), ("pTipo", command.key.as_str())];

        let response: LegacySearchByKeyResponse = post_form(
            &self.client,
            &self.base_url,
            "/buscaProblemasChave",
            &form,
            &command.session,
        )
        .await?;

        Ok(map_search_result(response))
    }

    async fn fetch_problem(&self, command: &FetchProblemCommand) -> Result<ProblemDataResult> {
        let form = [("codigoProblema", command.code.as_str())];

        let response: LegacyProblemDataResponse = post_form(
            &self.client,
            &self.base_url,
            "/dadosProblema",
            &form,
            &command.session,
        )
        .await?;

        map_problem_result(response, &command.code)
    }
}

/// Flattens the legacy list-of-lists: the first element of each inner list is
/// the canonical code, empty inner lists are skipped, and a null collection
/// becomes an empty one.
fn map_search_result(response: LegacySearchByKeyResponse) -> SearchByKeyResult {
    let codes = response
        .probs
        .unwrap_or_default()
        .into_iter()
        .filter_map(|variants| variants.into_iter().next())
        .collect();

    SearchByKeyResult { codes }
}

/// Reshapes problem details. Solution identifiers coming back from the legacy
/// host are only unique within their problem, so each is suffixed with
/// `_<problem code>` before leaving the adapter.
fn map_problem_result(
    response: LegacyProblemDataResponse,
    problem_code: &str,
) -> Result<ProblemDataResult> {
    let data = response
        .respostas
        .ok_or_else(|| MiddlewareError::ContractError {
            message: "legacy problem-data response is missing its 'respostas' wrapper".to_string(),
        })?;

    let solutions = data
        .sols
        .unwrap_or_default()
        .into_iter()
        .map(|raw| format!("{}_{}", raw, problem_code))
        .collect();

    Ok(ProblemDataResult {
        input: data.ent,
        output: data.sai,
        cost: data.custo,
        solutions,
        ranking: data.melhor.unwrap_or_default(),
        description: data.desc,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::legacy::wire::LegacyProblemData;

    #[test]
    fn test_search_flattens_first_variant_of_each_inner_list() {
        let response = LegacySearchByKeyResponse {
            probs: Some(vec![
                vec!["P1".to_string(), "P1-ALT".to_string()],
                vec!["P2".to_string()],
            ]),
        };
        let result = map_search_result(response);
        assert_eq!(result.codes, vec!["P1", "P2"]);
    }

    #[test]
    fn test_search_skips_empty_inner_lists() {
        let response = LegacySearchByKeyResponse {
            probs: Some(vec![vec!["P1".to_string()], vec![], vec!["P3".to_string()]]),
        };
        let result = map_search_result(response);
        assert_eq!(result.codes, vec!["P1", "P3"]);
    }

    #[test]
    fn test_search_null_collection_maps_to_empty_list() {
        let response = LegacySearchByKeyResponse { probs: None };
        let result = map_search_result(response);
        assert!(result.codes.is_empty());
    }

    #[test]
    fn test_problem_solutions_are_suffixed_with_problem_code() {
        let response = LegacyProblemDataResponse {
            respostas: Some(LegacyProblemData {
                ent: Some("1 2".to_string()),
                sai: Some("3".to_string()),
                custo: Some(10),
                sols: Some(vec!["s1".to_string(), "s2".to_string()]),
                melhor: Some(vec!["ana".to_string()]),
                desc: Some("Soma".to_string()),
            }),
        };
        let result = map_problem_result(response, "X1").unwrap();
        assert_eq!(result.solutions, vec!["s1_X1", "s2_X1"]);
        assert_eq!(result.input.as_deref(), Some("1 2"));
        assert_eq!(result.output.as_deref(), Some("3"));
        assert_eq!(result.cost, Some(10));
        assert_eq!(result.ranking, vec!["ana"]);
        assert_eq!(result.description.as_deref(), Some("Soma"));
    }

    #[test]
    fn test_problem_null_lists_map_to_empty_lists() {
        let response = LegacyProblemDataResponse {
            respostas: Some(LegacyProblemData {
                ent: None,
                sai: None,
                custo: None,
                sols: None,
                melhor: None,
                desc: None,
            }),
        };
        let result = map_problem_result(response, "X1").unwrap();
        assert!(result.solutions.is_empty());
        assert!(result.ranking.is_empty());
    }

    #[test]
    fn test_problem_missing_wrapper_is_contract_error() {
        let response = LegacyProblemDataResponse { respostas: None };
        assert!(matches!(
            map_problem_result(response, "X1"),
            Err(MiddlewareError::ContractError { .. })
        ));
    }
}
