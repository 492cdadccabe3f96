//! Deserialization targets for the legacy JSON shapes.
//!
//! Field names mirror the legacy wire exactly and must not be renamed. All
//! fields are optional: the legacy host omits or nulls them freely, and serde
//! already skips unknown fields, so decoding stays forward-compatible.

use serde::Deserialize;

/// `/buscaProblemasChave` body. `probs` is a list of lists; each inner list
/// holds variant spellings of one problem code.
#[derive(Debug, Deserialize)]
pub struct LegacySearchByKeyResponse {
    pub probs: Option<Vec<Vec<String>>>,
}

/// `/dadosProblema` body. The `respostas` wrapper is guaranteed by the
/// endpoint; its absence is a contract violation, not a data-absence case.
#[derive(Debug, Deserialize)]
pub struct LegacyProblemDataResponse {
    pub respostas: Option<LegacyProblemData>,
}

#[derive(Debug, Deserialize)]
pub struct LegacyProblemData {
    pub ent: Option<String>,
    pub sai: Option<String>,
    pub custo: Option<i32>,
    pub sols: Option<Vec<String>>,
    pub melhor: Option<Vec<String>>,
    pub desc: Option<String>,
}

/// `/dadosSolucao` body. A null `resposta` wrapper is legitimate here and
/// maps to an all-empty result.
#[derive(Debug, Deserialize)]
pub struct LegacySolutionDataResponse {
    pub resposta: Option<LegacySolutionData>,
}

#[derive(Debug, Deserialize)]
pub struct LegacySolutionData {
    pub custo: Option<i32>,
    pub algo: Option<String>,
    pub io: Option<Vec<LegacySolutionIo>>,
}

#[derive(Debug, Deserialize)]
pub struct LegacySolutionIo {
    pub ent: Option<String>,
    pub sai: Option<String>,
}

/// `/cadSolucao` body: `resposta` carries the raw code of the new solution.
#[derive(Debug, Deserialize)]
pub struct LegacyCreateSolutionResponse {
    pub resposta: Option<String>,
}

/// `/alteraAlgo` body: `resposta` carries the save status, or null on failure.
#[derive(Debug, Deserialize)]
pub struct LegacySaveSolutionResponse {
    pub resposta: Option<String>,
}
