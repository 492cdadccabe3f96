use serde::Serialize;

/// Legacy session identity, threaded explicitly through every command.
/// The legacy system authenticates via the `sessionid` and `name` cookies;
/// this carries their values as plain data, never ambient state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub session_id: String,
    pub username: String,
}

impl Session {
    pub fn new(session_id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            username: username.into(),
        }
    }
}

// Commands are pure data; construction never fails. Validation happens in the
// service layer before any outbound call.

#[derive(Debug, Clone)]
pub struct SearchByKeyCommand {
    pub key: String,
    pub session: Session,
}

#[derive(Debug, Clone)]
pub struct FetchProblemCommand {
    pub code: String,
    pub session: Session,
}

#[derive(Debug, Clone)]
pub struct FetchSolutionCommand {
    pub code: String,
    pub session: Session,
}

#[derive(Debug, Clone)]
pub struct CreateSolutionCommand {
    pub problem_code: String,
    pub session: Session,
}

#[derive(Debug, Clone)]
pub struct SaveSolutionCommand {
    pub algorithm: String,
    pub problem_code: String,
    pub cost: i32,
    pub answer: String,
    pub session: Session,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchByKeyResult {
    pub codes: Vec<String>,
}

/// Full problem details. `solutions` holds identifiers already disambiguated
/// with the parent problem code (`<raw>_<problem code>`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemDataResult {
    pub input: Option<String>,
    pub output: Option<String>,
    pub cost: Option<i32>,
    pub solutions: Vec<String>,
    pub ranking: Vec<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolutionDataResult {
    pub cost: Option<i32>,
    pub algorithm: Option<String>,
    pub io_pairs: Option<Vec<SolutionIoPair>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolutionIoPair {
    pub input: Option<String>,
    pub output: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateSolutionResult {
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveSolutionResult {
    pub status: String,
}
