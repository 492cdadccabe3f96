use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use webalgo_middleware::domain::model::{
    CreateSolutionCommand, CreateSolutionResult, FetchProblemCommand, FetchSolutionCommand,
    ProblemDataResult, SaveSolutionCommand, SaveSolutionResult, SearchByKeyCommand,
    SearchByKeyResult, Session, SolutionDataResult,
};
use webalgo_middleware::domain::ports::{ProblemPort, SolutionPort};
use webalgo_middleware::{MiddlewareError, ProblemService, Result, SolutionService};

/// Port double that records how many outbound calls would have been made.
struct StubProblemPort {
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl ProblemPort for StubProblemPort {
    async fn search_by_key(&self, _command: &SearchByKeyCommand) -> Result<SearchByKeyResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(SearchByKeyResult {
            codes: vec!["P1".to_string()],
        })
    }

    async fn fetch_problem(&self, _command: &FetchProblemCommand) -> Result<ProblemDataResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(ProblemDataResult {
            input: None,
            output: None,
            cost: None,
            solutions: vec![],
            ranking: vec![],
            description: None,
        })
    }
}

struct StubSolutionPort {
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl SolutionPort for StubSolutionPort {
    async fn fetch_solution(&self, _command: &FetchSolutionCommand) -> Result<SolutionDataResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(SolutionDataResult {
            cost: None,
            algorithm: None,
            io_pairs: None,
        })
    }

    async fn create_solution(
        &self,
        command: &CreateSolutionCommand,
    ) -> Result<CreateSolutionResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(CreateSolutionResult {
            code: format!("1_{}", command.problem_code),
        })
    }

    async fn save_solution(&self, _command: &SaveSolutionCommand) -> Result<SaveSolutionResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(SaveSolutionResult {
            status: "ok".to_string(),
        })
    }
}

fn problem_service() -> (ProblemService<StubProblemPort>, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let service = ProblemService::new(StubProblemPort {
        calls: calls.clone(),
    });
    (service, calls)
}

fn solution_service() -> (SolutionService<StubSolutionPort>, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let service = SolutionService::new(StubSolutionPort {
        calls: calls.clone(),
    });
    (service, calls)
}

fn valid_session() -> Session {
    Session::new("s1", "ana")
}

#[tokio::test]
async fn test_search_rejects_empty_key_without_outbound_call() {
    let (service, calls) = problem_service();

    for key in ["", "   ", "\t\n"] {
        let err = service
            .search_by_key(SearchByKeyCommand {
                key: key.to_string(),
                session: valid_session(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, MiddlewareError::InvalidInput { .. }));
    }
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_search_rejects_missing_session_without_outbound_call() {
    let (service, calls) = problem_service();

    for session in [Session::new("", "ana"), Session::new("s1", "")] {
        let err = service
            .search_by_key(SearchByKeyCommand {
                key: "soma".to_string(),
                session,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, MiddlewareError::InvalidState { .. }));
    }
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_search_delegates_when_preconditions_hold() {
    let (service, calls) = problem_service();

    let result = service
        .search_by_key(SearchByKeyCommand {
            key: "soma".to_string(),
            session: valid_session(),
        })
        .await
        .unwrap();

    assert_eq!(result.codes, vec!["P1"]);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_fetch_problem_rejects_missing_session() {
    let (service, calls) = problem_service();

    let err = service
        .fetch_problem(FetchProblemCommand {
            code: "X1".to_string(),
            session: Session::new("", ""),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, MiddlewareError::InvalidState { .. }));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_solution_operations_reject_missing_session() {
    let (service, calls) = solution_service();
    let session = Session::new("s1", "   ");

    let err = service
        .fetch_solution(FetchSolutionCommand {
            code: "s1_X1".to_string(),
            session: session.clone(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, MiddlewareError::InvalidState { .. }));

    let err = service
        .create_solution(CreateSolutionCommand {
            problem_code: "X1".to_string(),
            session: session.clone(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, MiddlewareError::InvalidState { .. }));

    let err = service
        .save_solution(SaveSolutionCommand {
            algorithm: "inicio fim".to_string(),
            problem_code: "X1".to_string(),
            cost: 3,
            answer: "1".to_string(),
            session,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, MiddlewareError::InvalidState { .. }));

    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_solution_operations_delegate_when_session_present() {
    let (service, calls) = solution_service();

    let fetched = service
        .fetch_solution(FetchSolutionCommand {
            code: "s1_X1".to_string(),
            session: valid_session(),
        })
        .await
        .unwrap();
    assert_eq!(fetched.cost, None);

    let created = service
        .create_solution(CreateSolutionCommand {
            problem_code: "X1".to_string(),
            session: valid_session(),
        })
        .await
        .unwrap();
    assert_eq!(created.code, "1_X1");

    let saved = service
        .save_solution(SaveSolutionCommand {
            algorithm: "inicio fim".to_string(),
            problem_code: "X1".to_string(),
            cost: 3,
            answer: "1".to_string(),
            session: valid_session(),
        })
        .await
        .unwrap();
    assert_eq!(saved.status, "ok");

    assert_eq!(calls.load(Ordering::SeqCst), 3);
}
