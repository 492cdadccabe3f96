pub mod problem;
pub mod solution;

pub use crate::domain::model::{
    CreateSolutionCommand, CreateSolutionResult, FetchProblemCommand, FetchSolutionCommand,
    ProblemDataResult, SaveSolutionCommand, SaveSolutionResult, SearchByKeyCommand,
    SearchByKeyResult, Session, SolutionDataResult, SolutionIoPair,
};
pub use crate::domain::ports::{ProblemPort, SolutionPort};
pub use crate::utils::error::Result;
