//! Manual smoke tool: drives each legacy operation against a live host.
//!
//! Usage:
//!   LEGACY_BASE_URL=http://host:port legacy_smoke <session_id> <username> <search_key>

use anyhow::{bail, Context};
use webalgo_middleware::domain::model::{
    CreateSolutionCommand, FetchProblemCommand, FetchSolutionCommand, SearchByKeyCommand, Session,
};
use webalgo_middleware::utils::logger::init_logger;
use webalgo_middleware::{
    LegacyProblemClient, LegacySolutionClient, MiddlewareConfig, ProblemService, SolutionService,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger(true);

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 {
        bail!("usage: legacy_smoke <session_id> <username> <search_key>");
    }
    let session = Session::new(args[1].clone(), args[2].clone());
    let key = args[3].clone();

    let config = MiddlewareConfig::from_env().context("loading config from environment")?;
    let base_url = config.legacy.base_url;

    let problems = ProblemService::new(LegacyProblemClient::new(base_url.clone()));
    let solutions = SolutionService::new(LegacySolutionClient::new(base_url));

    println!("Searching problems with key '{}'...", key);
    let search = problems
        .search_by_key(SearchByKeyCommand {
            key,
            session: session.clone(),
        })
        .await?;
    println!("Found {} problem(s): {:?}", search.codes.len(), search.codes);

    let Some(code) = search.codes.first().cloned() else {
        println!("No problems found, stopping here.");
        return Ok(());
    };

    println!("Fetching problem '{}'...", code);
    let problem = problems
        .fetch_problem(FetchProblemCommand {
            code: code.clone(),
            session: session.clone(),
        })
        .await?;
    println!(
        "Problem: cost={:?}, {} solution(s), ranking={:?}",
        problem.cost,
        problem.solutions.len(),
        problem.ranking
    );

    if let Some(solution_code) = problem.solutions.first().cloned() {
        println!("Fetching solution '{}'...", solution_code);
        let solution = solutions
            .fetch_solution(FetchSolutionCommand {
                code: solution_code,
                session: session.clone(),
            })
            .await?;
        println!(
            "Solution: cost={:?}, algorithm present: {}",
            solution.cost,
            solution.algorithm.is_some()
        );
    }

    println!("Creating a solution for problem '{}'...", code);
    let created = solutions
        .create_solution(CreateSolutionCommand {
            problem_code: code,
            session,
        })
        .await?;
    println!("Created solution '{}'", created.code);

    Ok(())
}
