pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::legacy::{LegacyProblemClient, LegacySolutionClient};
pub use config::MiddlewareConfig;
pub use core::{problem::ProblemService, solution::SolutionService};
pub use utils::error::{MiddlewareError, Result};
