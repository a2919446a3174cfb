mod comparison;
pub mod heuristics;
mod neighbours;
mod search_config;
mod search_context;
pub mod search_engines;
mod search_error;
mod search_result;
mod search_statistics;
mod search_step;
mod stable_priority_queue;
mod validate;
mod verbosity;

pub use comparison::{compare, ComparisonRow};
pub use heuristics::{DistanceHeuristic, Heuristic, HeuristicValue};
pub use neighbours::{neighbours, step_cost, Neighbours};
pub use search_config::{HeuristicConfig, SearchConfig};
pub use search_context::SearchContext;
pub use search_engines::{SearchEngine, SearchEngineName, SearchOutcome};
pub use search_error::SearchError;
pub use search_result::{SearchResult, ESTIMATED_BYTES_PER_VISITED_NODE};
pub use search_statistics::SearchStatistics;
pub use search_step::{NodeState, SearchStep};
pub use stable_priority_queue::StablePriorityQueue;
pub use validate::{path_cost, validate_path, PathError};
pub use verbosity::Verbosity;
