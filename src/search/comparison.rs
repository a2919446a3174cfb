use crate::problem::Problem;
use crate::search::{SearchConfig, SearchEngineName, SearchError, SearchResult};
use serde::{Deserialize, Serialize};
use tracing::info;

/// One line of a side by side comparison of search runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    pub algorithm: SearchEngineName,
    pub success: bool,
    pub path_length: Option<usize>,
    pub path_cost: Option<f64>,
    pub nodes_visited: usize,
    pub steps: usize,
    pub execution_time_ms: f64,
}

impl From<&SearchResult> for ComparisonRow {
    fn from(result: &SearchResult) -> Self {
        Self {
            algorithm: result.algorithm,
            success: result.success,
            path_length: result.path_length(),
            path_cost: result.path_cost,
            nodes_visited: result.nodes_visited,
            steps: result.steps.len(),
            execution_time_ms: result.execution_time_ms,
        }
    }
}

/// Run each algorithm on the same problem. Runs share nothing, so the
/// results are exactly what separate calls would produce.
pub fn compare(
    problem: &Problem,
    algorithms: &[SearchEngineName],
    config: &SearchConfig,
) -> Result<Vec<SearchResult>, SearchError> {
    info!(algorithms = algorithms.len(), "starting comparison");
    algorithms
        .iter()
        .map(|algorithm| algorithm.search(problem, config))
        .collect()
}
