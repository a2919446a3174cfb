use crate::problem::{NodeId, Problem};
use crate::search::{SearchContext, SearchEngineName, SearchOutcome, SearchStep};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Rough per-node footprint used for [`SearchResult::memory_estimate_bytes`].
/// This is a proxy for comparing runs, not a measurement.
pub const ESTIMATED_BYTES_PER_VISITED_NODE: usize = 100;

/// Everything produced by one search run: the full replayable trace and a
/// summary of how the search went.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub algorithm: SearchEngineName,
    pub problem: Problem,
    pub steps: Vec<SearchStep>,
    pub path: Option<Vec<NodeId>>,
    pub path_cost: Option<f64>,
    pub nodes_visited: usize,
    pub execution_time_ms: f64,
    pub memory_estimate_bytes: usize,
    pub success: bool,
}

impl SearchResult {
    /// Package a finished run. Consumes the context, so the working maps can
    /// no longer change once the result exists.
    pub fn assemble(
        algorithm: SearchEngineName,
        problem: &Problem,
        context: SearchContext,
        outcome: SearchOutcome,
    ) -> Self {
        let nodes_visited = context.visited_count();
        let execution_time_ms = context.statistics().elapsed().as_secs_f64() * 1000.;
        let (path, path_cost) = match outcome {
            SearchOutcome::Success { path, cost } => (Some(path), Some(cost)),
            SearchOutcome::ProvablyUnsolvable | SearchOutcome::IncompleteUnsolvable => {
                (None, None)
            }
        };

        Self {
            algorithm,
            problem: problem.clone(),
            steps: context.into_steps(),
            success: path.is_some(),
            path,
            path_cost,
            nodes_visited,
            execution_time_ms,
            memory_estimate_bytes: nodes_visited * ESTIMATED_BYTES_PER_VISITED_NODE,
        }
    }

    pub fn path_length(&self) -> Option<usize> {
        self.path.as_ref().map(Vec::len)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, self.to_json()?)
    }
}
