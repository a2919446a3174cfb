//! The two problem shapes the search engines operate on: obstacle grids and
//! explicit weighted graphs.

mod graph;
mod grid;
mod node_id;
mod problem_error;

pub use graph::{GraphEdge, GraphNode, GraphProblem};
pub use grid::{GridCell, GridPosition, GridProblem, MAX_GRID_SIZE, MIN_GRID_SIZE};
pub use node_id::NodeId;
pub use problem_error::ProblemError;

use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Problem {
    Grid(GridProblem),
    Graph(GraphProblem),
}

impl Problem {
    pub fn from_json(text: &str) -> Result<Self, ProblemError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ProblemError> {
        let text = std::fs::read_to_string(path).map_err(|source| ProblemError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn to_json(&self) -> Result<String, ProblemError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn start_id(&self) -> Option<NodeId> {
        match self {
            Problem::Grid(grid) => grid.start.map(|position| position.node_id()),
            Problem::Graph(graph) => graph.start_node_id.clone(),
        }
    }

    pub fn goal_id(&self) -> Option<NodeId> {
        match self {
            Problem::Grid(grid) => grid.goal.map(|position| position.node_id()),
            Problem::Graph(graph) => graph.goal_node_id.clone(),
        }
    }

    /// Whether the node is an impassable grid cell. Graph nodes are never
    /// obstacles.
    pub fn is_obstacle(&self, node: &NodeId) -> bool {
        match self {
            Problem::Grid(grid) => node
                .to_coords()
                .is_some_and(|(row, col)| grid.is_obstacle(row, col)),
            Problem::Graph(_) => false,
        }
    }

    /// Check every structural invariant of the problem. The search engines
    /// assume this has passed.
    pub fn validate(&self) -> Result<(), ProblemError> {
        match self {
            Problem::Grid(grid) => grid.validate(),
            Problem::Graph(graph) => graph.validate(),
        }
    }
}

impl From<GridProblem> for Problem {
    fn from(value: GridProblem) -> Self {
        Problem::Grid(value)
    }
}

impl From<GraphProblem> for Problem {
    fn from(value: GraphProblem) -> Self {
        Problem::Graph(value)
    }
}
