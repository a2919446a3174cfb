use crate::problem::NodeId;
use std::path::PathBuf;
use thiserror::Error;

/// Ways a problem description can fail to be loaded or violate the
/// structural invariants the search engines rely on.
#[derive(Debug, Error)]
pub enum ProblemError {
    #[error("failed to read problem file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse problem: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("grid {axis} must be between 3 and 50, got {size}")]
    GridSizeOutOfRange { axis: &'static str, size: usize },
    #[error("cell ({row}, {col}) lies outside the grid")]
    CellOutOfBounds { row: usize, col: usize },
    #[error("cell ({row}, {col}) is listed more than once")]
    DuplicateCell { row: usize, col: usize },
    #[error("grid lists {actual} distinct cells, expected {expected}")]
    IncompleteGrid { expected: usize, actual: usize },
    #[error("weight of {location} must be a finite number >= 1, got {weight}")]
    InvalidWeight { location: String, weight: f64 },
    #[error("node {0} is declared more than once")]
    DuplicateNode(NodeId),
    #[error("edge {from}->{to} references unknown node {missing}")]
    UnknownEdgeEndpoint {
        from: NodeId,
        to: NodeId,
        missing: NodeId,
    },
    #[error("{role} node {node} does not exist")]
    UnknownTerminal { role: &'static str, node: NodeId },
    #[error("{role} cell {node} is an obstacle")]
    TerminalOnObstacle { role: &'static str, node: NodeId },
    #[error("cell {node} is flagged as {role}, but the {role} is {expected}")]
    MisplacedTerminalFlag {
        role: &'static str,
        node: NodeId,
        expected: NodeId,
    },
    #[error("{role} cell {node} is not flagged as {role}")]
    MissingTerminalFlag { role: &'static str, node: NodeId },
    #[error("problem has no start")]
    MissingStart,
    #[error("problem has no goal")]
    MissingGoal,
}
