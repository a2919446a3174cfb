use crate::problem::ProblemError;
use std::path::PathBuf;
use thiserror::Error;

/// Contract violations when setting up a search. Whether or not a path
/// exists is never an error, see [`crate::search::SearchResult::success`].
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),
    #[error("beam width must be at least 1, got {0}")]
    InvalidBeamWidth(usize),
    #[error("graph heuristic scale must be a positive finite number, got {0}")]
    InvalidHeuristicScale(f64),
    #[error("failed to read config file {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("failed to write result file {path}")]
    ResultWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid problem: {0}")]
    InvalidProblem(#[from] ProblemError),
}
