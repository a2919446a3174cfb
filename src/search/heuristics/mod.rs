mod euclidean;
mod heuristic;
mod manhattan;

pub use euclidean::EuclideanDistance;
pub use heuristic::{DistanceHeuristic, Heuristic, HeuristicValue};
pub use manhattan::ManhattanDistance;
