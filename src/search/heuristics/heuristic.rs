use crate::problem::{NodeId, Problem};
use crate::search::{
    heuristics::{EuclideanDistance, ManhattanDistance},
    HeuristicConfig,
};
use ordered_float::OrderedFloat;
use std::fmt::Debug;

pub type HeuristicValue = OrderedFloat<f64>;

pub trait Heuristic: Debug {
    /// Estimate the remaining cost from `node` to `goal`. Nodes that cannot
    /// be resolved in the problem evaluate to 0.
    fn evaluate(&self, node: &NodeId, goal: &NodeId, problem: &Problem) -> f64;
}

/// The heuristic used by every informed search engine: manhattan distance on
/// grids, scaled euclidean distance on graphs.
#[derive(Debug, Clone)]
pub struct DistanceHeuristic {
    manhattan: ManhattanDistance,
    euclidean: EuclideanDistance,
}

impl DistanceHeuristic {
    pub fn new(config: &HeuristicConfig) -> Self {
        Self {
            manhattan: ManhattanDistance::new(),
            euclidean: EuclideanDistance::new(config.graph_scale, config.use_precomputed),
        }
    }
}

impl Default for DistanceHeuristic {
    fn default() -> Self {
        Self::new(&HeuristicConfig::default())
    }
}

impl Heuristic for DistanceHeuristic {
    fn evaluate(&self, node: &NodeId, goal: &NodeId, problem: &Problem) -> f64 {
        match problem {
            Problem::Grid(_) => self.manhattan.evaluate(node, goal, problem),
            Problem::Graph(_) => self.euclidean.evaluate(node, goal, problem),
        }
    }
}
