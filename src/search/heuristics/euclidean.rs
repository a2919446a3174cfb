use crate::problem::{NodeId, Problem};
use crate::search::Heuristic;

/// Straight line distance between graph node positions divided by `scale`.
/// Node positions are layout coordinates, so this is a guidance estimate and
/// is not admissible in general.
#[derive(Debug, Clone)]
pub struct EuclideanDistance {
    scale: f64,
    use_precomputed: bool,
}

impl EuclideanDistance {
    pub fn new(scale: f64, use_precomputed: bool) -> Self {
        Self {
            scale,
            use_precomputed,
        }
    }
}

impl Heuristic for EuclideanDistance {
    fn evaluate(&self, node: &NodeId, goal: &NodeId, problem: &Problem) -> f64 {
        let Problem::Graph(graph) = problem else {
            return 0.;
        };
        let (Some(from), Some(to)) = (graph.node(node), graph.node(goal)) else {
            return 0.;
        };
        if self.use_precomputed {
            if let Some(h) = from.heuristic {
                return h.max(0.);
            }
        }
        (from.x - to.x).hypot(from.y - to.y) / self.scale
    }
}
