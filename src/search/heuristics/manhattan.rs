use crate::problem::{NodeId, Problem};
use crate::search::Heuristic;

/// Manhattan distance between grid cells. Only admissible for 4-directional
/// movement: a diagonal step costs `sqrt(2)` but closes a distance of 2.
#[derive(Debug, Clone, Default)]
pub struct ManhattanDistance {}

impl ManhattanDistance {
    pub fn new() -> Self {
        ManhattanDistance {}
    }
}

impl Heuristic for ManhattanDistance {
    fn evaluate(&self, node: &NodeId, goal: &NodeId, problem: &Problem) -> f64 {
        let Problem::Grid(grid) = problem else {
            return 0.;
        };
        let resolve = |id: &NodeId| {
            id.to_coords()
                .filter(|&(row, col)| grid.cell(row, col).is_some())
        };
        match (resolve(node), resolve(goal)) {
            (Some((r1, c1)), Some((r2, c2))) => (r1.abs_diff(r2) + c1.abs_diff(c2)) as f64,
            _ => 0.,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn manhattan_distance() {
        let problem = open_grid(5, false);
        let heuristic = ManhattanDistance::new();
        assert_eq!(heuristic.evaluate(&"0-0".into(), &"4-4".into(), &problem), 8.);
        assert_eq!(heuristic.evaluate(&"3-1".into(), &"1-4".into(), &problem), 5.);
        assert_eq!(heuristic.evaluate(&"2-2".into(), &"2-2".into(), &problem), 0.);
    }

    #[test]
    fn unresolvable_nodes_are_zero() {
        let problem = open_grid(3, false);
        let heuristic = ManhattanDistance::new();
        assert_eq!(heuristic.evaluate(&"A".into(), &"2-2".into(), &problem), 0.);
        assert_eq!(heuristic.evaluate(&"40-40".into(), &"2-2".into(), &problem), 0.);
        assert_eq!(heuristic.evaluate(&"0-0".into(), &"3-3".into(), &problem), 0.);
    }
}
