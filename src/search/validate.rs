use crate::problem::{NodeId, Problem};
use crate::search::step_cost;
use itertools::Itertools;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    #[error("path is empty")]
    Empty,
    #[error("path starts at {actual}, expected {expected}")]
    WrongStart { expected: NodeId, actual: NodeId },
    #[error("path ends at {actual}, expected {expected}")]
    WrongEnd { expected: NodeId, actual: NodeId },
    #[error("{to} is not a neighbour of {from}")]
    NotAdjacent { from: NodeId, to: NodeId },
    #[error("node {0} appears more than once")]
    RepeatedNode(NodeId),
}

/// Sum of step costs along `path`, or [`None`] if two consecutive nodes are
/// not neighbours.
pub fn path_cost(problem: &Problem, path: &[NodeId]) -> Option<f64> {
    path.iter()
        .tuple_windows()
        .map(|(from, to)| step_cost(problem, from, to))
        .sum()
}

/// Check that `path` is a simple path from `start` to `goal` where every
/// move is allowed by the problem, and return its cost.
pub fn validate_path(
    problem: &Problem,
    path: &[NodeId],
    start: &NodeId,
    goal: &NodeId,
) -> Result<f64, PathError> {
    let (first, last) = match (path.first(), path.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(PathError::Empty),
    };
    if first != start {
        return Err(PathError::WrongStart {
            expected: start.clone(),
            actual: first.clone(),
        });
    }
    if last != goal {
        return Err(PathError::WrongEnd {
            expected: goal.clone(),
            actual: last.clone(),
        });
    }

    let mut seen = HashSet::with_capacity(path.len());
    if let Some(repeated) = path.iter().find(|node| !seen.insert(*node)) {
        return Err(PathError::RepeatedNode(repeated.clone()));
    }

    let mut cost = 0.;
    for (from, to) in path.iter().tuple_windows() {
        cost += step_cost(problem, from, to).ok_or_else(|| PathError::NotAdjacent {
            from: from.clone(),
            to: to.clone(),
        })?;
    }
    Ok(cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    fn path(ids: &[&str]) -> Vec<NodeId> {
        ids.iter().map(|&id| NodeId::from(id)).collect()
    }

    #[test]
    fn valid_path_returns_cost() {
        let problem = weighted_triangle();
        let cost = validate_path(&problem, &path(&["A", "B", "C"]), &"A".into(), &"C".into());
        assert_eq!(cost, Ok(6.));
        assert_eq!(path_cost(&problem, &path(&["A", "C"])), Some(10.));
    }

    #[test]
    fn single_node_path_costs_nothing() {
        let problem = weighted_triangle();
        assert_eq!(
            validate_path(&problem, &path(&["A"]), &"A".into(), &"A".into()),
            Ok(0.)
        );
        assert_eq!(path_cost(&problem, &path(&["A"])), Some(0.));
    }

    #[test]
    fn rejects_bad_paths() {
        let problem = open_grid(3, false);
        let (start, goal) = (NodeId::from("0-0"), NodeId::from("2-2"));
        assert_eq!(
            validate_path(&problem, &[], &start, &goal),
            Err(PathError::Empty)
        );
        assert!(matches!(
            validate_path(&problem, &path(&["0-1", "2-2"]), &start, &goal),
            Err(PathError::WrongStart { .. })
        ));
        assert!(matches!(
            validate_path(&problem, &path(&["0-0", "0-1"]), &start, &goal),
            Err(PathError::WrongEnd { .. })
        ));
        assert!(matches!(
            validate_path(&problem, &path(&["0-0", "1-1", "2-2"]), &start, &goal),
            Err(PathError::NotAdjacent { .. })
        ));
        assert!(matches!(
            validate_path(
                &problem,
                &path(&["0-0", "0-1", "0-0", "1-0", "2-0", "2-1", "2-2"]),
                &start,
                &goal
            ),
            Err(PathError::RepeatedNode(_))
        ));
        assert_eq!(path_cost(&problem, &path(&["0-0", "2-2"])), None);
    }
}
