use crate::problem::{NodeId, Problem};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use strum_macros::{Display, EnumIter};

/// A snapshot of the search taken right after a node was expanded. Every
/// step owns its data, so later changes to the search never leak into
/// recorded steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStep {
    pub step: usize,
    /// The node expanded in this step, [`None`] for the initial snapshot
    /// and for the final snapshot of a failed search.
    pub current_node: Option<NodeId>,
    /// Discovered but unexpanded nodes, the next node to be expanded first.
    pub frontier: Vec<NodeId>,
    pub visited: BTreeSet<NodeId>,
    pub parent_map: BTreeMap<NodeId, NodeId>,
    pub g_values: BTreeMap<NodeId, f64>,
    pub h_values: BTreeMap<NodeId, f64>,
    pub f_values: BTreeMap<NodeId, f64>,
    pub is_complete: bool,
    pub found_goal: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<NodeId>>,
}

/// How a renderer should draw a node at a given step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum NodeState {
    Unvisited,
    Frontier,
    Visited,
    Current,
    Path,
    Start,
    Goal,
    Obstacle,
}

impl SearchStep {
    /// Derive the display state of `node`. When several states apply, the
    /// more specific one wins: obstacle, start, goal, path, current,
    /// frontier, visited.
    pub fn node_state(&self, problem: &Problem, node: &NodeId) -> NodeState {
        if problem.is_obstacle(node) {
            NodeState::Obstacle
        } else if problem.start_id().as_ref() == Some(node) {
            NodeState::Start
        } else if problem.goal_id().as_ref() == Some(node) {
            NodeState::Goal
        } else if self.path.as_ref().is_some_and(|path| path.contains(node)) {
            NodeState::Path
        } else if self.current_node.as_ref() == Some(node) {
            NodeState::Current
        } else if self.frontier.contains(node) {
            NodeState::Frontier
        } else if self.visited.contains(node) {
            NodeState::Visited
        } else {
            NodeState::Unvisited
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use strum::IntoEnumIterator;

    fn step() -> SearchStep {
        SearchStep {
            step: 3,
            current_node: Some("1-1".into()),
            frontier: vec!["1-2".into(), "2-1".into()],
            visited: ["0-0", "0-1", "1-1"].into_iter().map(NodeId::from).collect(),
            parent_map: BTreeMap::new(),
            g_values: BTreeMap::new(),
            h_values: BTreeMap::new(),
            f_values: BTreeMap::new(),
            is_complete: false,
            found_goal: false,
            path: None,
        }
    }

    #[test]
    fn node_states_by_precedence() {
        let problem = walled_off_goal();
        let step = step();
        assert_eq!(step.node_state(&problem, &"0-0".into()), NodeState::Start);
        assert_eq!(step.node_state(&problem, &"1-4".into()), NodeState::Goal);
        assert_eq!(step.node_state(&problem, &"1-3".into()), NodeState::Obstacle);
        assert_eq!(step.node_state(&problem, &"1-1".into()), NodeState::Current);
        assert_eq!(step.node_state(&problem, &"1-2".into()), NodeState::Frontier);
        assert_eq!(step.node_state(&problem, &"0-1".into()), NodeState::Visited);
        assert_eq!(step.node_state(&problem, &"2-2".into()), NodeState::Unvisited);
    }

    #[test]
    fn path_overrides_search_states() {
        let problem = walled_off_goal();
        let mut step = step();
        step.path = Some(vec!["0-0".into(), "0-1".into(), "1-1".into()]);
        assert_eq!(step.node_state(&problem, &"0-1".into()), NodeState::Path);
        assert_eq!(step.node_state(&problem, &"1-1".into()), NodeState::Path);
        assert_eq!(step.node_state(&problem, &"0-0".into()), NodeState::Start);
    }

    #[test]
    fn eight_states() {
        assert_eq!(NodeState::iter().count(), 8);
        assert_eq!(NodeState::Unvisited.to_string(), "unvisited");
    }

    #[test]
    fn serialises_camel_case() {
        let json = serde_json::to_string(&step()).unwrap();
        assert!(json.contains("\"currentNode\":\"1-1\""));
        assert!(json.contains("\"foundGoal\":false"));
        assert!(!json.contains("\"path\""));
    }
}
