use crate::problem::{NodeId, ProblemError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub is_start: bool,
    #[serde(default)]
    pub is_goal: bool,
    /// Heuristic value supplied with the problem, only used when the search
    /// is configured to prefer it over the euclidean estimate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heuristic: Option<f64>,
}

impl GraphNode {
    pub fn new(id: impl Into<NodeId>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            label: None,
            is_start: false,
            is_goal: false,
            heuristic: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphEdge {
    pub from: NodeId,
    pub to: NodeId,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    1.
}

/// An explicit graph of positioned nodes connected by weighted edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphProblem {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    #[serde(default)]
    pub start_node_id: Option<NodeId>,
    #[serde(default)]
    pub goal_node_id: Option<NodeId>,
    #[serde(default)]
    pub directed: bool,
}

impl GraphProblem {
    pub fn new(directed: bool) -> Self {
        Self {
            nodes: vec![],
            edges: vec![],
            start_node_id: None,
            goal_node_id: None,
            directed,
        }
    }

    pub fn add_node(&mut self, id: impl Into<NodeId>, x: f64, y: f64) -> &mut GraphNode {
        self.nodes.push(GraphNode::new(id, x, y));
        let last = self.nodes.len() - 1;
        &mut self.nodes[last]
    }

    pub fn add_edge(&mut self, from: impl Into<NodeId>, to: impl Into<NodeId>, weight: f64) {
        self.edges.push(GraphEdge {
            from: from.into(),
            to: to.into(),
            weight,
        });
    }

    pub fn set_start(&mut self, id: impl Into<NodeId>) {
        let id = id.into();
        for node in self.nodes.iter_mut() {
            node.is_start = node.id == id;
        }
        self.start_node_id = Some(id);
    }

    pub fn set_goal(&mut self, id: impl Into<NodeId>) {
        let id = id.into();
        for node in self.nodes.iter_mut() {
            node.is_goal = node.id == id;
        }
        self.goal_node_id = Some(id);
    }

    pub fn node(&self, id: &NodeId) -> Option<&GraphNode> {
        self.nodes.iter().find(|node| &node.id == id)
    }

    pub fn validate(&self) -> Result<(), ProblemError> {
        let mut ids = HashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if !ids.insert(&node.id) {
                return Err(ProblemError::DuplicateNode(node.id.clone()));
            }
        }

        for edge in &self.edges {
            for endpoint in [&edge.from, &edge.to] {
                if !ids.contains(endpoint) {
                    return Err(ProblemError::UnknownEdgeEndpoint {
                        from: edge.from.clone(),
                        to: edge.to.clone(),
                        missing: endpoint.clone(),
                    });
                }
            }
            if !(edge.weight >= 1. && edge.weight.is_finite()) {
                return Err(ProblemError::InvalidWeight {
                    location: format!("{}->{}", edge.from, edge.to),
                    weight: edge.weight,
                });
            }
        }

        let start = self.start_node_id.as_ref().ok_or(ProblemError::MissingStart)?;
        let goal = self.goal_node_id.as_ref().ok_or(ProblemError::MissingGoal)?;
        for (role, id) in [("start", start), ("goal", goal)] {
            if !ids.contains(id) {
                return Err(ProblemError::UnknownTerminal {
                    role,
                    node: id.clone(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> GraphProblem {
        let mut graph = GraphProblem::new(false);
        graph.add_node("A", 0., 0.);
        graph.add_node("B", 100., 0.);
        graph.add_node("C", 50., 80.);
        graph.add_edge("A", "B", 5.);
        graph.add_edge("B", "C", 1.);
        graph.set_start("A");
        graph.set_goal("C");
        graph
    }

    #[test]
    fn builders_set_flags() {
        let graph = triangle();
        assert!(graph.node(&"A".into()).unwrap().is_start);
        assert!(graph.node(&"C".into()).unwrap().is_goal);
        assert!(!graph.node(&"B".into()).unwrap().is_goal);
        assert!(graph.validate().is_ok());
    }

    #[test]
    fn validate_rejects_dangling_edge() {
        let mut graph = triangle();
        graph.add_edge("C", "D", 1.);
        match graph.validate() {
            Err(ProblemError::UnknownEdgeEndpoint { from, to, missing }) => {
                assert_eq!(from.as_str(), "C");
                assert_eq!(to.as_str(), "D");
                assert_eq!(missing.as_str(), "D");
            }
            other => panic!("unexpected validation result: {:?}", other),
        }
    }

    #[test]
    fn validate_rejects_duplicate_node() {
        let mut graph = triangle();
        graph.add_node("B", 1., 1.);
        assert!(matches!(
            graph.validate(),
            Err(ProblemError::DuplicateNode(id)) if id.as_str() == "B"
        ));
    }

    #[test]
    fn validate_rejects_unknown_goal() {
        let mut graph = triangle();
        graph.goal_node_id = Some("Z".into());
        assert!(matches!(
            graph.validate(),
            Err(ProblemError::UnknownTerminal { role: "goal", .. })
        ));
    }

    #[test]
    fn deserialises_camel_case() {
        let json = r#"{
            "nodes": [{"id": "A", "x": 0, "y": 0, "label": "home"}, {"id": "B", "x": 3, "y": 4}],
            "edges": [{"from": "A", "to": "B"}],
            "startNodeId": "A", "goalNodeId": "B", "directed": true
        }"#;
        let graph: GraphProblem = serde_json::from_str(json).unwrap();
        assert!(graph.directed);
        assert_eq!(graph.edges[0].weight, 1.);
        assert_eq!(graph.nodes[0].label.as_deref(), Some("home"));
        assert_eq!(graph.goal_node_id, Some(NodeId::from("B")));
    }
}
