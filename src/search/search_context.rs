use crate::problem::{NodeId, Problem};
use crate::search::{
    neighbours, path_cost, Heuristic, Neighbours, SearchOutcome, SearchStatistics, SearchStep,
};
use std::collections::{BTreeMap, BTreeSet};
use tracing::trace;

/// Everything a single search run owns: the working maps shared by all
/// engines and the steps recorded so far. Engines receive it by mutable
/// reference and never hold state of their own between runs.
#[derive(Debug)]
pub struct SearchContext<'a> {
    problem: &'a Problem,
    heuristic: &'a dyn Heuristic,
    start: NodeId,
    goal: NodeId,
    visited: BTreeSet<NodeId>,
    parents: BTreeMap<NodeId, NodeId>,
    g_values: BTreeMap<NodeId, f64>,
    h_values: BTreeMap<NodeId, f64>,
    f_values: BTreeMap<NodeId, f64>,
    steps: Vec<SearchStep>,
    statistics: SearchStatistics,
}

impl<'a> SearchContext<'a> {
    pub fn new(
        problem: &'a Problem,
        heuristic: &'a dyn Heuristic,
        start: NodeId,
        goal: NodeId,
    ) -> Self {
        Self {
            problem,
            heuristic,
            start,
            goal,
            visited: BTreeSet::new(),
            parents: BTreeMap::new(),
            g_values: BTreeMap::new(),
            h_values: BTreeMap::new(),
            f_values: BTreeMap::new(),
            steps: vec![],
            statistics: SearchStatistics::new(),
        }
    }

    pub fn problem(&self) -> &'a Problem {
        self.problem
    }

    pub fn start(&self) -> &NodeId {
        &self.start
    }

    pub fn goal(&self) -> &NodeId {
        &self.goal
    }

    pub fn is_goal(&self, node: &NodeId) -> bool {
        node == &self.goal
    }

    pub fn neighbours(&mut self, node: &NodeId) -> Neighbours {
        let result = neighbours(self.problem, node);
        self.statistics.increment_generated_nodes(result.len());
        result
    }

    /// Heuristic estimate from `node` to the goal.
    pub fn estimate(&self, node: &NodeId) -> f64 {
        self.heuristic.evaluate(node, &self.goal, self.problem)
    }

    pub fn is_visited(&self, node: &NodeId) -> bool {
        self.visited.contains(node)
    }

    /// Mark `node` as expanded. Returns false if it already was.
    pub fn mark_visited(&mut self, node: &NodeId) -> bool {
        if !self.visited.insert(node.clone()) {
            return false;
        }
        self.statistics.increment_expanded_nodes();
        trace!(node = %node, "expanding");
        true
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn set_parent(&mut self, node: &NodeId, parent: &NodeId) {
        self.parents.insert(node.clone(), parent.clone());
    }

    pub fn g(&self, node: &NodeId) -> Option<f64> {
        self.g_values.get(node).copied()
    }

    pub fn h(&self, node: &NodeId) -> Option<f64> {
        self.h_values.get(node).copied()
    }

    pub fn set_g(&mut self, node: &NodeId, g: f64) {
        self.g_values.insert(node.clone(), g);
    }

    /// Evaluate the heuristic for `node` once and remember it.
    pub fn evaluate_h(&mut self, node: &NodeId) -> f64 {
        if let Some(h) = self.h(node) {
            return h;
        }
        let h = self.estimate(node);
        self.h_values.insert(node.clone(), h);
        h
    }

    pub fn set_f(&mut self, node: &NodeId, f: f64) {
        self.f_values.insert(node.clone(), f);
    }

    /// Record that `node` is now reached through `parent` at cost `g`.
    /// Counts as a reopening if the node already had a cost.
    pub fn relax(&mut self, node: &NodeId, parent: &NodeId, g: f64) {
        if self.g_values.contains_key(node) {
            self.statistics.increment_reopened_nodes();
        }
        self.set_parent(node, parent);
        self.set_g(node, g);
    }

    /// Walk the parent links back from `node` to the start.
    pub fn extract_path(&self, node: &NodeId) -> Vec<NodeId> {
        let mut path = vec![node.clone()];
        let mut current = node;
        while let Some(parent) = self.parents.get(current) {
            // Parent links never form cycles, bail out rather than spin if
            // that were ever violated.
            if path.len() > self.parents.len() {
                break;
            }
            path.push(parent.clone());
            current = parent;
        }
        path.reverse();
        path
    }

    /// Snapshot the current state as an intermediate step.
    pub fn record_step(&mut self, current: Option<&NodeId>, frontier: Vec<NodeId>) {
        self.push_step(current, frontier, false, false, None);
    }

    /// Snapshot the final step of a successful search.
    pub fn record_success(&mut self, current: &NodeId, frontier: Vec<NodeId>, path: Vec<NodeId>) {
        self.push_step(Some(current), frontier, true, true, Some(path));
    }

    /// Snapshot the final step of a search that gave up.
    pub fn record_failure(&mut self, frontier: Vec<NodeId>) {
        self.push_step(None, frontier, true, false, None);
    }

    fn push_step(
        &mut self,
        current: Option<&NodeId>,
        frontier: Vec<NodeId>,
        is_complete: bool,
        found_goal: bool,
        path: Option<Vec<NodeId>>,
    ) {
        self.statistics.increment_recorded_steps();
        self.steps.push(SearchStep {
            step: self.steps.len(),
            current_node: current.cloned(),
            frontier,
            visited: self.visited.clone(),
            parent_map: self.parents.clone(),
            g_values: self.g_values.clone(),
            h_values: self.h_values.clone(),
            f_values: self.f_values.clone(),
            is_complete,
            found_goal,
            path,
        });
    }

    /// Finish successfully at `node`, using its g-value as the path cost.
    pub fn succeed(&mut self, node: &NodeId, frontier: Vec<NodeId>) -> SearchOutcome {
        let path = self.extract_path(node);
        let cost = self.g(node).unwrap_or(0.);
        self.record_success(node, frontier, path.clone());
        SearchOutcome::Success { path, cost }
    }

    /// Finish successfully at `node`, summing the step costs along the path.
    /// For engines whose g-values are not guaranteed to describe the path.
    pub fn succeed_with_path_cost(
        &mut self,
        node: &NodeId,
        frontier: Vec<NodeId>,
    ) -> SearchOutcome {
        let path = self.extract_path(node);
        let cost = path_cost(self.problem, &path);
        debug_assert!(cost.is_some(), "extracted path must follow neighbours");
        self.record_success(node, frontier, path.clone());
        SearchOutcome::Success {
            path,
            cost: cost.unwrap_or(0.),
        }
    }

    pub fn steps(&self) -> &[SearchStep] {
        &self.steps
    }

    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Hand over the recorded steps, ending the run.
    pub fn into_steps(self) -> Vec<SearchStep> {
        self.steps
    }
}
