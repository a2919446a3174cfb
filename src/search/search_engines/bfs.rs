//! Breadth first search

use crate::problem::NodeId;
use crate::search::{
    search_engines::{SearchEngine, SearchOutcome},
    SearchContext,
};
use std::collections::{HashSet, VecDeque};

/// Expands nodes in the order they were discovered. A node is queued at most
/// once, so the first path found has the fewest moves.
#[derive(Debug, Default)]
pub struct BFS {}

impl BFS {
    pub fn new() -> Self {
        Self {}
    }
}

fn snapshot(queue: &VecDeque<NodeId>) -> Vec<NodeId> {
    queue.iter().cloned().collect()
}

impl SearchEngine for BFS {
    fn search(&mut self, context: &mut SearchContext) -> SearchOutcome {
        let start = context.start().clone();
        let mut queue = VecDeque::new();
        // Nodes that were ever queued, which covers both visited nodes and
        // the frontier
        let mut discovered = HashSet::new();

        context.set_g(&start, 0.);
        discovered.insert(start.clone());
        queue.push_back(start);
        context.record_step(None, snapshot(&queue));

        while let Some(current) = queue.pop_front() {
            if !context.mark_visited(&current) {
                continue;
            }
            if context.is_goal(&current) {
                return context.succeed(&current, snapshot(&queue));
            }

            let g_value = context.g(&current).unwrap_or(0.);
            for (neighbour, cost) in context.neighbours(&current) {
                if discovered.insert(neighbour.clone()) {
                    context.relax(&neighbour, &current, g_value + cost);
                    queue.push_back(neighbour);
                }
            }
            context.record_step(Some(&current), snapshot(&queue));
        }

        context.record_failure(vec![]);
        SearchOutcome::ProvablyUnsolvable
    }
}
