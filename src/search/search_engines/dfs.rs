//! Depth first search

use crate::problem::NodeId;
use crate::search::{
    search_engines::{SearchEngine, SearchOutcome},
    SearchContext,
};

/// Always expands the most recently discovered node. Neighbours are pushed
/// in reverse so the first one listed by the resolver is explored first.
#[derive(Debug, Default)]
pub struct DFS {}

impl DFS {
    pub fn new() -> Self {
        Self {}
    }
}

/// The stack from top to bottom.
fn snapshot(stack: &[NodeId]) -> Vec<NodeId> {
    stack.iter().rev().cloned().collect()
}

impl SearchEngine for DFS {
    fn search(&mut self, context: &mut SearchContext) -> SearchOutcome {
        let start = context.start().clone();
        let mut stack = vec![];

        context.set_g(&start, 0.);
        stack.push(start);
        context.record_step(None, snapshot(&stack));

        while let Some(current) = stack.pop() {
            if !context.mark_visited(&current) {
                continue;
            }
            if context.is_goal(&current) {
                return context.succeed(&current, snapshot(&stack));
            }

            let g_value = context.g(&current).unwrap_or(0.);
            for (neighbour, cost) in context.neighbours(&current).into_iter().rev() {
                if context.is_visited(&neighbour) {
                    continue;
                }
                // A node discovered again moves to the top instead of being
                // stacked twice, and is now reached through `current`.
                stack.retain(|node| node != &neighbour);
                context.relax(&neighbour, &current, g_value + cost);
                stack.push(neighbour);
            }
            context.record_step(Some(&current), snapshot(&stack));
        }

        context.record_failure(vec![]);
        SearchOutcome::ProvablyUnsolvable
    }
}
