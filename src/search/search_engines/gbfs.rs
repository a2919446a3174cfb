//! This module implements the greedy best-first search algorithm.

use crate::search::{
    search_engines::{SearchEngine, SearchOutcome},
    SearchContext, StablePriorityQueue,
};

/// Greedy best-first search, always expanding the node that looks closest to
/// the goal. Nodes are queued once, when first discovered.
#[derive(Debug, Default)]
pub struct GBFS {}

impl GBFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for GBFS {
    fn search(&mut self, context: &mut SearchContext) -> SearchOutcome {
        let start = context.start().clone();
        let mut queue = StablePriorityQueue::new();

        context.set_g(&start, 0.);
        let h_value = context.evaluate_h(&start);
        queue.push(start, h_value);
        context.record_step(None, queue.snapshot());

        while let Some((current, _)) = queue.pop() {
            if !context.mark_visited(&current) {
                continue;
            }
            if context.is_goal(&current) {
                return context.succeed_with_path_cost(&current, queue.snapshot());
            }

            let g_value = context.g(&current).unwrap_or(0.);
            for (neighbour, cost) in context.neighbours(&current) {
                if context.is_visited(&neighbour) || queue.contains(&neighbour) {
                    continue;
                }
                context.relax(&neighbour, &current, g_value + cost);
                let h_value = context.evaluate_h(&neighbour);
                queue.push(neighbour, h_value);
            }
            context.record_step(Some(&current), queue.snapshot());
        }

        context.record_failure(vec![]);
        SearchOutcome::ProvablyUnsolvable
    }
}
