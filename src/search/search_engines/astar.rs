//! A* search

use crate::search::{
    search_engines::{SearchEngine, SearchOutcome},
    SearchContext, StablePriorityQueue,
};

/// Expands the node with the lowest `f = g + h`. Cost improvements on queued
/// nodes update g, f and the parent link. Expanded nodes are final, so the
/// returned path is optimal whenever the heuristic is consistent.
#[derive(Debug, Default)]
pub struct AStar {}

impl AStar {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for AStar {
    fn search(&mut self, context: &mut SearchContext) -> SearchOutcome {
        let start = context.start().clone();
        let mut queue = StablePriorityQueue::new();

        let h_value = context.evaluate_h(&start);
        context.set_g(&start, 0.);
        context.set_f(&start, h_value);
        queue.push(start, h_value);
        context.record_step(None, queue.snapshot());

        while let Some((current, _)) = queue.pop() {
            if !context.mark_visited(&current) {
                continue;
            }
            if context.is_goal(&current) {
                return context.succeed(&current, queue.snapshot());
            }

            let g_value = context.g(&current).unwrap_or(0.);
            for (neighbour, cost) in context.neighbours(&current) {
                if context.is_visited(&neighbour) {
                    continue;
                }
                let tentative_g = g_value + cost;
                if context
                    .g(&neighbour)
                    .map_or(true, |old_g| tentative_g < old_g)
                {
                    context.relax(&neighbour, &current, tentative_g);
                    let f_value = tentative_g + context.evaluate_h(&neighbour);
                    context.set_f(&neighbour, f_value);
                    queue.push(neighbour, f_value);
                }
            }
            context.record_step(Some(&current), queue.snapshot());
        }

        context.record_failure(vec![]);
        SearchOutcome::ProvablyUnsolvable
    }
}
