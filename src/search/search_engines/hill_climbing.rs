//! Steepest ascent hill climbing

use crate::problem::NodeId;
use crate::search::{
    search_engines::{SearchEngine, SearchOutcome},
    SearchContext,
};
use tracing::debug;

/// Keeps a single current node and moves to the unvisited neighbour with the
/// lowest heuristic value, as long as that is strictly lower than the
/// current one. Stops at the first local minimum, so it can fail on solvable
/// problems.
#[derive(Debug, Default)]
pub struct HillClimbing {}

impl HillClimbing {
    pub fn new() -> Self {
        Self {}
    }
}

struct Move {
    node: NodeId,
    cost: f64,
    h_value: f64,
}

impl SearchEngine for HillClimbing {
    fn search(&mut self, context: &mut SearchContext) -> SearchOutcome {
        let mut current = context.start().clone();
        context.set_g(&current, 0.);
        context.evaluate_h(&current);
        context.record_step(None, vec![current.clone()]);

        loop {
            context.mark_visited(&current);
            if context.is_goal(&current) {
                return context.succeed_with_path_cost(&current, vec![]);
            }

            let current_h = context.evaluate_h(&current);
            let mut candidates = vec![];
            let mut best: Option<Move> = None;
            for (neighbour, cost) in context.neighbours(&current) {
                if context.is_visited(&neighbour) {
                    continue;
                }
                let h_value = context.evaluate_h(&neighbour);
                if best.as_ref().map_or(true, |best| h_value < best.h_value) {
                    best = Some(Move {
                        node: neighbour.clone(),
                        cost,
                        h_value,
                    });
                }
                candidates.push(neighbour);
            }
            context.record_step(Some(&current), candidates);

            match best {
                Some(next) if next.h_value < current_h => {
                    let g_value = context.g(&current).unwrap_or(0.);
                    context.relax(&next.node, &current, g_value + next.cost);
                    current = next.node;
                }
                _ => {
                    debug!(node = %current, h_value = current_h, "no improving neighbour");
                    context.record_failure(vec![]);
                    return SearchOutcome::IncompleteUnsolvable;
                }
            }
        }
    }
}
