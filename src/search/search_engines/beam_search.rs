//! Beam search

use crate::problem::NodeId;
use crate::search::{
    search_engines::{SearchEngine, SearchOutcome},
    SearchContext,
};
use tracing::debug;

/// Expands a whole layer (the beam) at a time. The unvisited neighbours of
/// all beam members are pooled, and only the `width` with the lowest
/// heuristic value form the next beam. Pruning makes it incomplete.
#[derive(Debug)]
pub struct BeamSearch {
    width: usize,
}

impl BeamSearch {
    pub fn new(width: usize) -> Self {
        Self { width }
    }
}

/// Unexpanded beam members followed by the candidates gathered so far.
fn snapshot(pending: &[NodeId], candidates: &[(NodeId, f64)]) -> Vec<NodeId> {
    pending
        .iter()
        .cloned()
        .chain(candidates.iter().map(|(node, _)| node.clone()))
        .collect()
}

impl SearchEngine for BeamSearch {
    fn search(&mut self, context: &mut SearchContext) -> SearchOutcome {
        let start = context.start().clone();
        context.set_g(&start, 0.);
        context.evaluate_h(&start);
        let mut beam = vec![start];
        context.record_step(None, beam.clone());

        let mut layer = 0;
        loop {
            let mut candidates: Vec<(NodeId, f64)> = vec![];
            for (index, node) in beam.iter().enumerate() {
                if !context.mark_visited(node) {
                    continue;
                }
                if context.is_goal(node) {
                    let frontier = snapshot(&beam[index + 1..], &candidates);
                    return context.succeed_with_path_cost(node, frontier);
                }

                let g_value = context.g(node).unwrap_or(0.);
                for (neighbour, cost) in context.neighbours(node) {
                    if context.is_visited(&neighbour)
                        || beam.contains(&neighbour)
                        || candidates.iter().any(|(candidate, _)| candidate == &neighbour)
                    {
                        continue;
                    }
                    context.relax(&neighbour, node, g_value + cost);
                    let h_value = context.evaluate_h(&neighbour);
                    candidates.push((neighbour, h_value));
                }
                context.record_step(Some(node), snapshot(&beam[index + 1..], &candidates));
            }

            if candidates.is_empty() {
                debug!(layer, "beam has no successors");
                context.record_failure(vec![]);
                return SearchOutcome::IncompleteUnsolvable;
            }

            // Stable, so equal estimates keep discovery order
            candidates.sort_by(|a, b| a.1.total_cmp(&b.1));
            let pruned = candidates.len().saturating_sub(self.width);
            candidates.truncate(self.width);
            layer += 1;
            debug!(layer, kept = candidates.len(), pruned);
            beam = candidates.into_iter().map(|(node, _)| node).collect();
        }
    }
}
