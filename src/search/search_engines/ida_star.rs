//! Iterative deepening A*

use crate::problem::NodeId;
use crate::search::{
    search_engines::{SearchEngine, SearchOutcome},
    SearchContext,
};
use tracing::debug;

/// Repeated depth-first probes bounded by f = g + h. Each probe that fails
/// raises the bound to the smallest f that exceeded it. Cycles are avoided
/// by never stepping onto a node already on the current path, so nodes may
/// be expanded again in later probes.
#[derive(Debug, Default)]
pub struct IDAStar {}

impl IDAStar {
    pub fn new() -> Self {
        Self {}
    }
}

enum Probe {
    Found(NodeId),
    /// Smallest f-value beyond the bound, infinite if nothing was cut off
    Exceeded(f64),
}

/// Depth first probe from the last node of `path`, which was reached at cost
/// `g_value`. On success `path` is left holding the start to goal path.
fn probe(context: &mut SearchContext, path: &mut Vec<NodeId>, g_value: f64, bound: f64) -> Probe {
    let Some(node) = path.last().cloned() else {
        return Probe::Exceeded(f64::INFINITY);
    };
    let f_value = g_value + context.evaluate_h(&node);
    context.set_g(&node, g_value);
    context.set_f(&node, f_value);
    if f_value > bound {
        return Probe::Exceeded(f_value);
    }

    context.mark_visited(&node);
    if context.is_goal(&node) {
        return Probe::Found(node);
    }
    context.record_step(Some(&node), path.clone());

    let mut next_bound = f64::INFINITY;
    for (neighbour, cost) in context.neighbours(&node) {
        if path.contains(&neighbour) {
            continue;
        }
        context.set_parent(&neighbour, &node);
        path.push(neighbour);
        match probe(context, path, g_value + cost, bound) {
            found @ Probe::Found(_) => return found,
            Probe::Exceeded(f_value) => next_bound = next_bound.min(f_value),
        }
        path.pop();
    }
    Probe::Exceeded(next_bound)
}

impl SearchEngine for IDAStar {
    fn search(&mut self, context: &mut SearchContext) -> SearchOutcome {
        let start = context.start().clone();
        let mut bound = context.evaluate_h(&start);
        context.set_g(&start, 0.);
        context.set_f(&start, bound);
        context.record_step(None, vec![start.clone()]);

        let mut path = vec![start];
        loop {
            debug!(bound, "starting probe");
            match probe(context, &mut path, 0., bound) {
                Probe::Found(goal) => return context.succeed(&goal, path),
                Probe::Exceeded(next_bound) if next_bound.is_finite() => bound = next_bound,
                Probe::Exceeded(_) => {
                    debug!(bound, "nothing beyond bound");
                    context.record_failure(vec![]);
                    return SearchOutcome::ProvablyUnsolvable;
                }
            }
        }
    }
}
