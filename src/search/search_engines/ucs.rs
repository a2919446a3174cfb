//! Uniform cost search

use crate::search::{
    search_engines::{SearchEngine, SearchOutcome},
    SearchContext, StablePriorityQueue,
};

/// Expands the node with the lowest cost from the start. Nodes whose cost
/// improves while queued are moved up in the queue.
#[derive(Debug, Default)]
pub struct UCS {}

impl UCS {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for UCS {
    fn search(&mut self, context: &mut SearchContext) -> SearchOutcome {
        let start = context.start().clone();
        let mut queue = StablePriorityQueue::new();

        context.set_g(&start, 0.);
        queue.push(start, 0.);
        context.record_step(None, queue.snapshot());

        while let Some((current, g_value)) = queue.pop() {
            if !context.mark_visited(&current) {
                continue;
            }
            if context.is_goal(&current) {
                return context.succeed(&current, queue.snapshot());
            }

            for (neighbour, cost) in context.neighbours(&current) {
                if context.is_visited(&neighbour) {
                    continue;
                }
                let new_g = g_value + cost;
                if context.g(&neighbour).map_or(true, |old_g| new_g < old_g) {
                    context.relax(&neighbour, &current, new_g);
                    queue.push(neighbour, new_g);
                }
            }
            context.record_step(Some(&current), queue.snapshot());
        }

        context.record_failure(vec![]);
        SearchOutcome::ProvablyUnsolvable
    }
}

#[cfg(test)]
mod tests {
    use crate::problem::{NodeId, Problem};
    use crate::search::{SearchConfig, SearchEngineName, SearchResult};
    use crate::test_utils::*;
    use assert_approx_eq::assert_approx_eq;

    fn run(problem: &Problem) -> SearchResult {
        SearchEngineName::Ucs
            .search(problem, &SearchConfig::default())
            .unwrap()
    }

    #[test]
    fn prefers_cheaper_longer_path() {
        let result = run(&weighted_triangle());
        assert_eq!(
            result.path,
            Some(vec![NodeId::from("A"), NodeId::from("B"), NodeId::from("C")])
        );
        assert_eq!(result.path_cost, Some(6.));
        assert_path_valid(&result);
    }

    #[test]
    fn cost_improvement_updates_parent() {
        // C is first reached directly from A at 10, then through B at 6
        let result = run(&weighted_triangle());
        let after_a = &result.steps[1];
        assert_eq!(after_a.g_values.get(&NodeId::from("C")), Some(&10.));
        assert_eq!(after_a.frontier, vec![NodeId::from("B"), NodeId::from("C")]);
        let after_b = &result.steps[2];
        assert_eq!(after_b.g_values.get(&NodeId::from("C")), Some(&6.));
        assert_eq!(after_b.parent_map.get(&NodeId::from("C")), Some(&NodeId::from("B")));
    }

    #[test]
    fn avoids_heavy_cells() {
        let result = run(&heavy_middle_grid());
        assert_approx_eq!(result.path_cost.unwrap(), 4.);
        assert!(!result.path.unwrap().contains(&NodeId::from("1-1")));
    }

    #[test]
    fn matches_brute_force_optimum() {
        for problem in [weighted_triangle(), cyclic_graph(), weighted_diamond(), heavy_middle_grid()] {
            let result = run(&problem);
            assert_approx_eq!(result.path_cost.unwrap(), brute_force_cost(&problem).unwrap());
            assert_path_valid(&result);
        }
    }
}
