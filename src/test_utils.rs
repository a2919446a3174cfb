use crate::problem::{GraphProblem, GridPosition, GridProblem, NodeId, Problem};
use crate::search::{neighbours, validate_path, SearchResult};
use assert_approx_eq::assert_approx_eq;
use petgraph::{algo::dijkstra, graph::DiGraph, visit::EdgeRef};
use std::collections::HashMap;

/// Obstacle free `size` x `size` grid from the top left to the bottom right
/// corner.
pub fn open_grid(size: usize, allow_diagonal: bool) -> Problem {
    GridProblem::new(
        size,
        size,
        GridPosition::new(0, 0),
        GridPosition::new(size - 1, size - 1),
        allow_diagonal,
    )
    .into()
}

/// 3 x 5 grid whose fourth column is a wall, cutting the goal at 1-4 off
/// from the nine cells around the start.
pub fn walled_off_goal() -> Problem {
    let mut grid = GridProblem::new(3, 5, GridPosition::new(0, 0), GridPosition::new(1, 4), false);
    for row in 0..3 {
        grid.set_obstacle(row, 3, true);
    }
    grid.into()
}

/// 3 x 3 grid where entering the centre costs 5.
pub fn heavy_middle_grid() -> Problem {
    let mut grid = GridProblem::new(3, 3, GridPosition::new(0, 0), GridPosition::new(2, 2), false);
    grid.set_weight(1, 1, 5.);
    grid.into()
}

/// A to C directly costs 10, going through B costs 6.
pub fn weighted_triangle() -> Problem {
    let mut graph = GraphProblem::new(false);
    graph.add_node("A", 0., 0.);
    graph.add_node("B", 200., 0.);
    graph.add_node("C", 200., 50.);
    graph.add_edge("A", "B", 5.);
    graph.add_edge("B", "C", 1.);
    graph.add_edge("A", "C", 10.);
    graph.set_start("A");
    graph.set_goal("C");
    graph.into()
}

/// A -> B -> C, only traversable forwards.
pub fn directed_chain() -> Problem {
    let mut graph = GraphProblem::new(true);
    graph.add_node("A", 0., 0.);
    graph.add_node("B", 50., 0.);
    graph.add_node("C", 100., 0.);
    graph.add_edge("A", "B", 1.);
    graph.add_edge("B", "C", 1.);
    graph.set_start("A");
    graph.set_goal("C");
    graph.into()
}

/// Undirected graph with a cycle through the start. The cheapest path is
/// S, B, G at cost 4.
pub fn cyclic_graph() -> Problem {
    let mut graph = GraphProblem::new(false);
    graph.add_node("G", 0., 0.);
    graph.add_node("S", 100., 0.);
    graph.add_node("A", 100., 100.);
    graph.add_node("B", 50., 0.);
    graph.add_edge("S", "A", 2.);
    graph.add_edge("A", "B", 2.);
    graph.add_edge("B", "S", 2.);
    graph.add_edge("A", "G", 5.);
    graph.add_edge("B", "G", 2.);
    graph.set_start("S");
    graph.set_goal("G");
    graph.into()
}

/// Seven node weighted graph, every node within 50 units of the goal so the
/// scaled distance never exceeds a single edge. The cheapest path is
/// S, A, B, C, D, G at cost 8.
pub fn weighted_diamond() -> Problem {
    let mut graph = GraphProblem::new(false);
    graph.add_node("S", 0., 50.);
    graph.add_node("A", 45., 20.);
    graph.add_node("B", 40., 0.);
    graph.add_node("C", 30., 20.);
    graph.add_node("D", 20., 0.);
    graph.add_node("E", 0., 30.);
    graph.add_node("G", 0., 0.);
    for (from, to, weight) in [
        ("S", "A", 2.),
        ("S", "B", 5.),
        ("A", "B", 1.),
        ("A", "C", 6.),
        ("B", "C", 2.),
        ("B", "D", 7.),
        ("C", "D", 1.),
        ("C", "G", 8.),
        ("D", "G", 2.),
        ("A", "E", 9.),
        ("E", "G", 1.),
    ] {
        graph.add_edge(from, to, weight);
    }
    graph.set_start("S");
    graph.set_goal("G");
    graph.into()
}

/// S branches to A and B. Both children of A lie closer to the goal than
/// either child of B, so a width 2 beam keeps A1 and A2 and drops B1 and
/// B2 entirely.
pub fn lopsided_beam_graph() -> Problem {
    let mut graph = GraphProblem::new(false);
    for (id, x) in [
        ("S", 500.),
        ("A", 300.),
        ("B", 310.),
        ("A1", 100.),
        ("A2", 120.),
        ("B1", 250.),
        ("B2", 260.),
        ("G", 0.),
    ] {
        graph.add_node(id, x, 0.);
    }
    for (from, to) in [
        ("S", "A"),
        ("S", "B"),
        ("A", "A1"),
        ("A", "A2"),
        ("B", "B1"),
        ("B", "B2"),
        ("A1", "G"),
    ] {
        graph.add_edge(from, to, 1.);
    }
    graph.set_start("S");
    graph.set_goal("G");
    graph.into()
}

/// Assert that a successful result carries a valid start to goal path whose
/// summed step costs match the reported cost.
pub fn assert_path_valid(result: &SearchResult) {
    let path = result.path.as_ref().expect("result should have a path");
    let start = result.problem.start_id().unwrap();
    let goal = result.problem.goal_id().unwrap();
    let cost = validate_path(&result.problem, path, &start, &goal).unwrap();
    assert_approx_eq!(cost, result.path_cost.unwrap());
}

/// Optimal path cost computed independently with petgraph's dijkstra over
/// the graph induced by the neighbour resolver.
pub fn brute_force_cost(problem: &Problem) -> Option<f64> {
    let start = problem.start_id()?;
    let goal = problem.goal_id()?;

    let mut graph = DiGraph::<NodeId, f64>::new();
    let mut indices = HashMap::new();
    indices.insert(start.clone(), graph.add_node(start.clone()));
    let mut queue = vec![start.clone()];
    while let Some(node) = queue.pop() {
        let from = indices[&node];
        for (neighbour, cost) in neighbours(problem, &node) {
            let to = match indices.get(&neighbour) {
                Some(index) => *index,
                None => {
                    let index = graph.add_node(neighbour.clone());
                    indices.insert(neighbour.clone(), index);
                    queue.push(neighbour);
                    index
                }
            };
            graph.add_edge(from, to, cost);
        }
    }

    let goal = *indices.get(&goal)?;
    let costs = dijkstra(&graph, indices[&start], Some(goal), |edge| *edge.weight());
    costs.get(&goal).copied()
}
