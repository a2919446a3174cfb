//! Successor generation for both problem shapes. The order in which
//! neighbours are produced is part of the contract, every engine breaks ties
//! by it.

use crate::problem::{GraphProblem, GridProblem, NodeId, Problem};
use smallvec::SmallVec;
use std::f64::consts::SQRT_2;

/// A neighbour together with the cost of moving onto it.
pub type Neighbours = SmallVec<[(NodeId, f64); 8]>;

/// Up, right, down, left.
const ORTHOGONAL_OFFSETS: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];
/// Up-right, down-right, down-left, up-left.
const DIAGONAL_OFFSETS: [(isize, isize); 4] = [(-1, 1), (1, 1), (1, -1), (-1, -1)];

/// All nodes reachable from `node` in one move, with the cost of that move.
/// Unknown nodes have no neighbours.
pub fn neighbours(problem: &Problem, node: &NodeId) -> Neighbours {
    match problem {
        Problem::Grid(grid) => grid_neighbours(grid, node),
        Problem::Graph(graph) => graph_neighbours(graph, node),
    }
}

/// Cost of moving directly from `from` to `to`, or [`None`] if `to` is not a
/// neighbour of `from`. When several edges connect the two, the first one
/// listed wins, matching what the engines see.
pub fn step_cost(problem: &Problem, from: &NodeId, to: &NodeId) -> Option<f64> {
    neighbours(problem, from)
        .into_iter()
        .find(|(neighbour, _)| neighbour == to)
        .map(|(_, cost)| cost)
}

fn grid_neighbours(grid: &GridProblem, node: &NodeId) -> Neighbours {
    let mut result = Neighbours::new();
    let Some((row, col)) = node.to_coords() else {
        return result;
    };
    if grid.cell(row, col).is_none() {
        return result;
    }

    let diagonals: &[(isize, isize)] = if grid.allow_diagonal {
        &DIAGONAL_OFFSETS
    } else {
        &[]
    };
    let offsets = ORTHOGONAL_OFFSETS
        .iter()
        .map(|offset| (offset, 1.))
        .chain(diagonals.iter().map(|offset| (offset, SQRT_2)));

    for (&(d_row, d_col), multiplier) in offsets {
        let (Some(n_row), Some(n_col)) =
            (row.checked_add_signed(d_row), col.checked_add_signed(d_col))
        else {
            continue;
        };
        match grid.cell(n_row, n_col) {
            Some(cell) if !cell.is_obstacle => {
                result.push((NodeId::from_coords(n_row, n_col), multiplier * cell.weight));
            }
            _ => {}
        }
    }
    result
}

fn graph_neighbours(graph: &GraphProblem, node: &NodeId) -> Neighbours {
    let mut result = Neighbours::new();
    for edge in &graph.edges {
        if &edge.from == node {
            result.push((edge.to.clone(), edge.weight));
        } else if !graph.directed && &edge.to == node {
            result.push((edge.from.clone(), edge.weight));
        }
    }
    result
}
