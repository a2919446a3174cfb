use crate::problem::{NodeId, ProblemError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const MIN_GRID_SIZE: usize = 3;
pub const MAX_GRID_SIZE: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    pub row: usize,
    pub col: usize,
}

impl GridPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn node_id(&self) -> NodeId {
        NodeId::from_coords(self.row, self.col)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
    #[serde(default)]
    pub is_obstacle: bool,
    #[serde(default)]
    pub is_start: bool,
    #[serde(default)]
    pub is_goal: bool,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    1.
}

impl GridCell {
    pub fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            is_obstacle: false,
            is_start: false,
            is_goal: false,
            weight: default_weight(),
        }
    }
}

/// A rectangular grid of cells, some of which may be obstacles. Moving onto
/// a cell costs the cell's weight, scaled by `sqrt(2)` for diagonal moves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridProblem {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<GridCell>,
    #[serde(default)]
    pub start: Option<GridPosition>,
    #[serde(default)]
    pub goal: Option<GridPosition>,
    #[serde(default)]
    pub allow_diagonal: bool,
}

impl GridProblem {
    /// Create an obstacle free grid with unit weights, with cells stored in
    /// row-major order.
    pub fn new(
        rows: usize,
        cols: usize,
        start: GridPosition,
        goal: GridPosition,
        allow_diagonal: bool,
    ) -> Self {
        let cells = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| GridCell::new(row, col)))
            .collect();
        let mut grid = Self {
            rows,
            cols,
            cells,
            start: None,
            goal: None,
            allow_diagonal,
        };
        grid.set_start(start);
        grid.set_goal(goal);
        grid
    }

    pub fn set_start(&mut self, position: GridPosition) {
        self.cells.iter_mut().for_each(|cell| cell.is_start = false);
        if let Some(cell) = self.cell_mut(position.row, position.col) {
            cell.is_start = true;
        }
        self.start = Some(position);
    }

    pub fn set_goal(&mut self, position: GridPosition) {
        self.cells.iter_mut().for_each(|cell| cell.is_goal = false);
        if let Some(cell) = self.cell_mut(position.row, position.col) {
            cell.is_goal = true;
        }
        self.goal = Some(position);
    }

    pub fn set_obstacle(&mut self, row: usize, col: usize, is_obstacle: bool) {
        if let Some(cell) = self.cell_mut(row, col) {
            cell.is_obstacle = is_obstacle;
        }
    }

    pub fn set_weight(&mut self, row: usize, col: usize, weight: f64) {
        if let Some(cell) = self.cell_mut(row, col) {
            cell.weight = weight;
        }
    }

    /// Look up a cell by its coordinates. Cells are usually stored in
    /// row-major order, in which case this is a direct index, but any order
    /// is accepted.
    pub fn cell(&self, row: usize, col: usize) -> Option<&GridCell> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        match self.cells.get(row * self.cols + col) {
            Some(cell) if cell.row == row && cell.col == col => Some(cell),
            _ => self
                .cells
                .iter()
                .find(|cell| cell.row == row && cell.col == col),
        }
    }

    fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut GridCell> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let index = row * self.cols + col;
        let in_order = matches!(
            self.cells.get(index),
            Some(cell) if cell.row == row && cell.col == col
        );
        if in_order {
            self.cells.get_mut(index)
        } else {
            self.cells
                .iter_mut()
                .find(|cell| cell.row == row && cell.col == col)
        }
    }

    pub fn is_obstacle(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).map_or(true, |cell| cell.is_obstacle)
    }

    pub fn validate(&self) -> Result<(), ProblemError> {
        for (axis, size) in [("rows", self.rows), ("cols", self.cols)] {
            if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
                return Err(ProblemError::GridSizeOutOfRange { axis, size });
            }
        }

        let mut seen = HashSet::with_capacity(self.cells.len());
        for cell in &self.cells {
            if cell.row >= self.rows || cell.col >= self.cols {
                return Err(ProblemError::CellOutOfBounds {
                    row: cell.row,
                    col: cell.col,
                });
            }
            if !seen.insert((cell.row, cell.col)) {
                return Err(ProblemError::DuplicateCell {
                    row: cell.row,
                    col: cell.col,
                });
            }
            if cell.is_obstacle && (cell.is_start || cell.is_goal) {
                return Err(ProblemError::TerminalOnObstacle {
                    role: if cell.is_start { "start" } else { "goal" },
                    node: NodeId::from_coords(cell.row, cell.col),
                });
            }
            if !(cell.weight >= 1. && cell.weight.is_finite()) {
                return Err(ProblemError::InvalidWeight {
                    location: NodeId::from_coords(cell.row, cell.col).to_string(),
                    weight: cell.weight,
                });
            }
        }
        if seen.len() != self.rows * self.cols {
            return Err(ProblemError::IncompleteGrid {
                expected: self.rows * self.cols,
                actual: seen.len(),
            });
        }

        let start = self.start.ok_or(ProblemError::MissingStart)?;
        let goal = self.goal.ok_or(ProblemError::MissingGoal)?;
        for (role, position) in [("start", start), ("goal", goal)] {
            let cell = self
                .cell(position.row, position.col)
                .ok_or(ProblemError::CellOutOfBounds {
                    row: position.row,
                    col: position.col,
                })?;
            if cell.is_obstacle {
                return Err(ProblemError::TerminalOnObstacle {
                    role,
                    node: position.node_id(),
                });
            }
        }

        // The cell flags must agree with the designated start and goal
        let flags: [(&'static str, GridPosition, fn(&GridCell) -> bool); 2] = [
            ("start", start, |cell| cell.is_start),
            ("goal", goal, |cell| cell.is_goal),
        ];
        for (role, position, is_flagged) in flags {
            let stray = self.cells.iter().find(|cell| {
                is_flagged(cell) && (cell.row, cell.col) != (position.row, position.col)
            });
            if let Some(cell) = stray {
                return Err(ProblemError::MisplacedTerminalFlag {
                    role,
                    node: NodeId::from_coords(cell.row, cell.col),
                    expected: position.node_id(),
                });
            }
            if !self.cell(position.row, position.col).is_some_and(is_flagged) {
                return Err(ProblemError::MissingTerminalFlag {
                    role,
                    node: position.node_id(),
                });
            }
        }

        Ok(())
    }
}
