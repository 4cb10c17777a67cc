use std::fmt;

use crate::grid::Cell;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    Empty, // Grid has zero rows or zero columns
    Ragged { row: usize, len: usize, expected: usize }, // Row length differs from the first row
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathPlannerError {
    OutOfBounds(Cell), // Start or target cell lies outside the grid
    BlockedEndpoint(Cell), // Start or target cell is blocked
    StepBudgetExhausted, // Expansion limit reached before the search resolved
}


impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::Empty => write!(f, "grid has no cells"),
            GridError::Ragged { row, len, expected } => {
                write!(f, "row {row} has {len} cells, expected {expected}")
            }
        }
    }
}

impl std::error::Error for GridError {}

impl fmt::Display for PathPlannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathPlannerError::OutOfBounds(cell) => {
                write!(f, "cell {cell} lies outside the grid")
            }
            PathPlannerError::BlockedEndpoint(cell) => {
                write!(f, "cell {cell} is blocked")
            }
            PathPlannerError::StepBudgetExhausted => {
                write!(f, "expansion limit reached before the search resolved")
            }
        }
    }
}

impl std::error::Error for PathPlannerError {}
