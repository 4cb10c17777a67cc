use std::fmt;

use crate::errors::GridError;


/// Grid coordinate as a (row, col) pair, zero-indexed from the top-left
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}


/// Occupancy of a single grid cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellState {
    Open,
    Blocked,
}

impl From<u8> for CellState {
    /// 1 = open, 0 = blocked
    fn from(bit: u8) -> Self {
        if bit == 0 { CellState::Blocked } else { CellState::Open }
    }
}


/// Immutable rectangular occupancy grid, stored row-major
/// Every row must have the same length, checked at construction
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<CellState>,
    rows: usize,
    cols: usize,
}

impl Grid {

    /// Create a grid from rows of cell states
    /// Fails on an empty grid or rows of unequal length
    pub fn new(rows: Vec<Vec<CellState>>) -> Result<Self, GridError> {
        let row_count = rows.len();
        let col_count = rows.first().map_or(0, |r| r.len());
        if row_count == 0 || col_count == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(row_count * col_count);
        for (row, states) in rows.into_iter().enumerate() {
            if states.len() != col_count {
                return Err(GridError::Ragged { row, len: states.len(), expected: col_count });
            }
            cells.extend(states);
        }

        Ok(Self { cells, rows: row_count, cols: col_count })
    }

    /// Create a grid from rows of bits, 1 = open and 0 = blocked
    pub fn from_bits<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let rows = rows
            .iter()
            .map(|r| r.as_ref().iter().map(|&bit| CellState::from(bit)).collect())
            .collect();
        Self::new(rows)
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check if a cell lies within the grid bounds
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// State of a cell, None if out of bounds
    pub fn state(&self, cell: Cell) -> Option<CellState> {
        if self.in_bounds(cell) {
            Some(self.cells[cell.row * self.cols + cell.col])
        } else {
            None
        }
    }

    /// Check if a cell is in bounds and open
    pub fn is_open(&self, cell: Cell) -> bool {
        self.state(cell) == Some(CellState::Open)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_from_bits() {
        let grid = Grid::from_bits(&[[1u8, 0, 1], [1, 1, 0]]).unwrap();

        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.state(Cell::new(0, 0)), Some(CellState::Open));
        assert_eq!(grid.state(Cell::new(0, 1)), Some(CellState::Blocked));
        assert_eq!(grid.state(Cell::new(1, 2)), Some(CellState::Blocked));
    }

    #[test]
    fn test_empty_grid_is_rejected() {
        let no_rows: Vec<Vec<CellState>> = vec![];
        assert_eq!(Grid::new(no_rows), Err(GridError::Empty));

        let no_cols = vec![Vec::new(), Vec::new()];
        assert_eq!(Grid::new(no_cols), Err(GridError::Empty));
    }

    #[test]
    fn test_ragged_grid_is_rejected() {
        let rows = vec![vec![1u8, 1, 1], vec![1, 1]];
        assert_eq!(
            Grid::from_bits(&rows),
            Err(GridError::Ragged { row: 1, len: 2, expected: 3 })
        );
    }

    #[test]
    fn test_bounds_and_openness() {
        let grid = Grid::from_bits(&[[1u8, 0], [1, 1]]).unwrap();

        assert!(grid.in_bounds(Cell::new(1, 1)));
        assert!(!grid.in_bounds(Cell::new(2, 0)));
        assert!(!grid.in_bounds(Cell::new(0, 2)));

        assert!(grid.is_open(Cell::new(0, 0)));
        assert!(!grid.is_open(Cell::new(0, 1)));
        assert!(!grid.is_open(Cell::new(5, 5)));
    }
}
