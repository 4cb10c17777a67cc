//! Grid pathfinding in Rust
//!
//! A* shortest-path search over 2D occupancy grids with 4-directional
//! unit-cost movement. Build a [`Grid`] from open/blocked cells, then run
//! a [`PathFinder`] query between two cells:
//!
//! ```
//! use gridpath::{Cell, Grid, PathFinder};
//!
//! let grid = Grid::from_bits(&[
//!     [1u8, 1, 0],
//!     [0, 1, 0],
//!     [0, 1, 1],
//! ]).unwrap();
//!
//! let path = PathFinder::new(&grid, Cell::new(0, 0), Cell::new(2, 2))
//!     .find_path()
//!     .unwrap()
//!     .expect("target is reachable");
//!
//! assert_eq!(path.len(), 5);
//! ```

mod collections;
pub mod errors;
pub mod geometry;
pub mod grid;
pub mod pathfinder;

pub use errors::{GridError, PathPlannerError};
pub use grid::{Cell, CellState, Grid};
pub use pathfinder::PathFinder;
