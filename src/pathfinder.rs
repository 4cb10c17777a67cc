use crate::collections::FxIndexMap;
use crate::errors::PathPlannerError;
use crate::geometry::manhattan_distance;
use crate::grid::{Cell, Grid};

use std::{
    collections::BinaryHeap,
    cmp::Ordering
};
use indexmap::map::Entry::{Occupied, Vacant};


/// Candidate moves in fixed order: up, down, left, right
/// The order drives closed list insertion order, which is the tie-break
/// key between equal f_cost entries, so it must not be reordered
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Node on the open list
#[derive(Debug)]
struct Node {
    index: usize, // index in the closed_list - maps to the cell
    cost: u32, // Cost to reach this node from the start
    f_cost: u32, // Total cost = cost + h(n) aka estimated cost
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap on f_cost; equal f_cost pops in closed list insertion order
        other
            .f_cost
            .cmp(&self.f_cost)
            .then_with(|| other.index.cmp(&self.index))
    }
}
impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.f_cost == other.f_cost && self.index == other.index
    }
}
impl Eq for Node {}


/// A* shortest-path search over an occupancy grid
/// https://en.wikipedia.org/wiki/A*_search_algorithm
///
/// Movement is 4-directional with unit step cost, so the Manhattan distance
/// heuristic is admissible and the returned path is always a minimum-step path.
/// Output is deterministic: equal-priority nodes expand in discovery order and
/// neighbors are always emitted up, down, left, right.
pub struct PathFinder<'a> {
    grid: &'a Grid,
    start: Cell,
    target: Cell,
    expansion_limit: Option<usize>,
}

impl<'a> PathFinder<'a> {

    /// Create a planner for one (start, target) query on the grid
    /// Endpoints are validated in find_path, not here
    pub fn new(grid: &'a Grid, start: Cell, target: Cell) -> Self {
        Self { grid, start, target, expansion_limit: None }
    }

    /// Cap the number of node expansions before the search gives up
    /// Bounds worst-case runtime on large grids, unbounded by default
    pub fn with_expansion_limit(mut self, limit: usize) -> Self {
        self.expansion_limit = Some(limit);
        self
    }

    /// Manhattan distance between two cells
    /// Admissible for 4-directional unit-cost movement
    pub fn heuristic(a: Cell, b: Cell) -> u32 {
        manhattan_distance(a.row as i64, a.col as i64, b.row as i64, b.col as i64) as u32
    }

    /// Open in-bounds neighbors of a cell, in fixed up, down, left, right order
    pub fn neighbors(&self, pos: Cell) -> Vec<Cell> {
        DIRECTIONS
            .iter()
            .filter_map(|&(d_row, d_col)| {
                let row = pos.row.checked_add_signed(d_row)?;
                let col = pos.col.checked_add_signed(d_col)?;
                let cell = Cell::new(row, col);
                self.grid.is_open(cell).then_some(cell)
            })
            .collect()
    }

    /// Find a minimum-step path from start to target
    ///
    /// Returns the ordered cells from start to target inclusive, Ok(None) when
    /// the target is unreachable, or an error for invalid endpoints. A start
    /// or target that is out of bounds or blocked is rejected up front rather
    /// than silently reported as unreachable.
    pub fn find_path(&self) -> Result<Option<Vec<Cell>>, PathPlannerError> {

        for endpoint in [self.start, self.target] {
            if !self.grid.in_bounds(endpoint) {
                return Err(PathPlannerError::OutOfBounds(endpoint));
            }
            if !self.grid.is_open(endpoint) {
                return Err(PathPlannerError::BlockedEndpoint(endpoint));
            }
        }

        // Open List
        // Cells that need to be evaluated, implemented as priority queue
        // Sorting is done by f_cost (cost + heuristic)
        let mut open_list: BinaryHeap<Node> = BinaryHeap::new();

        // Visited cells - best known cost and predecessor
        // The tuple contains (parent_index, cost) where parent_index is the index
        // of the parent cell in the closed_list, used to rebuild the final path
        // for the start cell, parent_index is set to usize::MAX to indicate it has no parent
        let mut closed_list: FxIndexMap<Cell, (usize, u32)> = FxIndexMap::default();

        let start_index = closed_list.insert_full(self.start, (usize::MAX, 0)).0;
        open_list.push(Node {
            index: start_index,
            cost: 0,
            f_cost: Self::heuristic(self.start, self.target),
        });

        let mut expansions: usize = 0;

        while let Some(Node { index, cost, .. }) = open_list.pop() {

            // fetch current best cost for the cell
            let (&cell, &(_, best_cost)) = closed_list.get_index(index).unwrap();

            // If cost of the popped node is higher than the best cost, skip it
            // This implies we've already found a better path to this cell
            if cost > best_cost {
                continue;
            }

            if cell == self.target {
                return Ok(Some(reconstruct_path(&closed_list, index)));
            }

            if let Some(limit) = self.expansion_limit {
                if expansions >= limit {
                    return Err(PathPlannerError::StepBudgetExhausted);
                }
            }
            expansions += 1;

            for neighbor in self.neighbors(cell) {

                // Every move costs one step
                let new_cost = cost + 1;

                let neighbor_index = match closed_list.entry(neighbor) {
                    Vacant(e) => {
                        // First time seeing this cell
                        let i = e.index();
                        e.insert((index, new_cost));
                        i
                    }
                    Occupied(mut e) => {
                        if e.get().1 > new_cost {
                            // Found a better path to this cell
                            let i = e.index();
                            e.insert((index, new_cost));
                            i
                        } else {
                            // The existing path is better, do nothing
                            continue;
                        }
                    }
                };

                // Only add to the queue if we've found a better path
                open_list.push(Node {
                    index: neighbor_index,
                    cost: new_cost,
                    f_cost: new_cost + Self::heuristic(neighbor, self.target),
                });
            }
        }

        // Frontier exhausted without reaching the target
        Ok(None)
    }
}


/// Construct the path by walking predecessor indices back from the goal entry
/// Returns the ordered cells from start to target
fn reconstruct_path(closed_list: &FxIndexMap<Cell, (usize, u32)>, goal_index: usize) -> Vec<Cell> {

    let mut path = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to start
    while current_index != usize::MAX {
        let (&cell, &(parent_index, _)) = closed_list.get_index(current_index).unwrap();
        path.push(cell);
        current_index = parent_index;
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    path
}
