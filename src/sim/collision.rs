//! Collision predicates

use super::grid::{Grid, Pos};

/// True if both positions share a cell
pub fn collide(a: Pos, b: Pos) -> bool {
    a.x == b.x && a.y == b.y
}

/// True if the cell at `pos` holds an obstacle
pub fn on_obstacle(grid: &Grid, pos: Pos) -> bool {
    grid.is_obstacle(pos)
}
