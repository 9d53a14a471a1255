//! Obstacle field generation and scrolling
//!
//! Rows are independent: nothing here reads one row while writing another.

use rand::Rng;

use super::grid::{Cell, Grid, Pos};
use crate::consts::*;

/// Fresh field: border frame, and each interior row gets at most one obstacle
/// with probability `row_fill_chance`.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, row_fill_chance: f64) -> Grid {
    let mut grid = Grid::bordered();
    for y in FIRST_ROW..=LAST_ROW {
        if rng.random_bool(row_fill_chance) {
            let x = rng.random_range(FIRST_COL..=LAST_COL);
            grid.set(Pos::new(x, y), Cell::Obstacle);
        }
    }
    grid
}

/// Shift every obstacle one column left, dropping those at the left edge,
/// then inject new obstacles on the right edge.
pub fn scroll<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R, inject_chance: f64) {
    for y in FIRST_ROW..=LAST_ROW {
        shift_row_left(grid, y);
    }
    for y in FIRST_ROW..=LAST_ROW {
        if rng.random_bool(inject_chance) {
            grid.set(Pos::new(LAST_COL, y), Cell::Obstacle);
        }
    }
}

/// Each cell takes its right neighbour's contents; reading ahead of the write
/// keeps an obstacle from being carried more than one column per call.
fn shift_row_left(grid: &mut Grid, y: i32) {
    for x in FIRST_COL..=LAST_COL {
        let incoming = if x < LAST_COL && grid.is_obstacle(Pos::new(x + 1, y)) {
            Cell::Obstacle
        } else {
            Cell::Empty
        };
        grid.set(Pos::new(x, y), incoming);
    }
}
