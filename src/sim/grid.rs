//! Bordered cell grid
//!
//! The outer ring is border by construction and can't be overwritten;
//! writes only land on interior cells.

use crate::consts::*;

/// A grid coordinate. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True if inside the border frame
    pub fn is_interior(self) -> bool {
        (FIRST_COL..=LAST_COL).contains(&self.x) && (FIRST_ROW..=LAST_ROW).contains(&self.y)
    }

    /// Clamp into the interior
    pub fn clamped(self) -> Self {
        Self {
            x: self.x.clamp(FIRST_COL, LAST_COL),
            y: self.y.clamp(FIRST_ROW, LAST_ROW),
        }
    }
}

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    Border,
    #[default]
    Empty,
    Obstacle,
}

impl Cell {
    pub fn symbol(self) -> char {
        match self {
            Cell::Border => BORDER_SYMBOL,
            Cell::Empty => EMPTY_SYMBOL,
            Cell::Obstacle => OBSTACLE_SYMBOL,
        }
    }
}

/// Fixed-size play field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[Cell; GRID_WIDTH]; GRID_HEIGHT],
}

impl Default for Grid {
    fn default() -> Self {
        Self::bordered()
    }
}

impl Grid {
    /// Border frame with an empty interior
    pub fn bordered() -> Self {
        let mut cells = [[Cell::Empty; GRID_WIDTH]; GRID_HEIGHT];
        for (y, row) in cells.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                if y == 0 || y == GRID_HEIGHT - 1 || x == 0 || x == GRID_WIDTH - 1 {
                    *cell = Cell::Border;
                }
            }
        }
        Self { cells }
    }

    /// Cell at `pos`, `None` off the grid
    pub fn get(&self, pos: Pos) -> Option<Cell> {
        let x = usize::try_from(pos.x).ok()?;
        let y = usize::try_from(pos.y).ok()?;
        self.cells.get(y)?.get(x).copied()
    }

    /// Write an interior cell. Border positions and `Cell::Border` are refused.
    pub fn set(&mut self, pos: Pos, cell: Cell) -> bool {
        if !pos.is_interior() || cell == Cell::Border {
            return false;
        }
        self.cells[pos.y as usize][pos.x as usize] = cell;
        true
    }

    pub fn is_obstacle(&self, pos: Pos) -> bool {
        self.get(pos) == Some(Cell::Obstacle)
    }

    /// Rows top to bottom, border rows included
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; GRID_WIDTH]> {
        self.cells.iter()
    }

    /// Obstacle count in one row
    pub fn obstacles_in_row(&self, y: i32) -> usize {
        usize::try_from(y)
            .ok()
            .and_then(|y| self.cells.get(y))
            .map(|row| row.iter().filter(|c| **c == Cell::Obstacle).count())
            .unwrap_or(0)
    }

    /// True if every cell of the outer ring is border
    pub fn border_intact(&self) -> bool {
        self.cells.iter().enumerate().all(|(y, row)| {
            row.iter().enumerate().all(|(x, cell)| {
                let edge = y == 0 || y == GRID_HEIGHT - 1 || x == 0 || x == GRID_WIDTH - 1;
                (*cell == Cell::Border) == edge
            })
        })
    }
}
