//! Character-cell rendering
//!
//! Draws the field, both actors and the level label through a `Display`.

use std::io;

use crate::consts::*;
use crate::platform::Display;
use crate::sim::{GameState, Pos};

/// Draw one full frame
pub fn render<D: Display + ?Sized>(display: &mut D, state: &GameState) -> io::Result<()> {
    display.clear()?;

    for (row, cells) in state.grid.rows().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            display.draw_cell(row as u16, col as u16, cell.symbol())?;
        }
    }

    // Enemy drawn last so it covers the player when they meet
    draw_marker(display, state.player, PLAYER_MARKER)?;
    draw_marker(display, state.enemy, ENEMY_MARKER)?;

    let label = format!("Level: {}", state.level.level);
    display.draw_text(0, centered_col(&label), &label)?;

    display.present()
}

/// Overlay a message on the middle row of the current frame
pub fn banner<D: Display + ?Sized>(display: &mut D, text: &str) -> io::Result<()> {
    display.draw_text((GRID_HEIGHT / 2) as u16, centered_col(text), text)?;
    display.present()
}

fn draw_marker<D: Display + ?Sized>(display: &mut D, pos: Pos, marker: char) -> io::Result<()> {
    match (u16::try_from(pos.y), u16::try_from(pos.x)) {
        (Ok(row), Ok(col)) => display.draw_cell(row, col, marker),
        _ => Ok(()),
    }
}

fn centered_col(text: &str) -> u16 {
    (GRID_WIDTH.saturating_sub(text.chars().count()) / 2) as u16
}
