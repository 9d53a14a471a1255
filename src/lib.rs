//! Dodge Grid - a single-screen terminal arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (field, enemy, collisions, levels)
//! - `render`: Draws a game state through the display capability
//! - `game`: The tick loop tying simulation, rendering and input together
//! - `platform`: Display/input/clock capabilities and the terminal backend
//! - `settings`: Difficulty tuning

pub mod game;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;

pub use game::{Game, Step};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Grid dimensions, border included
    pub const GRID_WIDTH: usize = 40;
    pub const GRID_HEIGHT: usize = 15;

    /// Leftmost and rightmost interior columns
    pub const FIRST_COL: i32 = 1;
    pub const LAST_COL: i32 = GRID_WIDTH as i32 - 2;
    /// Topmost and bottommost interior rows
    pub const FIRST_ROW: i32 = 1;
    pub const LAST_ROW: i32 = GRID_HEIGHT as i32 - 2;

    /// Cell symbols
    pub const BORDER_SYMBOL: char = '*';
    pub const EMPTY_SYMBOL: char = ' ';
    pub const OBSTACLE_SYMBOL: char = '#';

    /// Actor markers
    pub const PLAYER_MARKER: char = 'M';
    pub const ENEMY_MARKER: char = 'E';

    /// Banners shown during the dwell after a round ends
    pub const GAME_OVER_TEXT: &str = "GAME OVER!";
    pub const WIN_TEXT: &str = "CONGRATULATIONS!";
}
