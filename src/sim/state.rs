//! Game state and core simulation types
//!
//! One `GameState` lives for the whole session and is reset in place.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::field;
use super::grid::{Grid, Pos};
use super::level::LevelState;
use crate::consts::*;
use crate::settings::{Settings, SettingsError};

/// Player spawn: bottom-left interior corner
pub const PLAYER_START: Pos = Pos::new(FIRST_COL, LAST_ROW);
/// Enemy spawn: top-right interior corner
pub const ENEMY_START: Pos = Pos::new(LAST_COL, FIRST_ROW);

/// Player movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Column/row offset
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// How the player died
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeathCause {
    /// Enemy reached the player's cell
    Caught,
    /// An obstacle scrolled onto the player's cell
    Crushed,
}

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoundOutcome {
    Died(DeathCause),
    Won,
}

/// Running totals for the session (in memory only)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    /// Ticks simulated since start
    pub ticks: u64,
    pub deaths: u32,
    pub wins: u32,
    /// Highest level reached
    pub best_level: u32,
}

/// Snapshot taken when a round ends, logged as JSON
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundSummary {
    pub seed: u64,
    pub outcome: RoundOutcome,
    /// Level the round ended on
    pub level: u32,
    pub stats: SessionStats,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Tuning for this session
    pub settings: Settings,
    /// Seed the RNG was created from
    pub seed: u64,
    rng: Pcg32,
    pub grid: Grid,
    pub player: Pos,
    pub enemy: Pos,
    pub level: LevelState,
    /// Ticks since the enemy last moved
    pub enemy_ticks: u32,
    pub stats: SessionStats,
}

impl GameState {
    /// Create a new session with the given seed. Settings are validated first
    /// since out-of-range chances can't be sampled.
    pub fn new(seed: u64, settings: Settings) -> Result<Self, SettingsError> {
        settings.validate()?;
        let mut rng = Pcg32::seed_from_u64(seed);
        let grid = field::generate(&mut rng, settings.row_fill_chance);
        Ok(Self {
            level: LevelState::new(&settings),
            settings,
            seed,
            rng,
            grid,
            player: PLAYER_START,
            enemy: ENEMY_START,
            enemy_ticks: 0,
            stats: SessionStats {
                best_level: 1,
                ..Default::default()
            },
        })
    }

    /// Back to level 1: base speeds, spawn positions, fresh field.
    /// The enemy tick counter and session stats carry over.
    pub fn reset(&mut self) {
        self.level = LevelState::new(&self.settings);
        self.player = PLAYER_START;
        self.enemy = ENEMY_START;
        self.regenerate_field();
    }

    /// Same-round level change: the player respawns and the field is rebuilt,
    /// the enemy stays where it is
    pub fn restart_level(&mut self) {
        self.player = PLAYER_START;
        self.regenerate_field();
    }

    pub fn regenerate_field(&mut self) {
        self.grid = field::generate(&mut self.rng, self.settings.row_fill_chance);
    }

    pub fn scroll_field(&mut self) {
        field::scroll(&mut self.grid, &mut self.rng, self.settings.inject_chance);
    }

    /// Move one cell, clamped to the interior
    pub fn move_player(&mut self, direction: Direction) {
        let (dx, dy) = direction.delta();
        self.player = Pos::new(self.player.x + dx, self.player.y + dy).clamped();
    }

    /// True once the player stands on the rightmost interior column
    pub fn at_goal(&self) -> bool {
        self.player.x == LAST_COL
    }

    pub fn summary(&self, outcome: RoundOutcome) -> RoundSummary {
        RoundSummary {
            seed: self.seed,
            outcome,
            level: self.level.level,
            stats: self.stats.clone(),
        }
    }
}
