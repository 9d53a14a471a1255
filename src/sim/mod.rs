//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - No rendering, input or clock dependencies

pub mod collision;
pub mod enemy;
pub mod field;
pub mod grid;
pub mod level;
pub mod state;
pub mod tick;

pub use collision::{collide, on_obstacle};
pub use enemy::step_toward;
pub use grid::{Cell, Grid, Pos};
pub use level::{LevelProgress, LevelState, block_delay_for, enemy_interval_for};
pub use state::{
    DeathCause, Direction, ENEMY_START, GameState, PLAYER_START, RoundOutcome, RoundSummary,
    SessionStats,
};
pub use tick::{Command, LevelUp, Status, advance, apply, complete_level, end_round, status};
