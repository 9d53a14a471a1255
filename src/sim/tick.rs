//! Per-tick simulation steps
//!
//! The loop in `game` calls these in order: `advance`, render, `status`,
//! then `end_round`/`complete_level` or `apply`.

use super::collision::{collide, on_obstacle};
use super::enemy::step_toward;
use super::level::LevelProgress;
use super::state::{DeathCause, Direction, GameState, RoundOutcome, RoundSummary};

/// A decoded player command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Quit,
}

/// What the collision checks found this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Alive,
    Dead(DeathCause),
    /// Player reached the rightmost interior column
    AtGoal,
}

/// Result of a level-complete transition
#[derive(Debug, Clone, PartialEq)]
pub enum LevelUp {
    Advanced(u32),
    Won(RoundSummary),
}

/// Scroll the field, then step the enemy if its interval has elapsed
pub fn advance(state: &mut GameState) {
    state.stats.ticks += 1;
    state.scroll_field();

    state.enemy_ticks += 1;
    if state.enemy_ticks >= state.level.enemy_interval {
        state.enemy = step_toward(state.enemy, state.player);
        state.enemy_ticks = 0;
    }
}

/// Death takes priority over reaching the goal; the enemy is checked first
pub fn status(state: &GameState) -> Status {
    if collide(state.player, state.enemy) {
        Status::Dead(DeathCause::Caught)
    } else if on_obstacle(&state.grid, state.player) {
        Status::Dead(DeathCause::Crushed)
    } else if state.at_goal() {
        Status::AtGoal
    } else {
        Status::Alive
    }
}

/// Record a death and reset to level 1
pub fn end_round(state: &mut GameState, cause: DeathCause) -> RoundSummary {
    state.stats.deaths += 1;
    let summary = state.summary(RoundOutcome::Died(cause));
    log::debug!(
        "Died ({:?}) on level {} at tick {}",
        cause,
        state.level.level,
        state.stats.ticks
    );
    state.reset();
    summary
}

/// Advance to the next level, or record a win and reset after the last one
pub fn complete_level(state: &mut GameState) -> LevelUp {
    match state.level.advance(&state.settings) {
        LevelProgress::Advanced(level) => {
            state.stats.best_level = state.stats.best_level.max(level);
            state.restart_level();
            log::info!(
                "Level {}: block delay {}us, enemy every {} ticks",
                level,
                state.level.block_delay_us,
                state.level.enemy_interval
            );
            LevelUp::Advanced(level)
        }
        LevelProgress::Completed => {
            state.stats.wins += 1;
            let summary = state.summary(RoundOutcome::Won);
            state.reset();
            LevelUp::Won(summary)
        }
    }
}

/// Apply one command. Returns `false` on quit.
pub fn apply(state: &mut GameState, command: Command) -> bool {
    match command {
        Command::Move(direction) => {
            state.move_player(direction);
            true
        }
        Command::Quit => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::settings::Settings;
    use crate::sim::grid::{Cell, Grid, Pos};
    use crate::sim::state::{ENEMY_START, PLAYER_START};

    fn quiet_state(seed: u64) -> GameState {
        let settings = Settings {
            inject_chance: 0.0,
            ..Default::default()
        };
        let mut state = GameState::new(seed, settings).unwrap();
        state.grid = Grid::bordered();
        state
    }

    #[test]
    fn test_enemy_moves_every_interval() {
        let mut state = quiet_state(3);
        let interval = state.level.enemy_interval;

        for _ in 0..interval - 1 {
            advance(&mut state);
        }
        assert_eq!(state.enemy, ENEMY_START);
        assert_eq!(state.enemy_ticks, interval - 1);

        advance(&mut state);
        assert_eq!(state.enemy, Pos::new(ENEMY_START.x - 1, ENEMY_START.y + 1));
        assert_eq!(state.enemy_ticks, 0);
        assert_eq!(state.stats.ticks, u64::from(interval));
    }

    #[test]
    fn test_status_order() {
        let mut state = quiet_state(3);
        assert_eq!(status(&state), Status::Alive);

        state.grid.set(state.player, Cell::Obstacle);
        assert_eq!(status(&state), Status::Dead(DeathCause::Crushed));

        state.enemy = state.player;
        assert_eq!(status(&state), Status::Dead(DeathCause::Caught));

        let mut state = quiet_state(3);
        state.player = Pos::new(LAST_COL, 5);
        assert_eq!(status(&state), Status::AtGoal);
    }

    #[test]
    fn test_end_round_resets() {
        let mut state = quiet_state(8);
        complete_level(&mut state);
        complete_level(&mut state);
        assert_eq!(state.level.level, 3);

        let summary = end_round(&mut state, DeathCause::Caught);

        assert_eq!(summary.level, 3);
        assert_eq!(summary.outcome, RoundOutcome::Died(DeathCause::Caught));
        assert_eq!(state.level.level, 1);
        assert_eq!(
            state.level.enemy_interval,
            state.settings.base_enemy_interval
        );
        assert_eq!(state.stats.deaths, 1);
        assert_eq!(state.stats.best_level, 3);
        assert!(state.grid.border_intact());
    }

    #[test]
    fn test_complete_level_advances() {
        let mut state = quiet_state(8);
        state.player = Pos::new(LAST_COL, 4);
        state.enemy = Pos::new(12, 12);

        assert_eq!(complete_level(&mut state), LevelUp::Advanced(2));
        assert_eq!(state.player, PLAYER_START);
        assert_eq!(state.enemy, Pos::new(12, 12));
        assert_eq!(state.level.enemy_interval, 16);
        assert_eq!(state.level.block_delay_us, 135_000);
    }

    #[test]
    fn test_win_after_last_level() {
        let mut state = quiet_state(8);
        for _ in 1..state.settings.max_level {
            assert!(matches!(complete_level(&mut state), LevelUp::Advanced(_)));
        }

        let LevelUp::Won(summary) = complete_level(&mut state) else {
            panic!("expected a win");
        };
        assert_eq!(summary.level, state.settings.max_level);
        assert_eq!(state.level.level, 1);
        assert_eq!(state.enemy, ENEMY_START);
        assert_eq!(state.stats.wins, 1);
    }

    /// Obstacle in every interior row at one column; regeneration yields an
    /// empty field
    fn striped_state(seed: u64) -> GameState {
        let settings = Settings {
            row_fill_chance: 0.0,
            inject_chance: 0.0,
            ..Default::default()
        };
        let mut state = GameState::new(seed, settings).unwrap();
        for y in FIRST_ROW..=LAST_ROW {
            state.grid.set(Pos::new(20, y), Cell::Obstacle);
        }
        state
    }

    fn obstacle_count(grid: &Grid) -> usize {
        (FIRST_ROW..=LAST_ROW).map(|y| grid.obstacles_in_row(y)).sum()
    }

    #[test]
    fn test_death_regenerates_field() {
        let mut state = striped_state(11);
        assert_eq!(
            obstacle_count(&state.grid),
            (LAST_ROW - FIRST_ROW + 1) as usize
        );

        end_round(&mut state, DeathCause::Crushed);

        assert_eq!(obstacle_count(&state.grid), 0);
        assert!(state.grid.border_intact());
    }

    #[test]
    fn test_level_up_regenerates_field() {
        let mut state = striped_state(11);

        assert_eq!(complete_level(&mut state), LevelUp::Advanced(2));

        assert_eq!(obstacle_count(&state.grid), 0);
    }

    #[test]
    fn test_win_regenerates_field() {
        let mut state = striped_state(11);
        for _ in 1..state.settings.max_level {
            complete_level(&mut state);
        }
        for y in FIRST_ROW..=LAST_ROW {
            state.grid.set(Pos::new(20, y), Cell::Obstacle);
        }

        assert!(matches!(complete_level(&mut state), LevelUp::Won(_)));

        assert_eq!(obstacle_count(&state.grid), 0);
    }

    #[test]
    fn test_apply_commands() {
        let mut state = quiet_state(1);
        assert!(apply(&mut state, Command::Move(Direction::Right)));
        assert_eq!(state.player, Pos::new(2, LAST_ROW));
        assert!(!apply(&mut state, Command::Quit));
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999, Settings::default()).unwrap();
        let mut state2 = GameState::new(99999, Settings::default()).unwrap();

        for _ in 0..50 {
            advance(&mut state1);
            advance(&mut state2);
        }

        assert_eq!(state1.grid, state2.grid);
        assert_eq!(state1.enemy, state2.enemy);
    }
}
