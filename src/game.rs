//! The tick loop
//!
//! Each tick: advance the simulation, render, resolve deaths and level ends,
//! otherwise handle one key, then sleep. Runs until the player quits.

use std::io;

use crate::consts::*;
use crate::platform::{Clock, Display, Input};
use crate::render::{banner, render};
use crate::sim::tick::{self, LevelUp, Status};
use crate::sim::{DeathCause, GameState, RoundSummary};

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Running,
    Died(DeathCause),
    LeveledUp(u32),
    /// Cleared the last level; the session restarted at level 1
    Won,
    Quit,
}

/// Game instance holding the session and its platform
pub struct Game<T, C> {
    state: GameState,
    terminal: T,
    clock: C,
}

impl<T: Display + Input, C: Clock> Game<T, C> {
    pub fn new(state: GameState, terminal: T, clock: C) -> Self {
        Self {
            state,
            terminal,
            clock,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[cfg(test)]
    fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    #[cfg(test)]
    fn terminal(&self) -> &T {
        &self.terminal
    }

    #[cfg(test)]
    fn clock(&self) -> &C {
        &self.clock
    }

    /// Tick until the player quits
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            if self.step()? == Step::Quit {
                log::info!("Quit after {} ticks", self.state.stats.ticks);
                return Ok(());
            }
        }
    }

    /// Run one tick
    pub fn step(&mut self) -> io::Result<Step> {
        tick::advance(&mut self.state);
        render(&mut self.terminal, &self.state)?;

        match tick::status(&self.state) {
            Status::Dead(cause) => {
                self.dwell(GAME_OVER_TEXT)?;
                let summary = tick::end_round(&mut self.state, cause);
                log_summary(&summary);
                return Ok(Step::Died(cause));
            }
            Status::AtGoal => {
                return match tick::complete_level(&mut self.state) {
                    LevelUp::Advanced(level) => {
                        self.pace();
                        Ok(Step::LeveledUp(level))
                    }
                    LevelUp::Won(summary) => {
                        self.dwell(WIN_TEXT)?;
                        log_summary(&summary);
                        Ok(Step::Won)
                    }
                };
            }
            Status::Alive => {}
        }

        if let Some(key) = self.terminal.poll_key()? {
            if !tick::apply(&mut self.state, key.command()) {
                return Ok(Step::Quit);
            }
        }

        self.pace();
        Ok(Step::Running)
    }

    /// Show a banner over the last frame and hold it
    fn dwell(&mut self, text: &str) -> io::Result<()> {
        banner(&mut self.terminal, text)?;
        self.clock.sleep_micros(self.state.settings.dwell_us);
        Ok(())
    }

    fn pace(&mut self) {
        let micros = self.state.settings.pace_us(self.state.level.block_delay_us);
        self.clock.sleep_micros(micros);
    }
}

fn log_summary(summary: &RoundSummary) {
    match serde_json::to_string(summary) {
        Ok(json) => log::info!("Round over: {}", json),
        Err(e) => log::warn!("Failed to encode round summary: {}", e),
    }
}
