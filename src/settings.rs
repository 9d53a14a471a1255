//! Difficulty tuning
//!
//! Every knob that shapes a run lives here. Grid size is fixed in `consts`.

use serde::Serialize;
use thiserror::Error;

/// Rejected tuning values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("max level must be at least 1")]
    NoLevels,
    #[error("minimum enemy interval must be at least 1 tick")]
    ZeroEnemyInterval,
    #[error("base enemy interval {base} is below the minimum {min}")]
    EnemyIntervalBelowMin { base: u32, min: u32 },
    #[error("minimum block delay {min}us exceeds the base delay {base}us")]
    BlockDelayBelowMin { base: u64, min: u64 },
    #[error("pace divisor must be non-zero")]
    ZeroPaceDivisor,
    #[error("{name} chance {value} must be between 0.0 and 1.0")]
    ChanceOutOfRange { name: &'static str, value: f64 },
}

/// Game tuning
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    // === Obstacle speed ===
    /// Block-scroll delay at level 1 (microseconds)
    pub base_block_delay_us: u64,
    /// Delay removed per level above 1
    pub block_delay_step_us: u64,
    /// Fastest allowed block-scroll delay
    pub min_block_delay_us: u64,
    /// Per-tick sleep is the block delay divided by this
    pub pace_divisor: u64,

    // === Enemy ===
    /// Ticks between enemy steps at level 1
    pub base_enemy_interval: u32,
    /// Interval removed per level
    pub enemy_interval_step: u32,
    /// Floor so the enemy never moves every tick
    pub min_enemy_interval: u32,

    // === Progression ===
    pub max_level: u32,

    // === Field ===
    /// Chance an interior row gets an obstacle when the field is generated
    pub row_fill_chance: f64,
    /// Chance per row per tick of a new obstacle on the right edge
    pub inject_chance: f64,

    /// Pause after a death or a win (microseconds)
    pub dwell_us: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_block_delay_us: 150_000,
            block_delay_step_us: 15_000,
            min_block_delay_us: 15_000,
            pace_divisor: 10,

            base_enemy_interval: 20,
            enemy_interval_step: 2,
            min_enemy_interval: 5,

            max_level: 10,

            row_fill_chance: 0.5,
            inject_chance: 0.1,

            dwell_us: 2_000_000,
        }
    }
}

impl Settings {
    /// Check the tuning for values the simulation can't run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.max_level == 0 {
            return Err(SettingsError::NoLevels);
        }
        if self.min_enemy_interval == 0 {
            return Err(SettingsError::ZeroEnemyInterval);
        }
        if self.base_enemy_interval < self.min_enemy_interval {
            return Err(SettingsError::EnemyIntervalBelowMin {
                base: self.base_enemy_interval,
                min: self.min_enemy_interval,
            });
        }
        if self.min_block_delay_us > self.base_block_delay_us {
            return Err(SettingsError::BlockDelayBelowMin {
                base: self.base_block_delay_us,
                min: self.min_block_delay_us,
            });
        }
        if self.pace_divisor == 0 {
            return Err(SettingsError::ZeroPaceDivisor);
        }
        for (name, value) in [
            ("row fill", self.row_fill_chance),
            ("inject", self.inject_chance),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SettingsError::ChanceOutOfRange { name, value });
            }
        }
        Ok(())
    }

    /// Per-tick sleep for a given block delay
    pub fn pace_us(&self, block_delay_us: u64) -> u64 {
        block_delay_us / self.pace_divisor.max(1)
    }
}
