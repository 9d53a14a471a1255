//! Level progression and difficulty scaling

use crate::settings::Settings;

/// Result of clearing a level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelProgress {
    /// Moved on to the given level
    Advanced(u32),
    /// The last level was cleared
    Completed,
}

/// Current level and the speeds derived from it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelState {
    /// 1-based level number
    pub level: u32,
    /// Block-scroll delay (microseconds)
    pub block_delay_us: u64,
    /// Ticks between enemy steps
    pub enemy_interval: u32,
}

impl LevelState {
    /// Level 1 at base speeds
    pub fn new(settings: &Settings) -> Self {
        Self {
            level: 1,
            block_delay_us: settings.base_block_delay_us,
            enemy_interval: settings.base_enemy_interval,
        }
    }

    /// Move to the next level, or report that the last one was cleared.
    /// State is left untouched on `Completed`.
    pub fn advance(&mut self, settings: &Settings) -> LevelProgress {
        let next = self.level + 1;
        if next > settings.max_level {
            return LevelProgress::Completed;
        }
        self.level = next;
        self.block_delay_us = block_delay_for(next, settings);
        self.enemy_interval = enemy_interval_for(next, settings);
        LevelProgress::Advanced(next)
    }
}

/// Block delay for a level: one step faster per level above 1, floored
pub fn block_delay_for(level: u32, settings: &Settings) -> u64 {
    let steps = u64::from(level.saturating_sub(1));
    settings
        .base_block_delay_us
        .saturating_sub(steps.saturating_mul(settings.block_delay_step_us))
        .max(settings.min_block_delay_us)
}

/// Enemy interval for a level: `base - level * step`, floored
pub fn enemy_interval_for(level: u32, settings: &Settings) -> u32 {
    settings
        .base_enemy_interval
        .saturating_sub(level.saturating_mul(settings.enemy_interval_step))
        .max(settings.min_enemy_interval)
}
