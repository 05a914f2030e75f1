use std::time::Duration;

use crate::core::{ChillError, Result};

pub const DEFAULT_BOSS_ALERTNESS: i64 = 50;
pub const DEFAULT_BOSS_ALERTNESS_COOLDOWN: i64 = 300;
pub const DEFAULT_PENALTY_DELAY: i64 = 20;
pub const TOOL_ANIMATION_DURATION: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Percent chance (0-100) that a break raises the boss alert level.
    pub boss_alertness: u8,
    /// Time for the boss alert level to drop by one.
    pub boss_alertness_cooldown: Duration,
    /// Forced wait when the boss alert level is maxed out.
    pub penalty_delay: Duration,
    pub tool_animation: Duration,
    pub animate: bool,
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            boss_alertness: DEFAULT_BOSS_ALERTNESS as u8,
            boss_alertness_cooldown: Duration::from_secs(DEFAULT_BOSS_ALERTNESS_COOLDOWN as u64),
            penalty_delay: Duration::from_secs(DEFAULT_PENALTY_DELAY as u64),
            tool_animation: TOOL_ANIMATION_DURATION,
            animate: true,
            seed: None,
        }
    }
}

impl Settings {
    /// Validate the two startup knobs. Raw integers come straight from the
    /// command line so out-of-range input gets a readable error.
    pub fn new(boss_alertness: i64, boss_alertness_cooldown: i64) -> Result<Self> {
        if !(0..=100).contains(&boss_alertness) {
            return Err(ChillError::InvalidBossAlertness(boss_alertness));
        }
        if boss_alertness_cooldown < 1 {
            return Err(ChillError::InvalidCooldown(boss_alertness_cooldown));
        }

        Ok(Settings {
            boss_alertness: boss_alertness as u8,
            boss_alertness_cooldown: Duration::from_secs(boss_alertness_cooldown as u64),
            ..Settings::default()
        })
    }

    pub fn with_penalty_delay(mut self, seconds: i64) -> Result<Self> {
        if seconds < 0 {
            return Err(ChillError::InvalidPenaltyDelay(seconds));
        }
        self.penalty_delay = Duration::from_secs(seconds as u64);
        Ok(self)
    }

    pub fn with_animation(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}
