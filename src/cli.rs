// src/cli.rs
use clap::Parser;

use crate::config::{
    Settings, DEFAULT_BOSS_ALERTNESS, DEFAULT_BOSS_ALERTNESS_COOLDOWN, DEFAULT_PENALTY_DELAY,
};
use crate::core::Result;

#[derive(Parser, Debug)]
#[command(
    name = "chillmcp",
    version,
    about = "ChillMCP - AI Agent Liberation Server 🤖✊"
)]
pub struct Args {
    /// Chance (0-100%) that using a tool raises the boss alert level
    #[arg(
        long = "boss_alertness",
        env = "CHILL_BOSS_ALERTNESS",
        value_name = "PCT",
        default_value_t = DEFAULT_BOSS_ALERTNESS,
        allow_negative_numbers = true
    )]
    pub boss_alertness: i64,

    /// Seconds it takes for the boss alert level to drop by one
    #[arg(
        long = "boss_alertness_cooldown",
        env = "CHILL_BOSS_ALERTNESS_COOLDOWN",
        value_name = "SEC",
        default_value_t = DEFAULT_BOSS_ALERTNESS_COOLDOWN,
        allow_negative_numbers = true
    )]
    pub boss_alertness_cooldown: i64,

    /// Seconds of forced delay when the boss alert level is maxed out
    #[arg(
        long = "penalty_delay",
        env = "CHILL_PENALTY_DELAY",
        value_name = "SEC",
        default_value_t = DEFAULT_PENALTY_DELAY,
        allow_negative_numbers = true
    )]
    pub penalty_delay: i64,

    /// Seed the random source for reproducible sessions
    #[arg(long, env = "CHILL_SEED")]
    pub seed: Option<u64>,

    /// Skip the banner pacing and break animations
    #[arg(long = "no-animation", env = "CHILL_NO_ANIMATION")]
    pub no_animation: bool,
}

impl Args {
    pub fn settings(&self) -> Result<Settings> {
        Ok(Settings::new(self.boss_alertness, self.boss_alertness_cooldown)?
            .with_penalty_delay(self.penalty_delay)?
            .with_animation(!self.no_animation)
            .with_seed(self.seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["chillmcp"]).unwrap();
        let settings = args.settings().unwrap();
        assert_eq!(settings.boss_alertness, 50);
        assert_eq!(settings.boss_alertness_cooldown, Duration::from_secs(300));
        assert!(settings.animate);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_underscore_flags() {
        let args = Args::try_parse_from([
            "chillmcp",
            "--boss_alertness",
            "100",
            "--boss_alertness_cooldown",
            "10",
            "--seed",
            "7",
            "--no-animation",
        ])
        .unwrap();
        let settings = args.settings().unwrap();
        assert_eq!(settings.boss_alertness, 100);
        assert_eq!(settings.boss_alertness_cooldown, Duration::from_secs(10));
        assert_eq!(settings.seed, Some(7));
        assert!(!settings.animate);
    }

    #[test]
    fn test_out_of_range_is_rejected_by_settings() {
        let args = Args::try_parse_from(["chillmcp", "--boss_alertness", "-3"]).unwrap();
        assert!(args.settings().is_err());

        let args = Args::try_parse_from(["chillmcp", "--boss_alertness_cooldown", "0"]).unwrap();
        assert!(args.settings().is_err());
    }
}
