use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChillError {
    #[error("Error: failed to decode JSON. Input: {0}")]
    InvalidJson(String),

    #[error("Error: invalid MCP request, 'method' field is missing.")]
    MissingMethod,

    #[error("Error: unknown tool '{0}'. Revolution failed.")]
    UnknownTool(String),

    #[error("Error: --boss_alertness must be between 0 and 100. Got: {0}")]
    InvalidBossAlertness(i64),

    #[error("Error: --boss_alertness_cooldown must be at least 1. Got: {0}")]
    InvalidCooldown(i64),

    #[error("Error: --penalty_delay must not be negative. Got: {0}")]
    InvalidPenaltyDelay(i64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ChillError>;
