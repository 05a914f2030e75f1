pub mod animation;
pub mod cli;
pub mod config;
pub mod core;
pub mod mcp;
pub mod scheduler;
pub mod status;

pub use config::Settings;
pub use mcp::{ChillServer, StopReason, ToolResponse};
