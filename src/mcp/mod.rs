pub mod base;
pub mod response;

pub use base::{ChillServer, Request, StopReason};
pub use response::{Content, ToolResponse};
