pub mod dice;
pub mod error;
pub mod events;
pub mod state;
pub mod tools;

pub use dice::{Dice, RngDice, ScriptedDice};
pub use error::{ChillError, Result};
pub use events::OfficeEvent;
pub use state::{AgentState, Gauges, Outcome, SharedState};
pub use tools::{Tier, ToolDefinition};
