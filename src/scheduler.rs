use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::info;

use crate::core::state::{lock, AgentState, SharedState};
use crate::core::Gauges;
use crate::status;

/// How often each background updater wakes up.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskType {
    StressIncrease,
    BossCooldown,
}

impl std::fmt::Display for TaskType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskType::StressIncrease => write!(f, "stress_increase"),
            TaskType::BossCooldown => write!(f, "boss_cooldown"),
        }
    }
}

impl TaskType {
    fn tick(&self, state: &mut AgentState, now: Instant) -> Option<Gauges> {
        match self {
            TaskType::StressIncrease => state.tick_stress(now),
            TaskType::BossCooldown => state.tick_cooldown(now),
        }
    }

    fn announce(&self, gauges: Gauges) {
        match self {
            TaskType::StressIncrease => {
                info!(task = %self, stress = gauges.stress, "stress level went up")
            }
            TaskType::BossCooldown => {
                info!(task = %self, boss_alert = gauges.boss_alert, "boss alert level cooled down")
            }
        }
    }
}

/// Spawn both updaters. They run until the runtime shuts down.
pub fn spawn_background_tasks(state: &SharedState, show_status: bool) -> Vec<JoinHandle<()>> {
    let tasks = [TaskType::StressIncrease, TaskType::BossCooldown];
    let handles = tasks
        .into_iter()
        .map(|task| tokio::spawn(run_task(task, state.clone(), show_status)))
        .collect();
    info!("background state updaters started");
    handles
}

async fn run_task(task: TaskType, state: SharedState, show_status: bool) {
    let mut ticker = time::interval(TICK_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // the first tick completes immediately
    ticker.tick().await;

    loop {
        ticker.tick().await;
        let changed = {
            let mut guard = lock(&state);
            task.tick(&mut guard, Instant::now())
        };

        if let Some(gauges) = changed {
            task.announce(gauges);
            if show_status {
                status::display_status(gauges);
            }
        }
    }
}
