use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde::Serialize;
use tokio::time::Instant;

use crate::config::Settings;
use crate::core::dice::Dice;
use crate::core::events::{OfficeEvent, RANDOM_EVENT_CHANCE};
use crate::core::tools::{Mood, ToolDefinition, FAILURE_REDUCTION};

pub const MAX_STRESS_LEVEL: u8 = 100;
pub const MAX_BOSS_ALERT_LEVEL: u8 = 5;
pub const STRESS_INCREASE_INTERVAL: Duration = Duration::from_secs(60);
pub const STRESS_INCREASE_AMOUNT: u8 = 1;

/// The one lock every task goes through.
pub type SharedState = Arc<Mutex<AgentState>>;

/// Lock the shared state. A poisoned lock still holds valid gauges, so it
/// is recovered instead of propagated.
pub fn lock(state: &SharedState) -> MutexGuard<'_, AgentState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Gauges {
    pub stress: u8,
    pub boss_alert: u8,
}

/// Everything a break changed, captured inside the critical section.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub penalty: bool,
    pub succeeded: bool,
    pub stress_reduction: u32,
    pub alert_raised: bool,
    pub event: Option<OfficeEvent>,
    pub gauges: Gauges,
    pub flavor: &'static str,
    /// Summary on success, failure reason otherwise.
    pub summary: &'static str,
}

pub struct AgentState {
    stress: u8,
    boss_alert: u8,
    boss_alertness: f64,
    cooldown: Duration,
    last_stress_update: Instant,
    last_cooldown: Instant,
    dice: Box<dyn Dice>,
}

impl std::fmt::Debug for AgentState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentState")
            .field("stress", &self.stress)
            .field("boss_alert", &self.boss_alert)
            .field("boss_alertness", &self.boss_alertness)
            .field("cooldown", &self.cooldown)
            .finish_non_exhaustive()
    }
}

impl AgentState {
    pub fn new(boss_alertness_pct: u8, cooldown: Duration, dice: Box<dyn Dice>) -> Self {
        let now = Instant::now();
        AgentState {
            stress: 0,
            boss_alert: 0,
            boss_alertness: f64::from(boss_alertness_pct.min(100)) / 100.0,
            cooldown,
            last_stress_update: now,
            last_cooldown: now,
            dice,
        }
    }

    pub fn from_settings(settings: &Settings, dice: Box<dyn Dice>) -> Self {
        Self::new(settings.boss_alertness, settings.boss_alertness_cooldown, dice)
    }

    pub fn shared(self) -> SharedState {
        Arc::new(Mutex::new(self))
    }

    /// Start from given gauge values (clamped).
    pub fn with_gauges(mut self, stress: u8, boss_alert: u8) -> Self {
        self.stress = stress.min(MAX_STRESS_LEVEL);
        self.boss_alert = boss_alert.min(MAX_BOSS_ALERT_LEVEL);
        self
    }

    pub fn gauges(&self) -> Gauges {
        Gauges {
            stress: self.stress,
            boss_alert: self.boss_alert,
        }
    }

    pub fn boss_alertness(&self) -> f64 {
        self.boss_alertness
    }

    /// One stress-timer tick. The timer restarts whenever the interval has
    /// elapsed, even when stress is already maxed out.
    pub fn tick_stress(&mut self, now: Instant) -> Option<Gauges> {
        if now.saturating_duration_since(self.last_stress_update) < STRESS_INCREASE_INTERVAL {
            return None;
        }
        self.last_stress_update = now;
        if self.stress >= MAX_STRESS_LEVEL {
            return None;
        }
        self.stress = self
            .stress
            .saturating_add(STRESS_INCREASE_AMOUNT)
            .min(MAX_STRESS_LEVEL);
        Some(self.gauges())
    }

    /// One cooldown-timer tick.
    pub fn tick_cooldown(&mut self, now: Instant) -> Option<Gauges> {
        if now.saturating_duration_since(self.last_cooldown) < self.cooldown {
            return None;
        }
        self.last_cooldown = now;
        if self.boss_alert == 0 {
            return None;
        }
        self.boss_alert -= 1;
        Some(self.gauges())
    }

    /// Take a break with `tool`. Every random draw and gauge update of the
    /// break happens here, under the caller's lock.
    pub fn apply_tool(&mut self, tool: &'static ToolDefinition) -> Outcome {
        let penalty = self.boss_alert == MAX_BOSS_ALERT_LEVEL;

        let succeeded = self.dice.chance(tool.tier.success_rate());
        let (lo, hi) = if succeeded {
            tool.tier.reduction_range()
        } else {
            FAILURE_REDUCTION
        };
        let stress_reduction = self.dice.between(lo, hi);
        let reduced = u32::from(self.stress).saturating_sub(stress_reduction);
        self.stress = reduced as u8;

        let mut alert_raised = false;
        if self.dice.chance(self.boss_alertness) && self.boss_alert < MAX_BOSS_ALERT_LEVEL {
            self.boss_alert += 1;
            alert_raised = true;
        }

        let event = if self.dice.chance(RANDOM_EVENT_CHANCE) {
            let event = OfficeEvent::roll(self.dice.as_mut());
            self.stress = event.stress().apply(self.stress, MAX_STRESS_LEVEL);
            self.boss_alert = event.boss_alert().apply(self.boss_alert, MAX_BOSS_ALERT_LEVEL);
            Some(event)
        } else {
            None
        };

        let gauges = self.gauges();
        let flavor = tool.flavor[self.dice.pick(tool.flavor.len())];
        let summary = if succeeded {
            let list = tool.summary.for_mood(Mood::from_gauges(gauges));
            list[self.dice.pick(list.len())]
        } else {
            tool.failure[self.dice.pick(tool.failure.len())]
        };

        Outcome {
            penalty,
            succeeded,
            stress_reduction,
            alert_raised,
            event,
            gauges,
            flavor,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dice::{RngDice, ScriptedDice};
    use crate::core::tools;

    fn state_with(dice: ScriptedDice) -> AgentState {
        AgentState::new(50, Duration::from_secs(10), Box::new(dice))
    }

    fn tool(name: &str) -> &'static ToolDefinition {
        tools::find(name).expect("tool exists")
    }

    #[test]
    fn test_new_state_is_calm() {
        let state = state_with(ScriptedDice::new());
        assert_eq!(state.gauges(), Gauges { stress: 0, boss_alert: 0 });
        assert_eq!(state.boss_alertness(), 0.5);
    }

    #[test]
    fn test_with_gauges_clamps() {
        let state = state_with(ScriptedDice::new()).with_gauges(250, 9);
        assert_eq!(state.gauges(), Gauges { stress: 100, boss_alert: 5 });
    }

    #[test]
    fn test_basic_success_reduces_stress() {
        // success, no alert, no event
        let dice = ScriptedDice::new().chances([true, false, false]).values([25]);
        let mut state = state_with(dice).with_gauges(60, 0);

        let outcome = state.apply_tool(tool("take_a_break"));
        assert!(outcome.succeeded);
        assert!(!outcome.penalty);
        assert_eq!(outcome.stress_reduction, 25);
        assert_eq!(outcome.gauges, Gauges { stress: 35, boss_alert: 0 });
        assert!(tool("take_a_break").summary.default.contains(&outcome.summary));
    }

    #[test]
    fn test_stress_never_goes_negative() {
        let dice = ScriptedDice::new().chances([true, false, false]).values([40]);
        let mut state = state_with(dice).with_gauges(0, 0);

        let outcome = state.apply_tool(tool("show_meme"));
        assert_eq!(outcome.gauges.stress, 0);
    }

    #[test]
    fn test_failure_uses_failure_range_and_text() {
        let dice = ScriptedDice::new().chances([false, false, false]).values([4]);
        let mut state = state_with(dice).with_gauges(50, 0);

        let outcome = state.apply_tool(tool("coffee_mission"));
        assert!(!outcome.succeeded);
        assert_eq!(outcome.gauges.stress, 46);
        assert!(tool("coffee_mission").failure.contains(&outcome.summary));
    }

    #[test]
    fn test_failure_reduction_is_capped() {
        // A scripted 50 is clamped into the 0..=5 failure range.
        let dice = ScriptedDice::new().chances([false, false, false]).values([50]);
        let mut state = state_with(dice).with_gauges(50, 0);

        let outcome = state.apply_tool(tool("deep_thinking"));
        assert_eq!(outcome.stress_reduction, 5);
        assert_eq!(outcome.gauges.stress, 45);
    }

    #[test]
    fn test_alert_raise_is_capped() {
        let dice = ScriptedDice::new().chances([true, true, false]);
        let mut state = state_with(dice).with_gauges(0, 5);

        let outcome = state.apply_tool(tool("take_a_break"));
        assert!(outcome.penalty);
        assert!(!outcome.alert_raised);
        assert_eq!(outcome.gauges.boss_alert, 5);
    }

    #[test]
    fn test_alert_raise() {
        let dice = ScriptedDice::new().chances([true, true, false]);
        let mut state = state_with(dice).with_gauges(0, 3);

        let outcome = state.apply_tool(tool("take_a_break"));
        assert!(!outcome.penalty);
        assert!(outcome.alert_raised);
        assert_eq!(outcome.gauges.boss_alert, 4);
        assert!(tool("take_a_break").summary.high_alert.contains(&outcome.summary));
    }

    #[test]
    fn test_high_stress_summary() {
        let dice = ScriptedDice::new().chances([true, false, false]).values([10]);
        let mut state = state_with(dice).with_gauges(100, 0);

        let outcome = state.apply_tool(tool("watch_netflix"));
        assert_eq!(outcome.gauges.stress, 90);
        assert!(tool("watch_netflix").summary.high_stress.contains(&outcome.summary));
    }

    #[test]
    fn test_leave_work_event() {
        // success, no alert, event -> pick 1 (leave work)
        let dice = ScriptedDice::new()
            .chances([true, false, true])
            .values([30])
            .picks([1]);
        let mut state = state_with(dice).with_gauges(90, 4);

        let outcome = state.apply_tool(tool("urgent_call"));
        assert_eq!(outcome.event, Some(OfficeEvent::LeaveWorkNow));
        assert_eq!(outcome.gauges, Gauges { stress: 0, boss_alert: 5 });
    }

    #[test]
    fn test_awful_dinner_event() {
        let dice = ScriptedDice::new()
            .chances([true, false, true, false])
            .values([10])
            .picks([2]);
        let mut state = state_with(dice).with_gauges(85, 1);

        let outcome = state.apply_tool(tool("take_a_break"));
        assert_eq!(outcome.event, Some(OfficeEvent::AwfulDinner));
        assert_eq!(outcome.gauges, Gauges { stress: 100, boss_alert: 2 });
    }

    #[test]
    fn test_tick_stress_respects_interval() {
        let mut state = state_with(ScriptedDice::new());
        let start = Instant::now();

        assert_eq!(state.tick_stress(start + Duration::from_secs(59)), None);
        assert_eq!(
            state.tick_stress(start + Duration::from_secs(60)),
            Some(Gauges { stress: 1, boss_alert: 0 })
        );
        // timer restarted: nothing until another full interval passes
        assert_eq!(state.tick_stress(start + Duration::from_secs(100)), None);
        assert_eq!(
            state.tick_stress(start + Duration::from_secs(120)),
            Some(Gauges { stress: 2, boss_alert: 0 })
        );
    }

    #[test]
    fn test_tick_stress_caps_at_max() {
        let mut state = state_with(ScriptedDice::new()).with_gauges(100, 0);
        let later = Instant::now() + Duration::from_secs(60);
        assert_eq!(state.tick_stress(later), None);
        assert_eq!(state.gauges().stress, 100);
    }

    #[test]
    fn test_tick_cooldown() {
        let mut state = state_with(ScriptedDice::new()).with_gauges(0, 2);
        let start = Instant::now();

        assert_eq!(state.tick_cooldown(start + Duration::from_secs(9)), None);
        assert_eq!(
            state.tick_cooldown(start + Duration::from_secs(10)),
            Some(Gauges { stress: 0, boss_alert: 1 })
        );
        assert_eq!(
            state.tick_cooldown(start + Duration::from_secs(20)),
            Some(Gauges { stress: 0, boss_alert: 0 })
        );
        assert_eq!(state.tick_cooldown(start + Duration::from_secs(30)), None);
        assert_eq!(state.gauges().boss_alert, 0);
    }

    #[test]
    fn test_gauges_stay_in_bounds() {
        let mut state = AgentState::new(100, Duration::from_secs(1), Box::new(RngDice::seeded(1234)));
        let mut now = Instant::now();
        for (i, tool) in tools::all().iter().cycle().take(5_000).enumerate() {
            let outcome = state.apply_tool(tool);
            assert!(outcome.gauges.stress <= MAX_STRESS_LEVEL);
            assert!(outcome.gauges.boss_alert <= MAX_BOSS_ALERT_LEVEL);
            if i % 7 == 0 {
                now += Duration::from_secs(60);
                state.tick_stress(now);
                state.tick_cooldown(now);
                let g = state.gauges();
                assert!(g.stress <= MAX_STRESS_LEVEL);
                assert!(g.boss_alert <= MAX_BOSS_ALERT_LEVEL);
            }
        }
    }
}
