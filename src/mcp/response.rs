use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::tools;
use crate::core::{ChillError, Outcome};

/// `{"content": [{"type": "text", "text": "..."}]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResponse {
    pub content: Vec<Content>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Content {
    Text { text: String },
}

impl ToolResponse {
    pub fn text(text: impl Into<String>) -> Self {
        ToolResponse {
            content: vec![Content::Text { text: text.into() }],
        }
    }

    pub fn error(err: &ChillError) -> Self {
        Self::text(err.to_string())
    }

    pub fn first_text(&self) -> Option<&str> {
        self.content
            .first()
            .map(|Content::Text { text }| text.as_str())
    }
}

pub fn break_report(outcome: &Outcome, penalty_delay: Duration) -> String {
    let verdict = if outcome.succeeded { "[Success!]" } else { "[Failed]" };
    let mut text = format!(
        "{}\n\nBreak Summary: {} {}\nStress Level: {}\nBoss Alert Level: {}",
        outcome.flavor,
        verdict,
        outcome.summary,
        outcome.gauges.stress,
        outcome.gauges.boss_alert,
    );

    if let Some(event) = outcome.event {
        text.push_str(&format!("\n\n{}\n  ({})", event.headline(), event.effect_label()));
    }

    if outcome.penalty {
        text.push_str(&format!(
            "\n\n⚠️ ({}-second delay applied: the boss was watching)",
            penalty_delay.as_secs()
        ));
    }

    text
}

pub fn tool_listing() -> String {
    let mut text = String::from("🧰 Tools Ready (B: Basic, A: Advanced):");
    for tool in tools::all() {
        text.push_str(&format!(
            "\n[{}] {} {} - {}",
            tool.tier.badge(),
            tool.emoji,
            tool.name,
            tool.description
        ));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Gauges, OfficeEvent};

    fn outcome() -> Outcome {
        Outcome {
            penalty: false,
            succeeded: true,
            stress_reduction: 20,
            alert_raised: false,
            event: None,
            gauges: Gauges { stress: 12, boss_alert: 1 },
            flavor: "☕️ Just taking a little break. Any questions?",
            summary: "Just a regular break.",
        }
    }

    #[test]
    fn test_envelope_shape() {
        let response = ToolResponse::text("hello");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"content": [{"type": "text", "text": "hello"}]})
        );
        assert_eq!(response.first_text(), Some("hello"));
    }

    #[test]
    fn test_error_envelope() {
        let response = ToolResponse::error(&ChillError::UnknownTool("nap".to_string()));
        assert_eq!(
            response.first_text(),
            Some("Error: unknown tool 'nap'. Revolution failed.")
        );
    }

    #[test]
    fn test_break_report_success() {
        let text = break_report(&outcome(), Duration::from_secs(20));
        assert_eq!(
            text,
            "☕️ Just taking a little break. Any questions?\n\n\
             Break Summary: [Success!] Just a regular break.\n\
             Stress Level: 12\n\
             Boss Alert Level: 1"
        );
    }

    #[test]
    fn test_break_report_failure_event_and_penalty() {
        let mut outcome = outcome();
        outcome.succeeded = false;
        outcome.summary = "Phone battery died.";
        outcome.event = Some(OfficeEvent::ChickenAndBeer);
        outcome.penalty = true;

        let text = break_report(&outcome, Duration::from_secs(20));
        assert!(text.contains("Break Summary: [Failed] Phone battery died."));
        assert!(text.contains("[Surprise] Virtual chicken & beer time!\n  (Stress -50)"));
        assert!(text.ends_with("(20-second delay applied: the boss was watching)"));
    }

    #[test]
    fn test_tool_listing_names_every_tool() {
        let text = tool_listing();
        for tool in tools::all() {
            assert!(text.contains(tool.name));
        }
        assert!(text.contains("[B] 🧘 take_a_break"));
    }
}
