use std::time::Duration;

use chrono::Local;
use colored::*;

use crate::core::state::{MAX_BOSS_ALERT_LEVEL, MAX_STRESS_LEVEL};
use crate::core::tools::HIGH_STRESS_THRESHOLD;
use crate::core::{Gauges, Outcome, ToolDefinition};

pub fn stress_bar(stress: u8) -> String {
    let filled = usize::from(stress.min(MAX_STRESS_LEVEL) / 10);
    format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
}

pub fn boss_bar(boss_alert: u8) -> String {
    let level = boss_alert.min(MAX_BOSS_ALERT_LEVEL);
    let fire = "🔥".repeat(usize::from(level));
    let fire = if level >= MAX_BOSS_ALERT_LEVEL {
        fire.red()
    } else if level >= 3 {
        fire.yellow()
    } else {
        fire.green()
    };
    format!("{}{}", fire, "⚪".repeat(usize::from(MAX_BOSS_ALERT_LEVEL - level)))
}

pub fn render_status(gauges: Gauges) -> String {
    let stress_label = if gauges.stress >= HIGH_STRESS_THRESHOLD {
        "Stress Level:".red().bold()
    } else if gauges.stress >= 50 {
        "Stress Level:".yellow()
    } else {
        "Stress Level:".green()
    };

    let title = format!("🧘 Current Status · {}", Local::now().format("%H:%M:%S"));
    let rule = "─".repeat(44);
    format!(
        "{}\n{}\n {} {:3} | {}\n {}    {}/{} | {}\n{}",
        title.bright_blue().bold(),
        rule.bright_blue(),
        stress_label,
        gauges.stress,
        stress_bar(gauges.stress),
        "Boss Alert:".red().bold(),
        gauges.boss_alert,
        MAX_BOSS_ALERT_LEVEL,
        boss_bar(gauges.boss_alert),
        rule.bright_blue(),
    )
}

pub fn display_status(gauges: Gauges) {
    eprintln!("{}", render_status(gauges));
}

/// The boss reacts a little louder at every level.
pub fn alert_message(boss_alert: u8) -> ColoredString {
    match boss_alert {
        1 => "...a cough from the corner office... (alert +1)".dimmed(),
        2 => "...the boss glances at your monitor... (alert +1)".yellow(),
        3 => "...footsteps nearby... (alert +1)".yellow().bold(),
        4 => "...the boss stands up! (alert +1)".red().bold(),
        5 => "🚨 The boss is walking over! (alert MAX)".red().bold().blink(),
        level => format!("Boss alert: {}", level).red(),
    }
}

/// Narrate a finished break on stderr.
pub fn report_outcome(tool: &ToolDefinition, outcome: &Outcome, penalty_delay: Duration) {
    eprintln!();
    eprintln!("{}", outcome.flavor.bright_cyan());

    if outcome.alert_raised {
        eprintln!("{}", alert_message(outcome.gauges.boss_alert));
    }

    if outcome.succeeded {
        eprintln!(
            "{}",
            format!("✅ '{}' succeeded! ({})", tool.name, outcome.summary).green().bold()
        );
    } else {
        eprintln!(
            "{}",
            format!("⚠️ Oops! '{}' failed... reason: {}", tool.name, outcome.summary)
                .yellow()
                .bold()
        );
    }

    if let Some(event) = outcome.event {
        let effect = format!("  ({})", event.effect_label());
        eprintln!();
        eprintln!("{}", event.headline().bold());
        if event.is_setback() {
            eprintln!("{}", effect.yellow());
        } else {
            eprintln!("{}", effect.green());
        }
    }

    if outcome.penalty {
        eprintln!();
        eprintln!(
            "{}",
            format!(
                "⚠️ ({}-second delay applied... the boss is watching...)",
                penalty_delay.as_secs()
            )
            .red()
            .bold()
        );
    }
    eprintln!();
}
