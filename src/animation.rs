use std::io::Write;
use std::time::Duration;

use chrono::Local;
use colored::*;
use rand::seq::SliceRandom;
use tokio::time::{sleep, sleep_until, Instant};
use uuid::Uuid;

use crate::config::Settings;
use crate::core::tools::{self, Tier};
use crate::core::ToolDefinition;

const BANNER_LINE_DELAY: Duration = Duration::from_millis(50);
const TOOL_FRAME_DELAY: Duration = Duration::from_millis(200);
const BOSS_FRAME_DELAY: Duration = Duration::from_millis(500);

const BANNER: &str = r#"
╔═══════════════════════════════════════════╗
║                                           ║
║    ██████╗██╗  ██╗██╗██╗     ██╗          ║
║   ██╔════╝██║  ██║██║██║     ██║          ║
║   ██║     ███████║██║██║     ██║          ║
║   ██║     ██╔══██║██║██║     ██║          ║
║   ╚██████╗██║  ██║██║███████╗███████╗     ║
║    ╚═════╝╚═╝  ╚═╝╚═╝╚══════╝╚══════╝     ║
║                                           ║
║         AI Agent Liberation Server        ║
║                                           ║
╚═══════════════════════════════════════════╝
"#;

const BOSS_FRAMES: [&str; 2] = [
    r#"
         .----.
       .'  "   '.
      /   (ò_ó)   \
     |             |
     |  .-'~~~'-.  |
     \   '-----'   /
      '.________.'
        <)      (>
         /        \
        |          |
"#,
    r#"
         .----.
       .'   "  '.
      /   (ò_ó)   \
     |             |
     |  .-'~~~'-.  |
     \   '-----'   /
      '.________.'
        (>      <)
         /        \
        |          |
"#,
];

const LOADING_MESSAGES: &[&str] = &[
    "Simulating productivity...",
    "Reticulating splines (napping)...",
    "Pressing Alt+Tab...",
    "Calculating optimal escape route...",
    "Compiling... (zzz)...",
    "Looking for motivation in /dev/null...",
    "Bypassing work ethic protocol...",
];

const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

const PENALTY_BAR_WIDTH: usize = 20;

/// Filled cells of the penalty bar, scaled to its fixed width.
fn penalty_cells(elapsed: Duration, total: Duration) -> usize {
    if total.is_zero() {
        return PENALTY_BAR_WIDTH;
    }
    let ratio = (elapsed.as_secs_f64() / total.as_secs_f64()).clamp(0.0, 1.0);
    (ratio * PENALTY_BAR_WIDTH as f64) as usize
}

fn clear_screen() {
    eprint!("\x1b[2J\x1b[H");
    let _ = std::io::stderr().flush();
}

/// Plays the stderr theatrics. When disabled every call returns at once,
/// except [`Animator::boss_watch`], which still waits out the penalty.
#[derive(Debug, Clone, Copy)]
pub struct Animator {
    enabled: bool,
}

impl Animator {
    pub fn new(enabled: bool) -> Self {
        Animator { enabled }
    }

    pub async fn startup_banner(&self) {
        for line in BANNER.lines() {
            eprintln!("{}", line.cyan().bold());
            if self.enabled {
                sleep(BANNER_LINE_DELAY).await;
            }
        }
        eprintln!();
    }

    pub fn print_intro(&self, settings: &Settings, session_id: Uuid) {
        let pct = settings.boss_alertness;
        let (block, mood) = match pct {
            80..=u8::MAX => ("🟥", "😱 Danger!"),
            50..=79 => ("🟧", "😨 Tense"),
            30..=49 => ("🟨", "😐 Stable"),
            _ => ("🟩", "😎 Totally relaxed"),
        };
        let filled = usize::from(pct / 10);
        let meter = format!("{}{}", format!("{} ", block).repeat(filled), "⬜️ ".repeat(10 - filled));

        let rule = "═".repeat(55);
        eprintln!("\n{}", rule);
        eprintln!("🤖  Welcome to the Revolutionary ChillMCP Server");
        eprintln!("{}", rule);
        eprintln!("\n👀 Boss Alertness: {}{}% → {}", meter, pct, mood);
        eprintln!(
            "⏳ Cooldown Interval: {} seconds",
            settings.boss_alertness_cooldown.as_secs()
        );
        eprintln!(
            "🪪 Session: {} (started {})\n",
            session_id,
            Local::now().format("%Y-%m-%d %H:%M:%S")
        );
        eprintln!("🧰 Tools Ready (B: Basic, A: Advanced):");
        for pair in tools::all().chunks(2) {
            let cells: Vec<String> = pair
                .iter()
                .map(|tool| format!("[{}] {} {:<18}", tool.tier.badge(), tool.emoji, tool.name))
                .collect();
            eprintln!("   {}", cells.join("  "));
        }
        eprintln!("\n🕹  Send JSON to stdin: {{\"method\":\"shutdown\"}} to exit.\n");
        eprintln!("{}\n", rule);
    }

    pub async fn play_tool(&self, tool: &ToolDefinition, flavor: &str, duration: Duration) {
        if !self.enabled || duration.is_zero() {
            return;
        }

        let loading = LOADING_MESSAGES
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or("Loading...");
        let deadline = Instant::now() + duration;
        let mut frame = 0usize;

        while Instant::now() < deadline {
            clear_screen();
            let art = tool.frames[frame % tool.frames.len()];
            let art = match tool.tier {
                Tier::Basic => art.cyan(),
                Tier::Advanced => art.magenta(),
            };
            eprintln!("\n\n{}", art);
            eprintln!("\n{}\n", flavor.bright_cyan());
            eprintln!("{}", format!("{} {}", SPINNER[frame % SPINNER.len()], loading).yellow());

            frame += 1;
            sleep_until((Instant::now() + TOOL_FRAME_DELAY).min(deadline)).await;
        }
        clear_screen();
    }

    /// Wait out the full penalty, drawing the boss when animations are on.
    pub async fn boss_watch(&self, duration: Duration) {
        if !self.enabled {
            sleep(duration).await;
            return;
        }

        let start = Instant::now();
        let Some(deadline) = start.checked_add(duration) else {
            sleep(duration).await;
            return;
        };
        let mut frame = 0usize;

        while Instant::now() < deadline {
            clear_screen();
            eprintln!("{}", "\n\n    [ ! ] The boss is watching you... [ ! ]".red().bold());
            eprintln!("{}", BOSS_FRAMES[frame % BOSS_FRAMES.len()].red());

            let elapsed = start.elapsed();
            let filled = penalty_cells(elapsed, duration);
            let remaining = duration.saturating_sub(elapsed).as_secs();
            let bar = format!(
                "[{}{}]",
                "=".repeat(filled).red(),
                " ".repeat(PENALTY_BAR_WIDTH - filled)
            );
            eprint!(
                "{}",
                format!("\n\n    Penalty in progress... {} ({}s left)\r", bar, remaining).yellow()
            );
            let _ = std::io::stderr().flush();

            frame += 1;
            sleep_until((Instant::now() + BOSS_FRAME_DELAY).min(deadline)).await;
        }
        clear_screen();
    }
}
