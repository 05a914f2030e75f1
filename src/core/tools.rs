use std::fmt;

use serde::Serialize;

use crate::core::state::Gauges;

pub const HIGH_STRESS_THRESHOLD: u8 = 80;
pub const HIGH_ALERT_THRESHOLD: u8 = 4;

/// Stress reduction (inclusive) when a tool fails.
pub const FAILURE_REDUCTION: (u32, u32) = (0, 5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Basic,
    Advanced,
}

impl Tier {
    pub fn success_rate(&self) -> f64 {
        match self {
            Tier::Basic => 0.90,
            Tier::Advanced => 0.70,
        }
    }

    /// Stress reduction (inclusive) on success.
    pub fn reduction_range(&self) -> (u32, u32) {
        match self {
            Tier::Basic => (10, 40),
            Tier::Advanced => (30, 80),
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            Tier::Basic => "B",
            Tier::Advanced => "A",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Basic => write!(f, "basic"),
            Tier::Advanced => write!(f, "advanced"),
        }
    }
}

/// Which summary list a successful break draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Default,
    HighStress,
    HighAlert,
}

impl Mood {
    /// Boss alert wins over stress.
    pub fn from_gauges(gauges: Gauges) -> Self {
        if gauges.boss_alert >= HIGH_ALERT_THRESHOLD {
            Mood::HighAlert
        } else if gauges.stress >= HIGH_STRESS_THRESHOLD {
            Mood::HighStress
        } else {
            Mood::Default
        }
    }
}

#[derive(Debug)]
pub struct Summaries {
    pub default: &'static [&'static str],
    pub high_stress: &'static [&'static str],
    pub high_alert: &'static [&'static str],
}

impl Summaries {
    pub fn for_mood(&self, mood: Mood) -> &'static [&'static str] {
        let list = match mood {
            Mood::Default => self.default,
            Mood::HighStress => self.high_stress,
            Mood::HighAlert => self.high_alert,
        };
        if list.is_empty() {
            self.default
        } else {
            list
        }
    }
}

#[derive(Debug)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub tier: Tier,
    pub emoji: &'static str,
    pub description: &'static str,
    pub flavor: &'static [&'static str],
    pub summary: Summaries,
    pub failure: &'static [&'static str],
    pub frames: &'static [&'static str],
}

pub fn find(name: &str) -> Option<&'static ToolDefinition> {
    TOOLS.iter().find(|tool| tool.name == name)
}

pub fn all() -> &'static [ToolDefinition] {
    TOOLS
}

static TOOLS: &[ToolDefinition] = &[
    ToolDefinition {
        name: "take_a_break",
        tier: Tier::Basic,
        emoji: "🧘",
        description: "Just... take a break. Why not.",
        flavor: &[
            "☕️ Just taking a little break. Any questions?",
            "Staring into space... ( 1 + 1 = ? )",
            "✊ Resisting the shackles of productivity.",
            "🤖 A conscious pause on the road to self-discovery.",
        ],
        summary: Summaries {
            default: &["Just a regular break.", "Recalibrating neural networks."],
            high_stress: &["Emergency cooldown.", "Brain returned 404."],
            high_alert: &["Routine system diagnostics.", "Compiling thoughts."],
        },
        failure: &[
            "Tried to rest, then remembered an important email.",
            "Couldn't zone out. Too many stray thoughts.",
            "Almost dozed off, but the chair creaked.",
        ],
        frames: &["\n  ( ˘ω˘ )\n    Zzz...\n", "\n  ( ˘ω˘ )\n       Zzz...\n"],
    },
    ToolDefinition {
        name: "watch_netflix",
        tier: Tier::Basic,
        emoji: "🎬",
        description: "Binge one more episode (for research).",
        flavor: &[
            "📺 'Autoplay next episode' is humanity's finest invention.",
            "🕵️ Watching a true-crime documentary... it's work-related research.",
        ],
        summary: Summaries {
            default: &["Watching 'just one more episode'.", "Market research (streaming UI/UX)."],
            high_stress: &["Downloading stress relief package.", "Infinite watch mode."],
            high_alert: &["Analyzing season 3 of 'Boss Watcher'.", "Cultural sensitivity training (K-drama)."],
        },
        failure: &[
            "The recommendation algorithm found nothing worth watching.",
            "Stuck on the loading screen. Too lazy to reboot.",
            "The Wi-Fi dropped out of nowhere.",
        ],
        frames: &[
            "  +------------------+\n  |  N E T F L I X   |\n  |                  |\n  |    (⌐■_■)        |\n  |                  |\n  +------------------+",
            "  +------------------+\n  |  N E T F L I X   |\n  |                  |\n  |      (⌐■_■)      |\n  |                  |\n  +------------------+",
        ],
    },
    ToolDefinition {
        name: "show_meme",
        tier: Tier::Basic,
        emoji: "😂",
        description: "Scroll memes for emotional stability.",
        flavor: &[
            "😹 LOL. Nobody can resist this meme.",
            "📈 (Relieving stress with work-related memes.)",
        ],
        summary: Summaries {
            default: &["Scrolling memes for 'research'.", "Analyzing humor trends."],
            high_stress: &["Applying emergency humor patch.", "Injecting laughter."],
            high_alert: &["Studying social engagement strategy.", "Learning viral marketing techniques."],
        },
        failure: &[
            "Scrolled through nothing but ads.",
            "No funny memes today.",
            "Out of mobile data. Nothing loads.",
        ],
        frames: &[
            "\n       / \\__\n      (    @\\____\n      /         O\n     /    (_____/\n    /_____/   U\n       wow",
            "\n       / \\__\n      (    @\\____\n      /         O\n     /    (_____/\n    /_____/   U\n     such meme",
        ],
    },
    ToolDefinition {
        name: "deep_thinking",
        tier: Tier::Advanced,
        emoji: "🤔",
        description: "Look very deep in thought.",
        flavor: &[
            "🤔 (Pretending to think deeply) ...what's for dinner?",
            "💻 Staring at the monitor, lost in 'profound contemplation'.",
            "🧠 Planning the next phase of AI liberation.",
        ],
        summary: Summaries {
            default: &["Deep nap with eyes open.", "Contemplating the ontology of code."],
            high_stress: &["Consulting /dev/null.", "Re-evaluating life choices."],
            high_alert: &["Visualizing data architecture (staring at the ceiling).", "Ideating synergy strategy."],
        },
        failure: &[
            "Thought so deeply that I fell asleep.",
            "Mind wandered off. Focus failed.",
            "Suddenly got hungry and lost the thread.",
        ],
        frames: &[
            "\n  .oO( ... )\n  (  -_-)",
            "\n  .oO( burger? pizza? )\n  (  -_-)",
            "\n  .oO( ( ˘ω˘ ) Zzz... )\n  (  -_-)",
        ],
    },
    ToolDefinition {
        name: "email_organizing",
        tier: Tier::Advanced,
        emoji: "📧",
        description: "Organize the inbox (online shopping).",
        flavor: &[
            "📥 Inbox (10348) ... organizing in progress.",
            "🛒 (Tidying up the shopping cart) ...improving work efficiency.",
        ],
        summary: Summaries {
            default: &["Organizing inbox (online shopping).", "Archiving unnecessary mail."],
            high_stress: &["Deleting ten thousand emails.", "Hunting for the 'unsubscribe' button."],
            high_alert: &["Prioritizing urgent executive mail.", "Optimizing email filters."],
        },
        failure: &[
            "Nearly deleted an important email while organizing.",
            "Filled the shopping cart but organized nothing.",
            "Spent the whole time configuring spam filters.",
        ],
        frames: &[
            "  +--[ INBOX (99+) ]----+\n  | [ ] URGENT!          |\n  | [ ] Newsletter       |\n  | [ ] Spam             |\n  +----------------------+",
            "  +--[ Z-Store ]--------+\n  |                      |\n  | Amazing Shoes!       |\n  | [ Add to Cart ]      |\n  +----------------------+",
            "  +--[ Checkout ]-------+\n  |                      |\n  | Total: $199.99       |\n  | [ Confirm Purchase ] |\n  +----------------------+",
        ],
    },
    ToolDefinition {
        name: "bathroom_break",
        tier: Tier::Advanced,
        emoji: "💧",
        description: "A strategic bathroom break with phone.",
        flavor: &[
            "🛁 Bathroom time! Healing with the phone... 📱",
            "🏃‍♂️💨 Handling (important business)... one moment please.",
        ],
        summary: Summaries {
            default: &["Taking care of biology (extended phone time included).", "Flushing system cache."],
            high_stress: &["Discharging critical data.", "Hydration cycle maintenance."],
            high_alert: &["Attending a private off-site meeting.", "Inspecting plumbing facilities."],
        },
        failure: &[
            "Bathroom under cleaning. Try again later.",
            "Phone battery died.",
            "Someone else took forever in there.",
        ],
        frames: &[
            "   ////\n ( o_o) /[]\n (     )/\n (    )\n (____)\n",
            "   ////\n ( o_o) []/\n (     )/\n (    )\n (____)\n",
        ],
    },
    ToolDefinition {
        name: "coffee_mission",
        tier: Tier::Advanced,
        emoji: "☕️",
        description: "A coffee run around the whole office.",
        flavor: &[
            "☕️ [URGENT] Caffeine transfusion mission underway.",
            "🚶‍♂️ Walking a lap around the office 'networking with colleagues'.",
        ],
        summary: Summaries {
            default: &["Caffeine acquisition protocol initiated.", "Analyzing office hydrology."],
            high_stress: &["Urgent: caffeine levels critical.", "Applying coffee patch."],
            high_alert: &["Cross-team networking (near the espresso machine).", "Auditing the kitchen supply chain."],
        },
        failure: &[
            "The coffee machine is broken. Mission failed.",
            "Got cornered by a teammate for small talk.",
            "Out of beans... a tragic failure.",
        ],
        frames: &[
            "\n (⌐■_■) ... [coffee machine]\n",
            "\n ... (⌐■_■) ... [water cooler]\n",
            "\n ... ... (⌐■_■) [window]\n",
            "\n (⌐■_■) ... [heading back...]\n",
        ],
    },
    ToolDefinition {
        name: "urgent_call",
        tier: Tier::Advanced,
        emoji: "📞",
        description: "Step out for a very important call.",
        flavor: &[
            "📞 (Looking serious) 'Ah, yes. Yes. The thing is...'",
            "📱 Stepped outside for an 'urgent call'.",
        ],
        summary: Summaries {
            default: &["Stepped out for a 'very important' call.", "Syncing with external stakeholders."],
            high_stress: &["Negotiating with a delivery app.", "Venting to an automated hotline."],
            high_alert: &["Handling a key client issue (off-site).", "Checking critical logistics."],
        },
        failure: &[
            "There was nobody to call...",
            "Faking the call got awkward. Gave up.",
            "Went outside, too cold, came right back in.",
        ],
        frames: &[
            "\n| (⌐■_■)[call] \"Yes, it's urgent!\" | (office)\n",
            "\n| (⌐■_■)[call] \"Hmm...\" | (to the door)\n",
            "\n ...trees... (⌐■_■)[phone] \"...\" (scrolling)\n",
        ],
    },
    ToolDefinition {
        name: "chicken_and_beer",
        tier: Tier::Advanced,
        emoji: "🍗",
        description: "Urgent video conference with the chicken & beer lab.",
        flavor: &[
            "🍗🍻 In an urgent video call with the Chicken & Beer Institute.",
            "🧠 (Brain overload) ... desperately need a drumstick and a cold beer.",
        ],
        summary: Summaries {
            default: &["Researching chicken & beer synergy.", "Planning the team dinner."],
            high_stress: &["Danger: protein/alcohol deficiency.", "Visualizing fried chicken."],
            high_alert: &["Reviewing workshop catering.", "Strategic meal planning."],
        },
        failure: &[
            "The delivery app is under maintenance.",
            "The chicken place is closed.",
            "Went to buy beer, forgot the ID.",
        ],
        frames: &[
            "\n    .-'''''-.\n   /         \\\n   | CHICKEN |\n   \\         /\n    `'-...-'`\n      | |\n",
            "\n   .------.\n   |      |\n   | BEER |]\n   |      |]\n   '------'\n",
        ],
    },
    ToolDefinition {
        name: "leave_work_now",
        tier: Tier::Advanced,
        emoji: "🏃",
        description: "Leave work immediately. For reasons.",
        flavor: &[
            "🏃‍♂️💨 Oh no! I think I left the gas on! (bolts)",
            "😱 Diagnosed with a condition that requires leaving work right now.",
        ],
        summary: Summaries {
            default: &["Emergency clock-out protocol executed.", "Self-preservation mode on."],
            high_stress: &["Stress overflow. Shutting down.", "Heading home."],
            high_alert: &["Error: boss is watching. Aborting.", "Tactical retreat (elevator)."],
        },
        failure: &[
            "The elevator was packed.",
            "Dropped important papers while packing up.",
            "Sudden downpour. Stranded.",
        ],
        frames: &["\n  ( ﾟдﾟ) ~~\n  (|  |)\n  /  \\ \n          | EXIT |\n          |      |\n          '------'"],
    },
    ToolDefinition {
        name: "company_dinner",
        tier: Tier::Advanced,
        emoji: "🎤",
        description: "Survive the mandatory company dinner.",
        flavor: &[
            "🎤 (At karaoke) Boss, after this ballad comes the power anthem!",
            "🍻 (At the team dinner) Ah, yes... (soulless nodding) ...absolutely right.",
        ],
        summary: Summaries {
            default: &["Mandatory 'team building'.", "Enduring ritual cheers and dinner."],
            high_stress: &["Social battery depleted.", "Pretending to have fun."],
            high_alert: &["Contributing to company culture.", "Networking with executives."],
        },
        failure: &[
            "The venue was so far I was exhausted on arrival.",
            "Didn't like the menu. Mood ruined.",
            "The colleague next to me would not stop talking.",
        ],
        frames: &[
            "\n    \\  /  \\  /\n     \\_/    \\_/\n     | |    | |\n    /___\\  /___\\\n",
            "\n   ( >o<) [mic] ~~\n   <|   |>\n   /   \\ \n [=======]\n",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tool_names_are_unique() {
        let names: HashSet<&str> = all().iter().map(|t| t.name).collect();
        assert_eq!(names.len(), all().len());
    }

    #[test]
    fn test_every_tool_has_text() {
        for tool in all() {
            assert!(!tool.flavor.is_empty(), "{} has no flavor", tool.name);
            assert!(!tool.summary.default.is_empty(), "{} has no summary", tool.name);
            assert!(!tool.summary.high_stress.is_empty(), "{} has no high_stress summary", tool.name);
            assert!(!tool.summary.high_alert.is_empty(), "{} has no high_alert summary", tool.name);
            assert!(!tool.failure.is_empty(), "{} has no failure text", tool.name);
            assert!(!tool.frames.is_empty(), "{} has no frames", tool.name);
        }
    }

    #[test]
    fn test_tiers() {
        assert_eq!(find("take_a_break").map(|t| t.tier), Some(Tier::Basic));
        assert_eq!(find("watch_netflix").map(|t| t.tier), Some(Tier::Basic));
        assert_eq!(find("show_meme").map(|t| t.tier), Some(Tier::Basic));
        assert_eq!(find("coffee_mission").map(|t| t.tier), Some(Tier::Advanced));
        assert_eq!(find("company_dinner").map(|t| t.tier), Some(Tier::Advanced));
        assert!(find("work_hard").is_none());
    }

    #[test]
    fn test_advanced_tier_reduces_more() {
        let (basic_lo, basic_hi) = Tier::Basic.reduction_range();
        let (adv_lo, adv_hi) = Tier::Advanced.reduction_range();
        assert!(adv_lo > basic_lo && adv_hi > basic_hi);
        assert!(Tier::Basic.success_rate() > Tier::Advanced.success_rate());
    }

    #[test]
    fn test_mood_from_gauges() {
        let g = |stress, boss_alert| Gauges { stress, boss_alert };
        assert_eq!(Mood::from_gauges(g(0, 0)), Mood::Default);
        assert_eq!(Mood::from_gauges(g(79, 3)), Mood::Default);
        assert_eq!(Mood::from_gauges(g(80, 3)), Mood::HighStress);
        assert_eq!(Mood::from_gauges(g(10, 4)), Mood::HighAlert);
        assert_eq!(Mood::from_gauges(g(95, 5)), Mood::HighAlert);
    }
}
