use crate::core::dice::Dice;

/// Chance that a break triggers a random office event.
pub const RANDOM_EVENT_CHANCE: f64 = 0.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjust {
    Keep,
    By(i16),
    To(u8),
}

impl Adjust {
    pub fn apply(&self, value: u8, max: u8) -> u8 {
        match *self {
            Adjust::Keep => value,
            Adjust::By(delta) => (i16::from(value) + delta).clamp(0, i16::from(max)) as u8,
            Adjust::To(target) => target.min(max),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfficeEvent {
    ChickenAndBeer,
    LeaveWorkNow,
    LuckyDinner,
    AwfulDinner,
}

impl OfficeEvent {
    /// Three equally likely events; the company dinner is a coin flip
    /// between a lucky and an awful one.
    pub fn roll(dice: &mut dyn Dice) -> Self {
        match dice.pick(3) {
            0 => OfficeEvent::ChickenAndBeer,
            1 => OfficeEvent::LeaveWorkNow,
            _ => {
                if dice.chance(0.5) {
                    OfficeEvent::LuckyDinner
                } else {
                    OfficeEvent::AwfulDinner
                }
            }
        }
    }

    pub fn stress(&self) -> Adjust {
        match self {
            OfficeEvent::ChickenAndBeer => Adjust::By(-50),
            OfficeEvent::LeaveWorkNow => Adjust::To(0),
            OfficeEvent::LuckyDinner => Adjust::By(-40),
            OfficeEvent::AwfulDinner => Adjust::By(30),
        }
    }

    pub fn boss_alert(&self) -> Adjust {
        match self {
            OfficeEvent::ChickenAndBeer => Adjust::Keep,
            OfficeEvent::LeaveWorkNow => Adjust::By(2),
            OfficeEvent::LuckyDinner => Adjust::By(-1),
            OfficeEvent::AwfulDinner => Adjust::By(1),
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            OfficeEvent::ChickenAndBeer => "🍗🍻 [Surprise] Virtual chicken & beer time!",
            OfficeEvent::LeaveWorkNow => "🏃‍♂️💨 [Surprise] Instant clock-out mode!",
            OfficeEvent::LuckyDinner => "🎉🍻 [Surprise] A lucky company dinner!",
            OfficeEvent::AwfulDinner => "😩🎤 [Surprise] A dreadful company dinner...",
        }
    }

    pub fn effect_label(&self) -> &'static str {
        match self {
            OfficeEvent::ChickenAndBeer => "Stress -50",
            OfficeEvent::LeaveWorkNow => "Stress 0, Alert +2",
            OfficeEvent::LuckyDinner => "Stress -40, Alert -1",
            OfficeEvent::AwfulDinner => "Stress +30, Alert +1",
        }
    }

    /// Whether the event made things worse for the agent.
    pub fn is_setback(&self) -> bool {
        matches!(self, OfficeEvent::AwfulDinner)
    }
}
