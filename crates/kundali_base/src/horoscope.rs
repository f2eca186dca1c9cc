//! Daily horoscope values shown on the horoscope tab.

use serde::{Deserialize, Serialize};

/// Fixed daily reading text.
pub const DAILY_DESCRIPTION: &str = "A day for practical dedication and quiet strength. \
Reliability deepens personal connections, while disciplined effort at work transforms \
mental pressure into steady progress.";

/// Fixed guidance paragraphs as (area, text).
pub const COSMIC_GUIDANCE: [(&str, &str); 2] = [
    (
        "Relationships",
        "Practical reliability and clear plans build trust in relationships today. \
Love feels practical, built on shared responsibilities rather than grand gestures.",
    ),
    (
        "Career",
        "Your focus is sharp today. Tackle complex problems that require analytical \
thinking. Avoid office politics and focus on your deliverables.",
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Energy {
    Low,
    Medium,
    High,
}

pub const ALL_ENERGIES: [Energy; 3] = [Energy::Low, Energy::Medium, Energy::High];

impl Energy {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Neutral,
    Happy,
    Stressed,
}

pub const ALL_MOODS: [Mood; 3] = [Mood::Neutral, Mood::Happy, Mood::Stressed];

impl Mood {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Neutral => "Neutral",
            Self::Happy => "Happy",
            Self::Stressed => "Stressed",
        }
    }
}

/// Randomly parameterized daily reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyHoroscope {
    /// Luck score in percent (60-95 from the generator).
    pub luck: u8,
    pub energy: Energy,
    pub mood: Mood,
    pub description: &'static str,
}

impl DailyHoroscope {
    /// Reading with the fixed description text.
    pub const fn new(luck: u8, energy: Energy, mood: Mood) -> Self {
        Self {
            luck,
            energy,
            mood,
            description: DAILY_DESCRIPTION,
        }
    }
}
