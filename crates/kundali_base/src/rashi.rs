//! Rashi (zodiac sign) identifiers and cyclic sign arithmetic.
//!
//! The zodiac is a cycle of 12 signs starting from Mesha (Aries). Signs are
//! numbered 1..=12 for display (the number shown in a chart's house) and
//! indexed 0..=11 for table lookups.

use serde::{Deserialize, Serialize};

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// Unicode zodiac symbol.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Mesha => "\u{2648}",
            Self::Vrishabha => "\u{2649}",
            Self::Mithuna => "\u{264A}",
            Self::Karka => "\u{264B}",
            Self::Simha => "\u{264C}",
            Self::Kanya => "\u{264D}",
            Self::Tula => "\u{264E}",
            Self::Vrischika => "\u{264F}",
            Self::Dhanu => "\u{2650}",
            Self::Makara => "\u{2651}",
            Self::Kumbha => "\u{2652}",
            Self::Meena => "\u{2653}",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrischika => 7,
            Self::Dhanu => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }

    /// 1-based sign number (Mesha=1 .. Meena=12), as drawn in a chart.
    pub const fn number(self) -> u8 {
        self.index() + 1
    }

    /// Rashi for a 0-based index. Returns None if index >= 12.
    pub fn from_index(index: u8) -> Option<Self> {
        ALL_RASHIS.get(index as usize).copied()
    }

    /// Rashi for a 1-based sign number. Returns None outside 1..=12.
    pub fn from_number(number: u8) -> Option<Self> {
        number.checked_sub(1).and_then(Self::from_index)
    }

    /// The n-th rashi counted from this one, 1-based (1 = same sign,
    /// 7 = opposite sign, 12 = previous sign). Wraps for any offset.
    pub const fn nth_from(self, offset: u8) -> Self {
        let idx = (self.index() as u16 + offset as u16 + 11) % 12;
        ALL_RASHIS[idx as usize]
    }
}

impl std::fmt::Display for Rashi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.western_name())
    }
}
