//! Bhava (house) types for a fixed-house North Indian chart.
//!
//! Houses never move in the diagram; the signs rotate through them. House 1
//! always holds the lagna (ascendant) and every other house's sign follows by
//! cyclic offset, so the whole mapping is determined by the lagna alone.

use serde::Serialize;

use crate::graha::Graha;
use crate::rashi::Rashi;

/// Number of houses in a chart.
pub const BHAVA_COUNT: usize = 12;

/// Offset between Rahu's and Ketu's houses.
pub const NODE_OPPOSITION: u8 = 6;

/// A graha placed in a house of a generated chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlacedGraha {
    pub graha: Graha,
    /// Display name shown in house listings.
    pub full_name: &'static str,
    /// Sign of the occupied house.
    pub rashi: Rashi,
    /// Degrees within the sign, [0, 30) with two decimals.
    pub degree: f64,
    pub retrograde: bool,
    /// Occupied house number (1-12).
    pub bhava: u8,
}

impl PlacedGraha {
    pub const fn new(
        graha: Graha,
        rashi: Rashi,
        degree: f64,
        retrograde: bool,
        bhava: u8,
    ) -> Self {
        Self {
            graha,
            full_name: graha.english_name(),
            rashi,
            degree,
            retrograde,
            bhava,
        }
    }
}

/// One of the 12 fixed houses with the sign it holds and its occupants.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bhava {
    /// House number (1-12).
    pub number: u8,
    pub rashi: Rashi,
    /// Occupants in placement order.
    pub grahas: Vec<PlacedGraha>,
}

impl Bhava {
    /// Whether this is the lagna house.
    pub const fn is_lagna(&self) -> bool {
        self.number == 1
    }

    /// Ordinal label ("1st", "2nd", "3rd", "4th", ...).
    pub fn ordinal(&self) -> String {
        bhava_ordinal(self.number)
    }

    /// Life-domain significations of this house.
    pub fn traits(&self) -> &'static [&'static str; 3] {
        bhava_traits(self.number)
    }
}

/// Sign held by house `number` (1-12) for a given lagna.
///
/// sign = ((lagna - 1) + (number - 1)) mod 12, back in the 1..=12 range.
pub const fn bhava_rashi(lagna: Rashi, number: u8) -> Rashi {
    lagna.nth_from(number)
}

/// Build the 12 empty houses for a lagna.
pub fn build_bhavas(lagna: Rashi) -> Vec<Bhava> {
    (1..=BHAVA_COUNT as u8)
        .map(|number| Bhava {
            number,
            rashi: bhava_rashi(lagna, number),
            grahas: Vec::new(),
        })
        .collect()
}

/// Ketu's 0-based house index for Rahu's 0-based house index.
///
/// Indices of 12 and above wrap around the chart first.
pub const fn ketu_house_index(rahu_index: u8) -> u8 {
    (rahu_index % BHAVA_COUNT as u8 + NODE_OPPOSITION) % BHAVA_COUNT as u8
}

/// 0-based house indices of (Rahu, Ketu) for a given Rahu index.
pub const fn node_pair(rahu_index: u8) -> (u8, u8) {
    (rahu_index % BHAVA_COUNT as u8, ketu_house_index(rahu_index))
}

/// Ordinal label for a house number. Only 1, 2 and 3 take irregular suffixes.
pub fn bhava_ordinal(number: u8) -> String {
    match number {
        1 => "1st".to_string(),
        2 => "2nd".to_string(),
        3 => "3rd".to_string(),
        n => format!("{n}th"),
    }
}

const BHAVA_TRAITS: [[&str; 3]; BHAVA_COUNT] = [
    ["PERSONALITY", "FAME", "PHYSIQUE"],
    ["WEALTH", "SPEECH", "FAMILY"],
    ["SIBLINGS", "COURAGE", "EFFORT"],
    ["MOTHER", "COMFORT", "HOME"],
    ["CHILDREN", "WISDOM", "ROMANCE"],
    ["ENEMIES", "DISEASE", "DEBT"],
    ["MARRIAGE", "PARTNERSHIP", "BUSINESS"],
    ["LONGEVITY", "TRANSFORMATION", "OCCULT"],
    ["LUCK", "RELIGION", "FATHER"],
    ["CAREER", "STATUS", "AUTHORITY"],
    ["GAINS", "FRIENDS", "NETWORK"],
    ["LOSSES", "SPIRITUALITY", "FOREIGN"],
];

/// Significations for house `number`. Numbers outside 1..=12 wrap.
pub fn bhava_traits(number: u8) -> &'static [&'static str; 3] {
    &BHAVA_TRAITS[(number as usize + BHAVA_COUNT - 1) % BHAVA_COUNT]
}
