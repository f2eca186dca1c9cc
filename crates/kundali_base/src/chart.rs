//! Generated chart aggregate.

use serde::Serialize;

use crate::bhava::Bhava;
use crate::birth::BirthDetails;
use crate::dasha::DashaPeriod;
use crate::graha::Graha;
use crate::horoscope::DailyHoroscope;
use crate::rashi::Rashi;

/// A complete generated chart. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartResult {
    /// Lagna (ascendant) sign, held by house 1.
    pub ascendant: Rashi,
    /// Houses 1-12 in order.
    pub bhavas: Vec<Bhava>,
    pub details: BirthDetails,
    pub daily_horoscope: DailyHoroscope,
    pub current_mahadasha: DashaPeriod,
    /// Periods after the current one, in table order.
    pub next_mahadashas: Vec<DashaPeriod>,
}

impl ChartResult {
    /// House with the given number (1-12).
    pub fn bhava(&self, number: u8) -> Option<&Bhava> {
        self.bhavas.iter().find(|b| b.number == number)
    }

    /// 0-based house index occupied by a graha.
    pub fn house_index_of(&self, graha: Graha) -> Option<usize> {
        self.bhavas
            .iter()
            .position(|b| b.grahas.iter().any(|p| p.graha == graha))
    }
}
