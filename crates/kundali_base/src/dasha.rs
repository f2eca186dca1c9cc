//! Mahadasha (major planetary period) timeline.
//!
//! The timeline is a fixed reference table of contiguous calendar-year
//! periods. A period is active for years in `[start_year, end_year)`.

use serde::Serialize;

use crate::graha::Graha;

/// A single mahadasha period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashaPeriod {
    /// The graha ruling this period.
    pub graha: Graha,
    /// Ruling planet's display name.
    pub planet: &'static str,
    /// Calendar year, inclusive.
    pub start_year: i32,
    /// Calendar year, exclusive.
    pub end_year: i32,
    pub description: &'static str,
}

impl DashaPeriod {
    pub const fn new(
        graha: Graha,
        start_year: i32,
        end_year: i32,
        description: &'static str,
    ) -> Self {
        Self {
            graha,
            planet: graha.english_name(),
            start_year,
            end_year,
            description,
        }
    }

    /// Whether `year` falls in `[start_year, end_year)`.
    pub const fn contains(&self, year: i32) -> bool {
        year >= self.start_year && year < self.end_year
    }

    /// Length of the period in years.
    pub const fn duration_years(&self) -> i32 {
        self.end_year - self.start_year
    }
}

/// Reference mahadasha table, in chronological order.
pub const MAHADASHA_TABLE: [DashaPeriod; 5] = [
    DashaPeriod::new(
        Graha::Shani,
        2015,
        2034,
        "Teaches discipline, patience, and responsibility through trials.",
    ),
    DashaPeriod::new(
        Graha::Buddh,
        2034,
        2051,
        "Sharpens intellect, communication, business, and analytical skills.",
    ),
    DashaPeriod::new(
        Graha::Ketu,
        2051,
        2058,
        "Creates detachment from material desires and inclines one toward spirituality.",
    ),
    DashaPeriod::new(
        Graha::Shukra,
        2058,
        2078,
        "Strengthens love, beauty, luxury, arts, and relationships.",
    ),
    DashaPeriod::new(
        Graha::Surya,
        2078,
        2084,
        "Brings focus on authority, self-expression, recognition, and career growth.",
    ),
];

/// Current period plus the ones that follow it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashaSelection {
    pub current: DashaPeriod,
    pub upcoming: Vec<DashaPeriod>,
}

/// Find the period active in `year`.
///
/// Falls back to the first period when no period contains the year.
/// Returns None only for an empty table.
pub fn find_active_period(periods: &[DashaPeriod], year: i32) -> Option<&DashaPeriod> {
    periods
        .iter()
        .find(|p| p.contains(year))
        .or_else(|| periods.first())
}

/// Periods starting strictly after `current` starts, in table order.
pub fn upcoming_periods(periods: &[DashaPeriod], current: &DashaPeriod) -> Vec<DashaPeriod> {
    periods
        .iter()
        .filter(|p| p.start_year > current.start_year)
        .copied()
        .collect()
}

/// Split a table into current and upcoming periods for `year`.
pub fn select_dashas(periods: &[DashaPeriod], year: i32) -> Option<DashaSelection> {
    let current = *find_active_period(periods, year)?;
    let upcoming = upcoming_periods(periods, &current);
    Some(DashaSelection { current, upcoming })
}

/// [`select_dashas`] over [`MAHADASHA_TABLE`].
pub fn mahadasha_for_year(year: i32) -> DashaSelection {
    select_dashas(&MAHADASHA_TABLE, year).unwrap_or_else(|| DashaSelection {
        current: MAHADASHA_TABLE[0],
        upcoming: MAHADASHA_TABLE[1..].to_vec(),
    })
}
