//! Birth details captured from the user.

use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Birth details as submitted.
///
/// Latitude and longitude are carried for a future ephemeris-backed
/// generator; the mock generator ignores every field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthDetails {
    pub name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    /// Degrees north. Always 0.0 from the input form.
    pub latitude: f64,
    /// Degrees east. Always 0.0 from the input form.
    pub longitude: f64,
}

impl BirthDetails {
    /// Details without coordinates.
    pub fn new(
        name: impl Into<String>,
        date: NaiveDate,
        time: NaiveTime,
        location: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            date,
            time,
            location: location.into(),
            latitude: 0.0,
            longitude: 0.0,
        }
    }

    /// Calendar year of birth.
    pub fn birth_year(&self) -> i32 {
        self.date.year()
    }
}
