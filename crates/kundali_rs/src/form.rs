//! Birth details form: raw text fields and their validation.

use chrono::{NaiveDate, NaiveTime};
use kundali_base::{BirthDetails, KundaliError};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];

/// Form contents as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BirthForm {
    pub name: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    /// `HH:MM` or `HH:MM:SS`.
    pub time: String,
    pub location: String,
}

impl BirthForm {
    pub fn new(
        name: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
            time: time.into(),
            location: location.into(),
        }
    }

    fn fields(&self) -> [(&'static str, &str); 4] {
        [
            ("name", self.name.as_str()),
            ("date", self.date.as_str()),
            ("time", self.time.as_str()),
            ("location", self.location.as_str()),
        ]
    }

    /// First blank field, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        self.fields()
            .into_iter()
            .find(|(_, v)| v.trim().is_empty())
            .map(|(k, _)| k)
    }

    /// Submit gate: every field non-empty after trimming.
    pub fn is_valid(&self) -> bool {
        self.missing_field().is_none()
    }

    /// Parse into birth details. Coordinates are left at zero.
    pub fn to_details(&self) -> Result<BirthDetails, KundaliError> {
        if let Some(field) = self.missing_field() {
            return Err(KundaliError::MissingField(field));
        }
        let date = parse_date(self.date.trim())?;
        let time = parse_time(self.time.trim())?;
        Ok(BirthDetails::new(
            self.name.trim(),
            date,
            time,
            self.location.trim(),
        ))
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, KundaliError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|e| KundaliError::InvalidDate(format!("{s:?}: {e}")))
}

fn parse_time(s: &str) -> Result<NaiveTime, KundaliError> {
    let mut last = None;
    for fmt in TIME_FORMATS {
        match NaiveTime::parse_from_str(s, fmt) {
            Ok(t) => return Ok(t),
            Err(e) => last = Some(e),
        }
    }
    let reason = last.map(|e| e.to_string()).unwrap_or_default();
    Err(KundaliError::InvalidTime(format!("{s:?}: {reason}")))
}
