//! Generator configuration.
//!
//! Every field has a default, so a TOML file only needs the keys it
//! overrides:
//!
//! ```toml
//! delay_ms = 0
//! retrograde_probability = 0.25
//! ```

use std::path::Path;
use std::time::Duration;

use kundali_base::KundaliError;
use serde::{Deserialize, Serialize};

/// Default artificial generation delay.
pub const DEFAULT_DELAY_MS: u64 = 2000;

/// Default chance that a graha is flagged retrograde.
pub const DEFAULT_RETROGRADE_PROBABILITY: f64 = 0.2;

/// Tunables for [`crate::generate_chart`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Artificial delay before the chart is produced, in milliseconds.
    pub delay_ms: u64,
    /// Probability in [0, 1] of the retrograde flag for each graha.
    pub retrograde_probability: f64,
    /// Lower bound of the daily luck score, inclusive.
    pub luck_min: u8,
    /// Upper bound of the daily luck score, inclusive.
    pub luck_max: u8,
    /// Always flag Rahu and Ketu retrograde. Off by default: the nodes
    /// take the same random roll as every other graha.
    pub nodes_always_retrograde: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
            retrograde_probability: DEFAULT_RETROGRADE_PROBABILITY,
            luck_min: 60,
            luck_max: 95,
            nodes_always_retrograde: false,
        }
    }
}

impl GeneratorConfig {
    /// Default configuration with no artificial delay.
    pub fn immediate() -> Self {
        Self {
            delay_ms: 0,
            ..Self::default()
        }
    }

    /// The artificial delay as a `Duration`.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), KundaliError> {
        if !(0.0..=1.0).contains(&self.retrograde_probability) {
            return Err(KundaliError::Config(format!(
                "retrograde_probability must be in [0, 1], got {}",
                self.retrograde_probability
            )));
        }
        if self.luck_min > self.luck_max {
            return Err(KundaliError::Config(format!(
                "luck_min ({}) exceeds luck_max ({})",
                self.luck_min, self.luck_max
            )));
        }
        if self.luck_max > 100 {
            return Err(KundaliError::Config(format!(
                "luck_max must be at most 100, got {}",
                self.luck_max
            )));
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, KundaliError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, KundaliError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
