//! Core types for mock North Indian kundali charts.
//!
//! This crate provides:
//! - Rashi (zodiac sign) and graha (planet) identifiers
//! - Bhava (house) types and the lagna-to-house sign mapping
//! - The fixed mahadasha timeline and current/upcoming selection
//! - Daily horoscope values, birth details, and the chart aggregate
//!
//! Nothing here draws randomness; see `kundali_engine` for generation.

pub mod bhava;
pub mod birth;
pub mod chart;
pub mod dasha;
pub mod error;
pub mod graha;
pub mod horoscope;
pub mod rashi;

pub use bhava::{
    BHAVA_COUNT, Bhava, NODE_OPPOSITION, PlacedGraha, bhava_ordinal, bhava_rashi, bhava_traits,
    build_bhavas, ketu_house_index, node_pair,
};
pub use birth::BirthDetails;
pub use chart::ChartResult;
pub use dasha::{
    DashaPeriod, DashaSelection, MAHADASHA_TABLE, find_active_period, mahadasha_for_year,
    select_dashas, upcoming_periods,
};
pub use error::KundaliError;
pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS};
pub use horoscope::{
    ALL_ENERGIES, ALL_MOODS, COSMIC_GUIDANCE, DAILY_DESCRIPTION, DailyHoroscope, Energy, Mood,
};
pub use rashi::{ALL_RASHIS, Rashi};
