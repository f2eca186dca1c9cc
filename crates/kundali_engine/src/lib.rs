//! Mock kundali chart generation.
//!
//! This crate provides:
//! - [`generate_chart_with`]: the synchronous generator over any `rand::Rng`
//! - [`generate_chart`]: the async entry point with an artificial delay
//! - [`ChartGenerator`] and its random implementation, for callers that
//!   need to swap the generator out
//! - [`GeneratorConfig`], loadable from TOML

pub mod config;
pub mod generator;

pub use config::{DEFAULT_DELAY_MS, DEFAULT_RETROGRADE_PROBABILITY, GeneratorConfig};
pub use generator::{
    ChartGenerator, RandomChartGenerator, current_year, generate_chart, generate_chart_with,
};
