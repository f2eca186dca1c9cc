//! Application layer for kundali charts.
//!
//! - [`AppController`]: owns the view state and runs generation
//!   (Welcome, Input, Loading, Result)
//! - [`BirthForm`]: raw form fields and their validation
//! - [`dashboard`]: text rendering of the chart, horoscope, and profile tabs
//!
//! The generator is injected through [`kundali_engine::ChartGenerator`], so a
//! front end can swap in a seeded or failing generator.

pub mod app;
pub mod dashboard;
pub mod form;

pub use app::{
    AppController, AppError, AppEvent, AppState, LOADING_MESSAGE_INTERVAL, LOADING_MESSAGES,
    Phase, TransitionError, loading_message, transition,
};
pub use dashboard::{
    ALL_TABS, Tab, render_chart_tab, render_dashboard, render_header, render_horoscope_tab,
    render_profile_tab,
};
pub use form::BirthForm;

pub use kundali_base::{BirthDetails, ChartResult, KundaliError};
pub use kundali_engine::{ChartGenerator, GeneratorConfig, RandomChartGenerator};
