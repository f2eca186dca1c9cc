//! View-state machine and the controller that drives it.
//!
//! ```text
//! Welcome --start--> Input --submit--> Loading --generated--> Result
//!    ^                 |  ^               |                     |
//!    +------back-------+  +----failed-----+                     |
//!    +-----------------------------reset------------------------+
//! ```
//!
//! Every other (phase, event) pair is rejected with [`TransitionError`].
//! Renderers read [`AppController::state`] or take a [`AppController::snapshot`];
//! only the controller moves between phases.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::pin::pin;
use std::time::Duration;

use kundali_base::{ChartResult, KundaliError};
use kundali_engine::ChartGenerator;
use tokio::time::{Instant, interval_at};
use tracing::{error, info};

use crate::form::BirthForm;

/// Status lines shown while a chart is being generated, in display order.
pub const LOADING_MESSAGES: [&str; 5] = [
    "Aligning the cosmos...",
    "Calculating planetary positions...",
    "Consulting the ephemeris...",
    "Mapping the 12 houses...",
    "Interpreting celestial patterns...",
];

/// Time between loading messages.
pub const LOADING_MESSAGE_INTERVAL: Duration = Duration::from_millis(1500);

/// Loading message for the `n`th tick, cycling through the list.
pub const fn loading_message(n: usize) -> &'static str {
    LOADING_MESSAGES[n % LOADING_MESSAGES.len()]
}

/// Application phase, without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Welcome,
    Input,
    Loading,
    Result,
}

impl Phase {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::Input => "input",
            Self::Loading => "loading",
            Self::Result => "result",
        }
    }
}

impl Display for Phase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Current view state. Only `Result` carries data.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum AppState {
    #[default]
    Welcome,
    Input,
    Loading,
    Result(Box<ChartResult>),
}

impl AppState {
    pub const fn phase(&self) -> Phase {
        match self {
            Self::Welcome => Phase::Welcome,
            Self::Input => Phase::Input,
            Self::Loading => Phase::Loading,
            Self::Result(_) => Phase::Result,
        }
    }

    /// The chart, when in `Result`.
    pub fn chart(&self) -> Option<&ChartResult> {
        match self {
            Self::Result(chart) => Some(chart),
            _ => None,
        }
    }
}

/// Inputs to the state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Start,
    Back,
    Submit,
    Generated(Box<ChartResult>),
    GenerationFailed,
    Reset,
}

impl AppEvent {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Back => "back",
            Self::Submit => "submit",
            Self::Generated(_) => "generated",
            Self::GenerationFailed => "generation_failed",
            Self::Reset => "reset",
        }
    }
}

/// An event that is not valid in the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionError {
    pub phase: Phase,
    pub event: &'static str,
}

impl Display for TransitionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "event '{}' not allowed in phase '{}'", self.event, self.phase)
    }
}

impl Error for TransitionError {}

/// Errors from driving the controller.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum AppError {
    Transition(TransitionError),
    Kundali(KundaliError),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transition(e) => write!(f, "{e}"),
            Self::Kundali(e) => write!(f, "{e}"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transition(e) => Some(e),
            Self::Kundali(e) => Some(e),
        }
    }
}

impl From<TransitionError> for AppError {
    fn from(e: TransitionError) -> Self {
        Self::Transition(e)
    }
}

impl From<KundaliError> for AppError {
    fn from(e: KundaliError) -> Self {
        Self::Kundali(e)
    }
}

/// Next state for `event` in `state`.
pub fn transition(state: &AppState, event: AppEvent) -> Result<AppState, TransitionError> {
    match (state, event) {
        (AppState::Welcome, AppEvent::Start) => Ok(AppState::Input),
        (AppState::Input, AppEvent::Back) => Ok(AppState::Welcome),
        (AppState::Input, AppEvent::Submit) => Ok(AppState::Loading),
        (AppState::Loading, AppEvent::Generated(chart)) => Ok(AppState::Result(chart)),
        (AppState::Loading, AppEvent::GenerationFailed) => Ok(AppState::Input),
        (AppState::Result(_), AppEvent::Reset) => Ok(AppState::Welcome),
        (state, event) => Err(TransitionError {
            phase: state.phase(),
            event: event.name(),
        }),
    }
}

/// Owns the view state and the chart generator.
#[derive(Debug)]
pub struct AppController<G> {
    generator: G,
    state: AppState,
}

impl<G: ChartGenerator> AppController<G> {
    /// A controller in `Welcome`.
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            state: AppState::Welcome,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Owned copy of the current state for rendering.
    pub fn snapshot(&self) -> AppState {
        self.state.clone()
    }

    pub fn chart(&self) -> Option<&ChartResult> {
        self.state.chart()
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    fn apply(&mut self, event: AppEvent) -> Result<(), TransitionError> {
        let from = self.state.phase();
        let event_name = event.name();
        self.state = transition(&self.state, event)?;
        info!(
            from = from.name(),
            to = self.state.phase().name(),
            event = event_name,
            "phase transition"
        );
        Ok(())
    }

    /// Welcome -> Input.
    pub fn start(&mut self) -> Result<(), TransitionError> {
        self.apply(AppEvent::Start)
    }

    /// Input -> Welcome.
    pub fn back(&mut self) -> Result<(), TransitionError> {
        self.apply(AppEvent::Back)
    }

    /// Result -> Welcome, dropping the chart.
    pub fn reset(&mut self) -> Result<(), TransitionError> {
        self.apply(AppEvent::Reset)
    }

    /// Submit the form and wait for the chart.
    ///
    /// An incomplete or unparsable form leaves the controller in `Input`. On
    /// success the controller ends in `Result`; if the generator fails, the
    /// failure is logged, the controller returns to `Input`, and the error is
    /// returned.
    pub async fn submit(&mut self, form: &BirthForm) -> Result<(), AppError> {
        if self.phase() != Phase::Input {
            return Err(TransitionError {
                phase: self.phase(),
                event: AppEvent::Submit.name(),
            }
            .into());
        }
        let details = form.to_details()?;
        self.apply(AppEvent::Submit)?;

        let outcome = {
            let mut generation = pin!(self.generator.generate(details));
            info!("{}", loading_message(0));
            let mut ticker = interval_at(
                Instant::now() + LOADING_MESSAGE_INTERVAL,
                LOADING_MESSAGE_INTERVAL,
            );
            let mut shown = 1;
            loop {
                tokio::select! {
                    biased;
                    result = generation.as_mut() => break result,
                    _ = ticker.tick() => {
                        info!("{}", loading_message(shown));
                        shown += 1;
                    }
                }
            }
        };

        match outcome {
            Ok(chart) => {
                self.apply(AppEvent::Generated(Box::new(chart)))?;
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "error generating chart");
                self.apply(AppEvent::GenerationFailed)?;
                Err(e.into())
            }
        }
    }
}
