//! Countdown timer component for Bubble Tea applications.
//!
//! The component tracks a remaining duration, decrements it once per second
//! while running, survives the host being suspended and resumed, and
//! notifies observers of progress and completion. Rendering is a pull-based
//! read of the current day/hour/minute/second breakdown, styled with
//! lipgloss.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_countdown::countdown::new;
//! use std::time::Duration;
//!
//! let mut timer = new(Duration::from_secs(90));
//! let _cmd = timer.init(); // arm the one-second schedule
//! assert_eq!(timer.view(), "00 00 01 30");
//! ```
//!
//! # Architecture
//!
//! The module splits along the lines that matter for testing:
//!
//! - [`state::CountdownState`] owns the remaining value and the tick and
//!   reconciliation rules, with no scheduling or rendering attached.
//! - [`Model`] wraps that state with the recurring schedule, message
//!   routing, observer hooks, and the view.
//!
//! One schedule serves running, paused, and finished countdowns alike:
//! pausing is expressed as a data condition inside the state machine, so
//! the schedule never needs to be stopped and restarted around it.

pub mod model;
pub mod state;

#[cfg(test)]
mod tests;

pub use model::{new, ChangeFn, FinishFn, Model, StartStopMsg, TickMsg};
pub use state::{CountdownState, TickOutcome};
