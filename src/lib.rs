#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-countdown/")]

//! # bubbletea-countdown
//!
//! A countdown timer component for building terminal applications with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! The component tracks a remaining duration, decrements it once per second
//! while running, survives the host application being suspended and
//! resumed, and notifies observers of progress and completion. It follows
//! the Elm Architecture pattern with `init()`, `update()`, and `view()`
//! methods, like the other components in the bubbletea-rs ecosystem.
//!
//! ## Features
//!
//! - **One schedule for every state**: running, paused, and finished
//!   countdowns all share a single recurring one-second schedule; pausing
//!   is a data condition, not scheduler churn
//! - **Suspension awareness** with host background/foreground transitions
//!   reconciled against wall-clock time, so the countdown doesn't stall
//!   while ticks aren't delivered
//! - **Observer hooks** for completion and progress with precise timing
//!   and argument contracts
//! - **Configurable display** of day/hour/minute/second digit groups with
//!   lipgloss styling, optional separators and labels
//! - **Message routing** with per-instance ids so multiple countdowns can
//!   coexist in one application
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_countdown::prelude::*;
//! use std::time::Duration;
//!
//! let mut timer = countdown_new(Duration::from_secs(90))
//!     .with_units(&[Unit::Minutes, Unit::Seconds])
//!     .with_separator(":");
//!
//! let _cmd = timer.init();
//! assert_eq!(timer.view(), "01:30");
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_countdown::prelude::*;
//! use bubbletea_rs::{Model, Cmd, Msg};
//! use std::time::Duration;
//!
//! struct App {
//!     countdown: Countdown,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut countdown = countdown_new(Duration::from_secs(10 * 60));
//!         let cmd = countdown.init();
//!         (Self { countdown }, Some(cmd))
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         // Forward ticks, start/stop, and host lifecycle messages
//!         self.countdown.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         format!("Break ends in {}", self.countdown.view())
//!     }
//! }
//! ```
//!
//! ## Suspension handling
//!
//! Hosts that stop delivering scheduled callbacks while backgrounded (a
//! detached multiplexer session, or a mobile wrapper moving off screen)
//! forward a [`lifecycle::HostStateMsg`] on each transition:
//!
//! ```rust
//! use bubbletea_countdown::countdown::new;
//! use bubbletea_countdown::lifecycle::{HostState, HostStateMsg};
//! use std::time::{Duration, SystemTime};
//!
//! let mut timer = new(Duration::from_secs(100));
//! let t0 = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000);
//!
//! timer.update(Box::new(HostStateMsg::new(HostState::Background, t0)));
//! timer.update(Box::new(HostStateMsg::new(
//!     HostState::Foreground,
//!     t0 + Duration::from_secs(30),
//! )));
//!
//! assert_eq!(timer.remaining(), 70.0);
//! ```

pub mod breakdown;
pub mod countdown;
pub mod lifecycle;
pub mod style;

pub use breakdown::{breakdown, TimeBreakdown, Unit, DEFAULT_UNITS};
pub use countdown::{
    new as countdown_new, ChangeFn, FinishFn, Model as Countdown,
    StartStopMsg as CountdownStartStopMsg, TickMsg as CountdownTickMsg,
};
pub use lifecycle::{HostState, HostStateMsg};
pub use style::{two_digits, Styles, TimeLabels, DEFAULT_LABELS};

/// Prelude module for convenient imports.
///
/// Re-exports the most commonly used types and functions so applications
/// can bring everything in with a single `use` statement:
///
/// ```rust
/// use bubbletea_countdown::prelude::*;
/// use std::time::Duration;
///
/// let timer = countdown_new(Duration::from_secs(30));
/// assert!(timer.running());
/// ```
pub mod prelude {
    pub use crate::breakdown::{breakdown, TimeBreakdown, Unit, DEFAULT_UNITS};
    pub use crate::countdown::{
        new as countdown_new, ChangeFn, FinishFn, Model as Countdown,
        StartStopMsg as CountdownStartStopMsg, TickMsg as CountdownTickMsg,
    };
    pub use crate::lifecycle::{HostState, HostStateMsg};
    pub use crate::style::{Styles, TimeLabels, DEFAULT_LABELS};
}
