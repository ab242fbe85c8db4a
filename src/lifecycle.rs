//! Host lifecycle events for background/foreground reconciliation.
//!
//! Hosts that get suspended (a terminal multiplexer detach, an embedded
//! shell losing its session, a mobile wrapper moving to the background) stop
//! delivering tick messages while suspended. Forwarding a [`HostStateMsg`]
//! on each transition lets a countdown correct for the time that passed
//! while no ticks arrived; see
//! [`crate::countdown::Model::update`].
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_countdown::lifecycle::{HostState, HostStateMsg};
//! use std::time::SystemTime;
//!
//! let msg = HostStateMsg::new(HostState::Background, SystemTime::now());
//! assert_eq!(msg.state, HostState::Background);
//! ```

use std::time::SystemTime;

/// Execution state reported by the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostState {
    /// The application is in the foreground and processing events.
    Foreground,
    /// The application is suspended; scheduled callbacks are not delivered.
    Background,
    /// A transient in-between state (for example, mid transition). No
    /// suspension bookkeeping happens here.
    Inactive,
}

/// Message reporting a host lifecycle transition.
///
/// The timestamp is wall-clock time because it must span process
/// suspension; a monotonic clock frozen with the process would hide exactly
/// the interval being measured.
#[derive(Debug, Clone, Copy)]
pub struct HostStateMsg {
    /// The state the host transitioned into.
    pub state: HostState,
    /// Wall-clock time of the transition.
    pub at: SystemTime,
}

impl HostStateMsg {
    /// Creates a transition message with an explicit timestamp.
    pub fn new(state: HostState, at: SystemTime) -> Self {
        Self { state, at }
    }

    /// Creates a background transition stamped with the current time.
    pub fn backgrounded() -> Self {
        Self::new(HostState::Background, SystemTime::now())
    }

    /// Creates a foreground transition stamped with the current time.
    pub fn foregrounded() -> Self {
        Self::new(HostState::Foreground, SystemTime::now())
    }
}
