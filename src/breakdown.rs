//! Time breakdown calculations for countdown display.
//!
//! This module converts a remaining-seconds value into integer day, hour,
//! minute, and second components. The breakdown is plain data; zero-padding
//! and styling are left to the presentation layer (see [`crate::style`]).
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_countdown::breakdown::{breakdown, Unit};
//!
//! let parts = breakdown(90061.0);
//! assert_eq!(parts.days, 1);
//! assert_eq!(parts.hours, 1);
//! assert_eq!(parts.minutes, 1);
//! assert_eq!(parts.component(Unit::Seconds), 1);
//! ```

/// A display unit of the countdown.
///
/// Units select which components of the breakdown a countdown renders, and
/// in which order. See [`crate::countdown::Model::with_units`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Whole days remaining. Unlike the other components this one is
    /// unbounded; it is not reduced modulo anything.
    Days,
    /// Hours remaining within the current day (0..=23).
    Hours,
    /// Minutes remaining within the current hour (0..=59).
    Minutes,
    /// Seconds remaining within the current minute (0..=59).
    Seconds,
}

/// Default display order: days, hours, minutes, seconds.
pub const DEFAULT_UNITS: [Unit; 4] = [Unit::Days, Unit::Hours, Unit::Minutes, Unit::Seconds];

/// Integer components of a remaining duration.
///
/// Produced by [`breakdown`]. All fields are plain integers; formatting
/// them as zero-padded digits happens in the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeBreakdown {
    /// Whole days.
    pub days: u64,
    /// Hours within the day (0..=23).
    pub hours: u64,
    /// Minutes within the hour (0..=59).
    pub minutes: u64,
    /// Seconds within the minute (0..=59).
    pub seconds: u64,
}

impl TimeBreakdown {
    /// Returns the component selected by `unit`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_countdown::breakdown::{breakdown, Unit};
    ///
    /// let parts = breakdown(3723.0);
    /// assert_eq!(parts.component(Unit::Hours), 1);
    /// assert_eq!(parts.component(Unit::Minutes), 2);
    /// assert_eq!(parts.component(Unit::Seconds), 3);
    /// ```
    pub fn component(&self, unit: Unit) -> u64 {
        match unit {
            Unit::Days => self.days,
            Unit::Hours => self.hours,
            Unit::Minutes => self.minutes,
            Unit::Seconds => self.seconds,
        }
    }
}

/// Splits a remaining-seconds value into day/hour/minute/second components.
///
/// Fractional seconds are floored away; negative input is treated as zero.
///
/// # Examples
///
/// ```rust
/// use bubbletea_countdown::breakdown::breakdown;
///
/// let parts = breakdown(90061.0);
/// assert_eq!(parts.days, 1);
///
/// let zero = breakdown(-5.0);
/// assert_eq!(zero.seconds, 0);
/// ```
pub fn breakdown(remaining: f64) -> TimeBreakdown {
    let total = remaining.max(0.0).floor() as u64;

    TimeBreakdown {
        days: total / 86_400,
        hours: (total / 3_600) % 24,
        minutes: (total / 60) % 60,
        seconds: total % 60,
    }
}
