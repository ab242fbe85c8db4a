//! Styling and label text for countdown rendering.

use crate::breakdown::Unit;
use lipgloss_extras::prelude::*;
use once_cell::sync::Lazy;

/// Lipgloss styles applied when rendering a countdown.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style for each zero-padded digit group.
    pub digit: Style,
    /// Style for the label row.
    pub label: Style,
    /// Style for the separator between digit groups.
    pub separator: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            digit: Style::new(),
            label: Style::new(),
            separator: Style::new(),
        }
    }
}

/// Label text rendered beneath the digits, one entry per display unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLabels {
    /// Label for the days component.
    pub days: String,
    /// Label for the hours component.
    pub hours: String,
    /// Label for the minutes component.
    pub minutes: String,
    /// Label for the seconds component.
    pub seconds: String,
}

/// Default English labels.
pub static DEFAULT_LABELS: Lazy<TimeLabels> = Lazy::new(|| TimeLabels {
    days: "Days".to_string(),
    hours: "Hours".to_string(),
    minutes: "Minutes".to_string(),
    seconds: "Seconds".to_string(),
});

impl Default for TimeLabels {
    fn default() -> Self {
        DEFAULT_LABELS.clone()
    }
}

impl TimeLabels {
    /// Returns the label text for a display unit.
    pub fn label(&self, unit: Unit) -> &str {
        match unit {
            Unit::Days => &self.days,
            Unit::Hours => &self.hours,
            Unit::Minutes => &self.minutes,
            Unit::Seconds => &self.seconds,
        }
    }
}

/// Formats a breakdown component as a zero-padded two-digit decimal string.
///
/// Day counts above 99 keep their full width.
///
/// ```rust
/// use bubbletea_countdown::style::two_digits;
///
/// assert_eq!(two_digits(7), "07");
/// assert_eq!(two_digits(123), "123");
/// ```
pub fn two_digits(value: u64) -> String {
    format!("{:02}", value)
}
