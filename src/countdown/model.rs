//! The countdown component model: configuration, message routing, tick
//! scheduling, and observer notification.

use crate::breakdown::{breakdown, TimeBreakdown, Unit, DEFAULT_UNITS};
use crate::countdown::state::{CountdownState, TickOutcome};
use crate::lifecycle::{HostState, HostStateMsg};
use crate::style::{two_digits, Styles, TimeLabels};
use bubbletea_rs::{tick as bubbletea_tick, Cmd, Model as BubbleTeaModel, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

// Internal ID management for countdown instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Generates unique identifiers for countdown instances.
///
/// Each countdown gets a unique ID so that several instances can coexist in
/// one application without message conflicts. IDs are generated atomically
/// and start from 1.
fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Period of the countdown schedule.
const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Completion hook, invoked exactly once per countdown run.
///
/// See [`Model::with_on_finish`].
pub type FinishFn = Box<dyn Fn() + Send>;

/// Progress hook, invoked with the remaining value at the start of the
/// second being consumed.
///
/// See [`Model::with_on_change`] for the exact argument contract.
pub type ChangeFn = Box<dyn Fn(f64) + Send>;

/// Message sent on every schedule period to drive the countdown.
///
/// Ticks are generated by the countdown itself via [`Model::init`] and
/// re-armed from [`Model::update`], so the schedule keeps firing for the
/// whole mounted lifetime, including while the countdown is paused or
/// already finished. Whether a tick actually advances anything is decided
/// by the state machine, not the schedule.
///
/// # Message Filtering
///
/// - Messages with a non-zero `id` that doesn't match the instance are
///   ignored, so multiple countdowns can run side by side.
/// - Messages whose internal tag doesn't match the instance's current tag
///   are ignored. The tag is bumped on teardown and identity change, which
///   is what cancels an in-flight schedule: a stale tick arriving after
///   teardown is a no-op, never a fault.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// The unique identifier of the countdown this tick belongs to.
    pub id: i64,
    /// Schedule generation this tick was armed under.
    pub(crate) tag: i64,
}

/// Message used to open or close the running gate of a countdown.
///
/// Sent by [`Model::start`], [`Model::stop`], and [`Model::toggle`]. The
/// gate only controls whether ticks may advance the value; the schedule
/// itself keeps firing either way.
#[derive(Debug, Clone)]
pub struct StartStopMsg {
    /// The unique identifier of the countdown this message targets.
    pub id: i64,
    /// Whether the running gate should be open after processing.
    pub(crate) running: bool,
}

/// A countdown timer component for Bubble Tea applications.
///
/// The model owns a [`CountdownState`] and decrements it once per second
/// while the running gate is open, renders the remaining time as
/// day/hour/minute/second digit groups, survives host suspension via
/// [`HostStateMsg`] reconciliation, and notifies observers through optional
/// completion and progress hooks.
///
/// # Basic Usage
///
/// ```rust
/// use bubbletea_countdown::countdown::new;
/// use std::time::Duration;
///
/// let mut timer = new(Duration::from_secs(30));
/// let _cmd = timer.init(); // arm the one-second schedule
/// assert_eq!(timer.remaining(), 30.0);
/// ```
///
/// # bubbletea-rs Integration
///
/// ```rust
/// use bubbletea_countdown::countdown::{new, Model as CountdownModel};
/// use bubbletea_rs::{Model as BubbleTeaModel, Cmd, Msg};
/// use std::time::Duration;
///
/// struct App {
///     countdown: CountdownModel,
/// }
///
/// impl BubbleTeaModel for App {
///     fn init() -> (Self, Option<Cmd>) {
///         let mut countdown = new(Duration::from_secs(10));
///         let cmd = countdown.init();
///         (Self { countdown }, Some(cmd))
///     }
///
///     fn update(&mut self, msg: Msg) -> Option<Cmd> {
///         // Forward ticks, start/stop, and lifecycle messages
///         self.countdown.update(msg)
///     }
///
///     fn view(&self) -> String {
///         format!("Time left: {}", self.countdown.view())
///     }
/// }
/// ```
///
/// # Pausing
///
/// Pausing is a data condition, not a scheduler state: the schedule keeps
/// firing and the state machine refuses to advance while the gate is
/// closed. This lets one recurring schedule serve active and paused
/// countdowns alike.
///
/// ```rust
/// use bubbletea_countdown::countdown::new;
/// use std::time::Duration;
///
/// let timer = new(Duration::from_secs(30));
///
/// // These return commands that send StartStopMsg
/// let _pause = timer.stop();
/// let _resume = timer.start();
/// let _flip = timer.toggle();
/// ```
///
/// # Suspension
///
/// Hosts that stop delivering ticks while backgrounded forward a
/// [`HostStateMsg`] on each transition; on return to the foreground the
/// countdown subtracts the wall-clock time spent suspended, clamped at
/// zero. Without this a countdown would stall while backgrounded and
/// resume as if no time had passed.
pub struct Model {
    state: CountdownState,
    /// Configured duration in seconds, clamped to be non-negative.
    initial: f64,
    running: bool,
    identity: Option<String>,

    /// Display units in render order.
    pub units: Vec<Unit>,
    /// Label text rendered beneath the digits when labels are shown.
    pub labels: TimeLabels,
    /// Whether [`Model::view`] renders the label row.
    pub show_labels: bool,
    /// Whether [`Model::view`] joins digit groups with the separator.
    pub show_separator: bool,
    /// Separator between digit groups.
    pub separator: String,
    /// Styles applied to digits, labels, and separators.
    pub styles: Styles,

    on_finish: Option<FinishFn>,
    on_change: Option<ChangeFn>,

    id: i64,
    tag: i64,
    mounted: bool,
}

/// Creates a countdown for the given duration.
///
/// The countdown starts with the running gate open, the default
/// day/hour/minute/second display, and no hooks. Call [`Model::init`] to
/// arm the one-second schedule.
///
/// # Examples
///
/// ```rust
/// use bubbletea_countdown::countdown::new;
/// use std::time::Duration;
///
/// let timer = new(Duration::from_secs(90));
/// assert_eq!(timer.remaining(), 90.0);
/// assert!(timer.running());
/// assert!(!timer.finished());
/// ```
pub fn new(duration: Duration) -> Model {
    let initial = duration.as_secs_f64();
    Model {
        state: CountdownState::new(initial),
        initial,
        running: true,
        identity: None,
        units: DEFAULT_UNITS.to_vec(),
        labels: TimeLabels::default(),
        show_labels: false,
        show_separator: false,
        separator: ":".to_string(),
        styles: Styles::default(),
        on_finish: None,
        on_change: None,
        id: next_id(),
        tag: 0,
        mounted: true,
    }
}

impl Model {
    /// Returns the unique identifier of this countdown instance.
    ///
    /// Used for message filtering so several countdowns can coexist.
    ///
    /// ```rust
    /// use bubbletea_countdown::countdown::new;
    /// use std::time::Duration;
    ///
    /// let a = new(Duration::from_secs(30));
    /// let b = new(Duration::from_secs(60));
    /// assert_ne!(a.id(), b.id());
    /// ```
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the configured identity token, if any.
    pub fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    /// Whether the running gate is open.
    pub fn running(&self) -> bool {
        self.running
    }

    /// Seconds left in the countdown.
    pub fn remaining(&self) -> f64 {
        self.state.remaining()
    }

    /// Whether the countdown has reached zero.
    pub fn finished(&self) -> bool {
        self.state.finished()
    }

    /// The current day/hour/minute/second breakdown of the remaining time.
    ///
    /// Pull-based: valid at any point after each processed tick, which is
    /// how an external renderer reads the countdown without subscribing to
    /// anything.
    pub fn breakdown(&self) -> TimeBreakdown {
        breakdown(self.state.remaining())
    }

    /// Sets the identity token at construction time.
    pub fn with_identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = Some(identity.into());
        self
    }

    /// Closes (or opens) the running gate at construction time.
    ///
    /// ```rust
    /// use bubbletea_countdown::countdown::new;
    /// use std::time::Duration;
    ///
    /// let timer = new(Duration::from_secs(30)).with_running(false);
    /// assert!(!timer.running());
    /// ```
    pub fn with_running(mut self, running: bool) -> Self {
        self.running = running;
        self
    }

    /// Selects which units [`Model::view`] renders, in order.
    ///
    /// ```rust
    /// use bubbletea_countdown::breakdown::Unit;
    /// use bubbletea_countdown::countdown::new;
    /// use std::time::Duration;
    ///
    /// let timer = new(Duration::from_secs(90)).with_units(&[Unit::Minutes, Unit::Seconds]);
    /// assert_eq!(timer.view(), "01 30");
    /// ```
    pub fn with_units(mut self, units: &[Unit]) -> Self {
        self.units = units.to_vec();
        self
    }

    /// Enables the label row with the given label text.
    pub fn with_labels(mut self, labels: TimeLabels) -> Self {
        self.labels = labels;
        self.show_labels = true;
        self
    }

    /// Joins digit groups with `separator` instead of a space.
    ///
    /// ```rust
    /// use bubbletea_countdown::breakdown::Unit;
    /// use bubbletea_countdown::countdown::new;
    /// use std::time::Duration;
    ///
    /// let timer = new(Duration::from_secs(3723))
    ///     .with_units(&[Unit::Hours, Unit::Minutes, Unit::Seconds])
    ///     .with_separator(":");
    /// assert_eq!(timer.view(), "01:02:03");
    /// ```
    pub fn with_separator(mut self, separator: &str) -> Self {
        self.separator = separator.to_string();
        self.show_separator = true;
        self
    }

    /// Sets the rendering styles at construction time.
    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    /// Sets the completion hook at construction time.
    ///
    /// The hook fires exactly once per countdown run, on the tick that
    /// consumes the final second (or on the tick that finds a countdown
    /// landed at zero without passing through one). It is never fired again
    /// while the countdown is held at zero.
    ///
    /// ```rust
    /// use bubbletea_countdown::countdown::new;
    /// use std::time::Duration;
    ///
    /// let _timer = new(Duration::from_secs(5))
    ///     .with_on_finish(Box::new(|| println!("time's up")));
    /// ```
    pub fn with_on_finish(mut self, hook: FinishFn) -> Self {
        self.on_finish = Some(hook);
        self
    }

    /// Sets the progress hook at construction time.
    ///
    /// The hook receives the remaining value at the *start* of the second
    /// being consumed: the pre-decrement value, one second ahead of what
    /// [`Model::remaining`] reports right afterwards. Existing observers
    /// depend on this argument, so it is part of the contract rather than
    /// something to correct here. It never fires for a skipped tick.
    pub fn with_on_change(mut self, hook: ChangeFn) -> Self {
        self.on_change = Some(hook);
        self
    }

    /// Replaces the completion hook.
    pub fn set_on_finish(&mut self, hook: Option<FinishFn>) {
        self.on_finish = hook;
    }

    /// Replaces the progress hook.
    pub fn set_on_change(&mut self, hook: Option<ChangeFn>) {
        self.on_change = hook;
    }

    /// Opens or closes the running gate directly.
    ///
    /// Equivalent to processing a [`StartStopMsg`], for hosts that own the
    /// model and don't need to round-trip a command.
    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Replaces the configured duration and resets the countdown to it.
    ///
    /// The current value is snapshotted as the last-processed value before
    /// the reset, the same rule an identity change applies.
    pub fn set_duration(&mut self, duration: Duration) {
        self.initial = duration.as_secs_f64();
        self.state.reset_to(self.initial);
    }

    /// Replaces the identity token, resetting the countdown when it changes.
    ///
    /// A change of identity means a new logical timer: the in-flight
    /// schedule is canceled, the current value is snapshotted, `remaining`
    /// resets to the configured duration, and a command re-arming the
    /// schedule is returned. Setting the same identity again does nothing.
    ///
    /// ```rust
    /// use bubbletea_countdown::countdown::new;
    /// use std::time::Duration;
    ///
    /// let mut timer = new(Duration::from_secs(30));
    /// let restart = timer.set_identity(Some("round-2".to_string()));
    /// assert!(restart.is_some());
    /// assert!(timer.set_identity(Some("round-2".to_string())).is_none());
    /// ```
    pub fn set_identity(&mut self, identity: Option<String>) -> Option<Cmd> {
        if self.identity == identity {
            return None;
        }
        self.identity = identity;
        self.tag += 1;
        self.state.reset_to(self.initial);
        self.mounted = true;
        Some(self.tick())
    }

    /// Generates a command to open the running gate.
    pub fn start(&self) -> Cmd {
        self.start_stop(true)
    }

    /// Generates a command to close the running gate.
    ///
    /// The remaining value is preserved; the schedule keeps firing and the
    /// state machine holds the value until the gate reopens.
    pub fn stop(&self) -> Cmd {
        self.start_stop(false)
    }

    /// Generates a command that flips the running gate.
    pub fn toggle(&self) -> Cmd {
        self.start_stop(!self.running)
    }

    fn start_stop(&self, running: bool) -> Cmd {
        let id = self.id;
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(StartStopMsg { id, running }) as Msg
        })
    }

    /// Creates a tick message matching this instance's current schedule.
    ///
    /// Useful for tests and for hosts that drive the model manually instead
    /// of through the bubbletea-rs runtime.
    pub fn tick_msg(&self) -> TickMsg {
        TickMsg {
            id: self.id,
            tag: self.tag,
        }
    }

    fn tick(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;

        bubbletea_tick(TICK_INTERVAL, move |_| Box::new(TickMsg { id, tag }) as Msg)
    }

    /// Arms the one-second schedule and marks the component mounted.
    ///
    /// Call once when the component is set up; the schedule then re-arms
    /// itself from [`Model::update`] until [`Model::unmount`].
    ///
    /// ```rust
    /// use bubbletea_countdown::countdown::new;
    /// use std::time::Duration;
    ///
    /// let mut timer = new(Duration::from_secs(60));
    /// let _cmd = timer.init();
    /// ```
    pub fn init(&mut self) -> Cmd {
        self.mounted = true;
        self.tick()
    }

    /// Tears the component down.
    ///
    /// Cancels the in-flight schedule (a stale tick arriving afterwards is
    /// a no-op), snapshots the current value, and resets `remaining` to the
    /// configured duration ready for the next mount. Lifecycle and
    /// start/stop messages are ignored until then.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.tag += 1;
        self.state.reset_to(self.initial);
    }

    /// Processes messages and updates the countdown.
    ///
    /// Handles three message types:
    ///
    /// - [`StartStopMsg`]: opens or closes the running gate.
    /// - [`HostStateMsg`]: records suspension on the background
    ///   transition; on the foreground transition subtracts the wall-clock
    ///   time spent suspended (running countdowns only) and clears the
    ///   suspension mark.
    /// - [`TickMsg`]: evaluates one tick and re-arms the schedule. Hooks
    ///   fire synchronously on this turn: completion first (at the
    ///   final-second transition), then progress with the pre-decrement
    ///   value. Skipped ticks fire nothing but still re-arm.
    ///
    /// Everything else returns `None`. All mutation happens on the turn
    /// that delivers the message; bubbletea-rs serializes deliveries, so
    /// tick and lifecycle handling never race. A host that drives this
    /// model from several threads must serialize access itself.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if !self.mounted {
            return None;
        }

        if let Some(start_stop) = msg.downcast_ref::<StartStopMsg>() {
            if start_stop.id != 0 && start_stop.id != self.id {
                return None;
            }
            self.running = start_stop.running;
            // The schedule is already armed for the whole mounted lifetime;
            // the gate is the only thing that changes.
            return None;
        }

        if let Some(transition) = msg.downcast_ref::<HostStateMsg>() {
            match transition.state {
                HostState::Background => self.state.suspend(transition.at),
                HostState::Foreground => self.state.resume(transition.at, self.running),
                HostState::Inactive => {}
            }
            return None;
        }

        if let Some(tick_msg) = msg.downcast_ref::<TickMsg>() {
            if tick_msg.id != 0 && tick_msg.id != self.id {
                return None;
            }
            // A tick armed under a superseded schedule carries a stale tag
            // and is dropped.
            if tick_msg.tag != self.tag {
                return None;
            }

            self.advance();
            self.tag += 1;
            return Some(self.tick());
        }

        None
    }

    /// Evaluates one tick and dispatches hooks for the outcome.
    fn advance(&mut self) {
        match self.state.tick(self.running) {
            TickOutcome::Skipped => {}
            TickOutcome::Settled { finish } => {
                if finish {
                    if let Some(hook) = &self.on_finish {
                        hook();
                    }
                }
            }
            TickOutcome::Advanced { before, finish } => {
                if finish {
                    if let Some(hook) = &self.on_finish {
                        hook();
                    }
                }
                if let Some(hook) = &self.on_change {
                    hook(before);
                }
            }
        }
    }

    /// Renders the countdown as styled, zero-padded digit groups.
    ///
    /// One group per selected unit, joined by the separator when one is
    /// configured, with an optional label row beneath. Rendering reads the
    /// current breakdown and never mutates state.
    ///
    /// ```rust
    /// use bubbletea_countdown::countdown::new;
    /// use std::time::Duration;
    ///
    /// let timer = new(Duration::from_secs(90061));
    /// assert_eq!(timer.view(), "01 01 01 01");
    /// ```
    pub fn view(&self) -> String {
        let parts = self.breakdown();

        let digits: Vec<String> = self
            .units
            .iter()
            .map(|unit| self.styles.digit.render(&two_digits(parts.component(*unit))))
            .collect();

        let joined = if self.show_separator {
            let separator = self.styles.separator.render(&self.separator);
            digits.join(separator.as_str())
        } else {
            digits.join(" ")
        };

        if !self.show_labels {
            return joined;
        }

        let labels: Vec<String> = self
            .units
            .iter()
            .map(|unit| self.styles.label.render(self.labels.label(*unit)))
            .collect();

        format!("{}\n{}", joined, labels.join(" "))
    }
}

impl BubbleTeaModel for Model {
    /// Creates a 60-second countdown for standalone use and arms its
    /// schedule.
    fn init() -> (Self, Option<Cmd>) {
        let mut model = new(Duration::from_secs(60));
        let cmd = model.init();
        (model, Some(cmd))
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

impl Default for Model {
    /// A 60-second countdown with the default display settings.
    fn default() -> Self {
        new(Duration::from_secs(60))
    }
}
