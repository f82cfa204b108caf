use alloc::boxed::Box;

use crate::{Clock, Resolution, State};

/// The ticker callback: a zero-argument closure invoked on each firing.
pub type Callback = Box<dyn FnMut()>;

/// A polled interval timer.
///
/// A `Ticker` compares elapsed time against a rolling reference point using
/// wrapping `u32` subtraction, so it stays correct across clock wraparound.
/// On each firing the reference advances to the current clock reading, not
/// to the ideal next boundary: late polling drifts rather than producing
/// catch-up bursts.
///
/// `Ticker` is a single-thread object. The callback carries no `Send` or
/// `Sync` bound, so the type cannot cross threads without external
/// synchronization; all operations are non-blocking, allocation-free and
/// complete in constant time. The callback runs to completion inside
/// [`update`](Ticker::update), so it must be short enough not to starve the
/// rest of the polling loop.
pub struct Ticker<C: Clock> {
    clock: C,
    callback: Option<Callback>,
    interval: u32,
    repeats: u16,
    resolution: Resolution,
    enabled: bool,
    state: State,
    /// Tick snapshot taken at start/resume/each fire; the baseline for
    /// elapsed-time computation.
    last_time: u32,
    /// Elapsed ticks captured by `pause`, reapplied by `resume`.
    diff_time: u32,
    counter: u32,
}

impl<C: Clock> Ticker<C> {
    /// Create an unarmed ticker: no callback, zero interval, endless
    /// repeats, microsecond resolution. Configure it with the setters
    /// before calling [`start`](Ticker::start).
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            callback: None,
            interval: 0,
            repeats: 0,
            resolution: Resolution::default(),
            enabled: false,
            state: State::default(),
            last_time: 0,
            diff_time: 0,
            counter: 0,
        }
    }

    /// Create a fully configured ticker. It is not armed until
    /// [`start`](Ticker::start) is called.
    ///
    /// `interval` is in the native unit of `resolution`. `repeats` of 0
    /// means endless; a positive count makes the ticker stop itself after
    /// that many firings.
    pub fn with_callback(
        clock: C,
        callback: impl FnMut() + 'static,
        interval: u32,
        repeats: u16,
        resolution: Resolution,
    ) -> Self {
        let mut ticker = Self::new(clock);
        ticker.callback = Some(Box::new(callback));
        ticker.interval = interval;
        ticker.repeats = repeats;
        ticker.resolution = resolution;
        ticker
    }

    /// Arm the ticker from a fresh reference point.
    ///
    /// Restarts the cycle and clears the fire counter regardless of the
    /// current state. Without a callback this is a silent no-op.
    pub fn start(&mut self) {
        if self.callback.is_none() {
            return;
        }
        self.last_time = self.now();
        self.diff_time = 0;
        self.counter = 0;
        self.enabled = true;
        self.state = State::Running;
        #[cfg(feature = "defmt")]
        defmt::trace!("ticker started, interval {=u32}", self.interval);
    }

    /// Re-arm the ticker, restoring the elapsed progress captured by
    /// [`pause`](Ticker::pause).
    ///
    /// Resuming from [`State::Stopped`] behaves like a fresh start: the
    /// fire counter is cleared and any stale pause offset is discarded.
    /// Without a callback this is a silent no-op.
    pub fn resume(&mut self) {
        if self.callback.is_none() {
            return;
        }
        if self.state == State::Stopped {
            // A pause offset must not survive a stop.
            self.diff_time = 0;
            self.counter = 0;
        }
        self.last_time = self.now().wrapping_sub(self.diff_time);
        self.enabled = true;
        self.state = State::Running;
        #[cfg(feature = "defmt")]
        defmt::trace!("ticker resumed");
    }

    /// Suspend the ticker, capturing the elapsed time of the current cycle
    /// so that [`resume`](Ticker::resume) excludes the paused duration.
    ///
    /// Only effective from [`State::Running`]; pausing an already paused or
    /// stopped ticker leaves the captured offset untouched.
    pub fn pause(&mut self) {
        if self.state != State::Running {
            return;
        }
        self.diff_time = self.now().wrapping_sub(self.last_time);
        self.enabled = false;
        self.state = State::Paused;
        #[cfg(feature = "defmt")]
        defmt::trace!("ticker paused, elapsed {=u32}", self.diff_time);
    }

    /// Disarm the ticker and clear the fire counter. Idempotent, valid in
    /// any state.
    pub fn stop(&mut self) {
        self.enabled = false;
        self.counter = 0;
        self.state = State::Stopped;
        #[cfg(feature = "defmt")]
        defmt::trace!("ticker stopped");
    }

    /// Poll the ticker; call this every iteration of the owning loop.
    ///
    /// Invokes the callback at most once, synchronously, when the interval
    /// has elapsed since the reference point. Returns `true` exactly when a
    /// firing occurred. A no-op while paused, stopped or exhausted.
    pub fn update(&mut self) -> bool {
        if !self.tick() {
            return false;
        }
        if let Some(callback) = self.callback.as_mut() {
            callback();
        }
        true
    }

    fn tick(&mut self) -> bool {
        if !self.enabled {
            return false;
        }
        let now = self.now();
        if now.wrapping_sub(self.last_time) < self.interval {
            return false;
        }
        // The reference advances to now, not to last_time + interval.
        self.last_time = now;
        self.counter = self.counter.wrapping_add(1);
        if self.is_repeat_limited() && self.counter == u32::from(self.repeats) {
            // The exhausting firing still happens this call.
            self.enabled = false;
            self.state = State::Stopped;
            #[cfg(feature = "defmt")]
            defmt::trace!("ticker exhausted after {=u32} firings", self.counter);
        }
        true
    }

    fn is_repeat_limited(&self) -> bool {
        // 0 and the all-ones pattern both read as endless.
        self.repeats != 0 && self.repeats != u16::MAX
    }

    fn now(&self) -> u32 {
        match self.resolution {
            Resolution::Micros => self.clock.micros(),
            Resolution::Millis => self.clock.millis(),
        }
    }

    /// Set the interval, in the native unit of the configured resolution.
    ///
    /// Takes effect on the next [`update`](Ticker::update) without resetting
    /// the reference point. A zero interval fires on every `update` call.
    pub fn set_interval(&mut self, interval: u32) {
        self.interval = interval;
    }

    /// The configured interval, in the native unit of the resolution.
    pub fn interval(&self) -> u32 {
        self.interval
    }

    /// Install the callback, replacing any previous one.
    pub fn set_callback(&mut self, callback: impl FnMut() + 'static) {
        self.callback = Some(Box::new(callback));
    }

    /// Remove and return the callback, leaving the ticker unarmed for
    /// future [`start`](Ticker::start)/[`resume`](Ticker::resume) calls.
    pub fn clear_callback(&mut self) -> Option<Callback> {
        self.callback.take()
    }

    /// Whether a callback is installed.
    pub fn has_callback(&self) -> bool {
        self.callback.is_some()
    }

    /// Set the repeat count. 0 means endless; a positive count makes the
    /// ticker stop itself after that many firings.
    pub fn set_repeats(&mut self, repeats: u16) {
        self.repeats = repeats;
    }

    /// The configured repeat count; 0 means endless.
    pub fn repeats(&self) -> u16 {
        self.repeats
    }

    /// The configured clock resolution.
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// The current lifecycle state.
    pub fn state(&self) -> State {
        self.state
    }

    /// The number of completed firings since the last
    /// [`start`](Ticker::start).
    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// Ticks elapsed since the last fire (or start/resume), wrapping.
    /// Meaningful only while running.
    pub fn elapsed(&self) -> u32 {
        self.now().wrapping_sub(self.last_time)
    }

    /// Ticks until the next firing boundary, wrapping.
    ///
    /// Between a boundary being crossed and the next `update` observing it,
    /// the value may have wrapped past zero; that staleness window is
    /// inherent to polling.
    pub fn remaining(&self) -> u32 {
        self.interval.wrapping_sub(self.elapsed())
    }
}
