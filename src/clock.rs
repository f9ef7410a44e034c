//! Wall-clock readout refreshed once per second.
//!
//! egui has no background timers on the web, so the clock is a schedule
//! driven from the frame loop: [`TimeClock::poll`] fires due ticks and tells
//! the caller when to repaint next.

use std::time::Duration;
use web_time::Instant;

/// Interval between clock ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

type TickCallback = Box<dyn FnMut(&str)>;

/// Active schedule. Dropping it cancels all future ticks.
struct Schedule {
    next_tick: Instant,
    on_tick: TickCallback,
}

/// Repeating clock that produces a human-readable local time.
pub struct TimeClock {
    source: fn() -> String,
    reading: String,
    schedule: Option<Schedule>,
}

impl Default for TimeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeClock {
    /// Creates a stopped clock reading local time.
    pub fn new() -> Self {
        Self::with_source(local_time_string)
    }

    /// Creates a stopped clock with a custom time source.
    pub fn with_source(source: fn() -> String) -> Self {
        Self {
            source,
            reading: String::new(),
            schedule: None,
        }
    }

    /// Starts ticking every [`TICK_INTERVAL`] from `now`.
    ///
    /// The reading is refreshed right away so the readout is never blank.
    /// Starting a running clock replaces its callback and restarts the
    /// schedule; there is never more than one.
    pub fn start(&mut self, now: Instant, on_tick: impl FnMut(&str) + 'static) {
        if self.schedule.is_some() {
            log::debug!("Clock restarted, replacing active schedule");
        }
        self.reading = (self.source)();
        self.schedule = Some(Schedule {
            next_tick: now + TICK_INTERVAL,
            on_tick: Box::new(on_tick),
        });
    }

    /// Cancels the schedule. No ticks fire afterwards.
    pub fn stop(&mut self) {
        if self.schedule.take().is_some() {
            log::debug!("Clock stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.schedule.is_some()
    }

    /// Latest reading.
    pub fn reading(&self) -> &str {
        &self.reading
    }

    /// Fires the tick if it is due and returns the time until the next one.
    ///
    /// After a long stall (e.g. a backgrounded browser tab) a single tick
    /// fires and the schedule restarts from `now` instead of replaying the
    /// missed ones. Returns `None` when stopped.
    pub fn poll(&mut self, now: Instant) -> Option<Duration> {
        let schedule = self.schedule.as_mut()?;

        if now >= schedule.next_tick {
            self.reading = (self.source)();
            (schedule.on_tick)(&self.reading);

            let next = schedule.next_tick + TICK_INTERVAL;
            schedule.next_tick = if next > now { next } else { now + TICK_INTERVAL };
        }

        Some(schedule.next_tick.saturating_duration_since(now))
    }
}

impl Drop for TimeClock {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Current local time, e.g. `3:07:45 PM`.
pub fn local_time_string() -> String {
    chrono::Local::now().format("%-I:%M:%S %p").to_string()
}
