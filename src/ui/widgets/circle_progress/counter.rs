//! Percentage counter driven by a repeating tick
//!
//! A session counts from 0 to its target, one tick per percentage point.
//! Ticks are spaced `duration / target` apart so the label finishes counting
//! at roughly the same time as the sweep.

use std::time::Duration;

/// Identifies one counter session
///
/// Ticks carry the id of the session that scheduled them, so ticks from a
/// replaced session can be recognised and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl SessionId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The id that follows this one
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Lifecycle of the counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CounterState {
    /// No session has been started
    #[default]
    Idle,
    /// Ticking toward the target
    Running,
    /// Reached the target; absorbing until the next start
    Completed,
}

/// Interval between ticks
///
/// `None` when there is nothing to count, or when the interval truncates to
/// zero and the counter could not be scheduled at all.
pub fn tick_interval(duration: Duration, target: u32) -> Option<Duration> {
    if target == 0 {
        return None;
    }
    Some(duration / target).filter(|interval| !interval.is_zero())
}

/// One run of the counter from 0 to `target`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterSession {
    id: SessionId,
    interval: Duration,
    count: u32,
    target: u32,
    state: CounterState,
}

impl CounterSession {
    /// Start a running session
    ///
    /// Returns `None` when [`tick_interval`] has no interval to offer.
    pub fn new(id: SessionId, duration: Duration, target: u32) -> Option<Self> {
        let interval = tick_interval(duration, target)?;
        Some(Self {
            id,
            interval,
            count: 0,
            target,
            state: CounterState::Running,
        })
    }

    /// A session that has already reached `target`
    pub fn completed(id: SessionId, target: u32) -> Self {
        Self {
            id,
            interval: Duration::ZERO,
            count: target,
            target,
            state: CounterState::Completed,
        }
    }

    /// Advance one tick
    ///
    /// Returns the new count, or `None` once the session has completed.
    pub fn tick(&mut self) -> Option<u32> {
        if self.state != CounterState::Running {
            return None;
        }

        self.count += 1;
        if self.count >= self.target {
            self.state = CounterState::Completed;
        }
        Some(self.count)
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn state(&self) -> CounterState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == CounterState::Running
    }
}
