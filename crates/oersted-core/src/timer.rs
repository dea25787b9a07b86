//! Virtual-clock timers with single-owner cancellation.
//!
//! Components never sleep. They own one [`TimerSlot`] per animation concern
//! and are driven by `advance(dt)`; the slot fires its timer as many times
//! as `dt` covers. Arming a slot drops whatever timer it held, so a slot can
//! never accumulate duplicate timers.

use std::time::Duration;

/// Periodic timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    period: Duration,
    elapsed: Duration,
}

impl Interval {
    /// Create an interval firing every `period`. A zero period is bumped to
    /// one nanosecond.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_nanos(1)),
            elapsed: Duration::ZERO,
        }
    }

    /// Fire period.
    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Accumulate `dt` and return how many periods completed.
    #[allow(clippy::cast_possible_truncation)]
    pub fn advance(&mut self, dt: Duration) -> u32 {
        self.elapsed += dt;
        let fires = (self.elapsed.as_nanos() / self.period.as_nanos()).min(u128::from(u32::MAX))
            as u32;
        self.elapsed -= self.period * fires;
        fires
    }
}

/// One-shot timer carrying the event it delivers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeout<E> {
    delay: Duration,
    elapsed: Duration,
    event: E,
}

impl<E: Copy> Timeout<E> {
    /// Create a timeout delivering `event` after `delay`.
    #[must_use]
    pub fn new(delay: Duration, event: E) -> Self {
        Self {
            delay,
            elapsed: Duration::ZERO,
            event,
        }
    }

    /// Event delivered on expiry.
    #[must_use]
    pub fn event(&self) -> E {
        self.event
    }

    /// Time left before expiry.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.delay.saturating_sub(self.elapsed)
    }

    /// Accumulate `dt`. On expiry returns the part of `dt` left over after
    /// the deadline.
    pub fn advance(&mut self, dt: Duration) -> Option<Duration> {
        self.elapsed += dt;
        if self.elapsed >= self.delay {
            Some(self.elapsed - self.delay)
        } else {
            None
        }
    }
}

/// Holder of at most one active timer for a single concern.
#[derive(Debug, Clone)]
pub struct TimerSlot<T> {
    timer: Option<T>,
    armed: u64,
}

impl<T> TimerSlot<T> {
    /// Create an idle slot.
    #[must_use]
    pub fn new() -> Self {
        Self {
            timer: None,
            armed: 0,
        }
    }

    /// Install `timer`, cancelling the one previously held.
    pub fn arm(&mut self, timer: T) {
        if self.timer.replace(timer).is_some() {
            tracing::trace!("timer replaced before expiry");
        }
        self.armed += 1;
    }

    /// Cancel the held timer. Returns whether one was active.
    pub fn cancel(&mut self) -> bool {
        self.timer.take().is_some()
    }

    /// Whether a timer is currently held.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.timer.is_some()
    }

    /// Number of live timers in this slot (0 or 1).
    #[must_use]
    pub fn active_count(&self) -> usize {
        usize::from(self.timer.is_some())
    }

    /// How many times the slot has been armed over its lifetime.
    #[must_use]
    pub fn armed_count(&self) -> u64 {
        self.armed
    }

    /// Borrow the held timer.
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.timer.as_ref()
    }
}

impl<T> Default for TimerSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerSlot<Interval> {
    /// Advance the held interval; an idle slot never fires.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        self.timer.as_mut().map_or(0, |t| t.advance(dt))
    }
}

impl<E: Copy> TimerSlot<Timeout<E>> {
    /// Advance the held timeout. On expiry the slot is emptied and the
    /// event is returned with the leftover time.
    pub fn advance(&mut self, dt: Duration) -> Option<(E, Duration)> {
        let leftover = self.timer.as_mut()?.advance(dt)?;
        self.timer.take().map(|t| (t.event, leftover))
    }
}
