/// Deadline-based timers driven by the event loop: the one-second ticker and
/// the midnight reset.
use std::time::{Duration, Instant};

use chrono::{DateTime, TimeZone, Utc};

use crate::types::Seconds;

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// A point in time read from both clocks. The ticker runs on the monotonic
/// clock; the midnight reset compares wall time, which keeps moving while
/// the machine is suspended.
#[derive(Clone, Copy, Debug)]
pub struct Moment {
    pub instant: Instant,
    pub wall: DateTime<Utc>,
}

impl Moment {
    pub fn now() -> Self {
        Self {
            instant: Instant::now(),
            wall: Utc::now(),
        }
    }

    /// Both clocks advanced by `elapsed`.
    pub fn after(self, elapsed: Duration) -> Self {
        let wall = chrono::Duration::from_std(elapsed)
            .ok()
            .and_then(|step| self.wall.checked_add_signed(step))
            .unwrap_or(self.wall);
        Self {
            instant: self.instant + elapsed,
            wall,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Armed {
    target: Seconds,
    next: Instant,
}

/// Periodic ticker that follows an activation predicate.
///
/// `sync` is called after every state change. It arms the ticker when the
/// predicate turns true and cancels it when the predicate turns false or the
/// target changes, so at most one schedule exists at any time.
#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    armed: Option<Armed>,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            armed: None,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    pub fn sync(&mut self, active: bool, target: Seconds, now: Instant) {
        match self.armed {
            Some(armed) if active && armed.target == target => {}
            _ if active => {
                self.cancel();
                self.armed = Some(Armed {
                    target,
                    next: now + self.period,
                });
                tracing::debug!(target_secs = target, "ticker armed");
            }
            Some(_) => self.cancel(),
            None => {}
        }
    }

    /// Consumes one due tick, if any. Call repeatedly to catch up after a
    /// slow frame, re-syncing between calls.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.armed.as_mut() {
            Some(armed) if armed.next <= now => {
                armed.next += self.period;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        if self.armed.take().is_some() {
            tracing::debug!("ticker cancelled");
        }
    }
}

/// One-shot reset scheduled for the next local midnight.
///
/// Armed once when the app starts and not re-armed after it fires. The
/// deadline is a wall-clock time, so a reset missed while suspended fires on
/// the first check after wake-up.
#[derive(Debug)]
pub struct MidnightReset {
    deadline: Option<DateTime<Utc>>,
}

impl MidnightReset {
    pub fn arm<Tz: TimeZone>(wall: &DateTime<Tz>) -> Self {
        let deadline = next_midnight(wall).map(|midnight| midnight.with_timezone(&Utc));
        match deadline {
            Some(deadline) => tracing::debug!(%deadline, "midnight reset armed"),
            None => tracing::warn!("could not determine next midnight, reset disabled"),
        }
        Self { deadline }
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true once, when the deadline has passed.
    pub fn fire(&mut self, now: &DateTime<Utc>) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= *now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        if self.deadline.take().is_some() {
            tracing::debug!("midnight reset cancelled");
        }
    }
}

/// Start of the next calendar day in `now`'s timezone. When that midnight is
/// skipped by a DST transition, the first valid hour after it is used.
pub fn next_midnight<Tz: TimeZone>(now: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    let tomorrow = now.date_naive().succ_opt()?;
    let tz = now.timezone();
    (0..3).find_map(|hour| {
        let local = tomorrow.and_hms_opt(hour, 0, 0)?;
        tz.from_local_datetime(&local).earliest()
    })
}
