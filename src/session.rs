/// The timer session: elapsed, target and running state with write-through
/// persistence into a key-value store.
use anyhow::Result;

use crate::db::KeyValueStore;
use crate::types::{Seconds, TickOutcome};

pub const KEY_ELAPSED: &str = "currentTime";
pub const KEY_TARGET: &str = "targetTime";
pub const KEY_RUNNING: &str = "isRunning";

pub struct Session<S: KeyValueStore> {
    store: S,
    elapsed: Seconds,
    target: Seconds,
    running: bool,
    editing: bool,
}

impl<S: KeyValueStore> Session<S> {
    /// Restores a session from the store. Missing keys default to zero and
    /// not running; the form is shown until a target has been stored.
    pub fn load(store: S) -> Result<Self> {
        let elapsed = read_number(&store, KEY_ELAPSED)?;
        let stored_target = store.get(KEY_TARGET)?.filter(|value| !value.is_empty());
        let target = match stored_target.as_deref() {
            Some(value) => parse_stored(KEY_TARGET, value),
            None => 0,
        };
        let running = match store.get(KEY_RUNNING)? {
            Some(value) => parse_stored_flag(&value),
            None => false,
        };
        let session = Self {
            store,
            elapsed,
            target,
            running,
            editing: stored_target.is_none(),
        };
        tracing::info!(
            elapsed = session.elapsed,
            target_secs = session.target,
            running = session.running,
            "session loaded"
        );
        Ok(session)
    }

    pub fn elapsed(&self) -> Seconds {
        self.elapsed
    }

    pub fn target(&self) -> Seconds {
        self.target
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Time left until the target, never negative.
    pub fn remaining(&self) -> Seconds {
        self.target.saturating_sub(self.elapsed)
    }

    /// Whether the tick process should be active.
    pub fn tick_active(&self) -> bool {
        self.running && self.elapsed < self.target
    }

    /// Commits a new target from raw field input. Absent or non-numeric
    /// fields count as zero; no upper bounds are enforced.
    pub fn commit_target(
        &mut self,
        hours: Option<&str>,
        minutes: Option<&str>,
        seconds: Option<&str>,
    ) -> Result<Seconds> {
        let hours = parse_field(hours);
        let minutes = parse_field(minutes);
        let seconds = parse_field(seconds);
        let total = hours
            .saturating_mul(3600)
            .saturating_add(minutes.saturating_mul(60))
            .saturating_add(seconds);
        self.target = total;
        self.editing = false;
        tracing::info!(hours, minutes, seconds, target_secs = total, "target committed");
        self.store.set(KEY_TARGET, &total.to_string())?;
        Ok(total)
    }

    /// Flips the running flag and returns the new value.
    pub fn toggle_running(&mut self) -> Result<bool> {
        self.running = !self.running;
        tracing::info!(running = self.running, "run state toggled");
        self.store.set(KEY_RUNNING, flag_value(self.running))?;
        Ok(self.running)
    }

    /// Switches to the form. Refused while the clock is running.
    pub fn request_edit(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.editing = true;
        true
    }

    /// Leaves the form without committing, once a target exists.
    pub fn cancel_edit(&mut self) -> Result<bool> {
        if !self.editing || !has_target(&self.store)? {
            return Ok(false);
        }
        self.editing = false;
        Ok(true)
    }

    /// Advances elapsed time by one second in memory. Reaching the target
    /// clamps elapsed to it and stops the clock. Saving is left to
    /// `save_progress` and notifying the user to the caller.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.tick_active() {
            return TickOutcome::Idle;
        }
        let next = self.elapsed + 1;
        if next >= self.target {
            self.elapsed = self.target;
            self.running = false;
            tracing::info!(target_secs = self.target, "target reached");
            return TickOutcome::TargetReached;
        }
        self.elapsed = next;
        TickOutcome::Advanced
    }

    /// Zeroes elapsed time and stops the clock.
    pub fn midnight_reset(&mut self) -> Result<()> {
        self.elapsed = 0;
        self.running = false;
        tracing::info!(target_secs = self.target, "session reset");
        self.save_progress()
    }

    /// Forgets the stored session entirely; the next start shows the form.
    pub fn clear(&mut self) -> Result<()> {
        self.elapsed = 0;
        self.target = 0;
        self.running = false;
        self.editing = true;
        tracing::info!("session cleared");
        let mut result = Ok(());
        for key in [KEY_ELAPSED, KEY_TARGET, KEY_RUNNING] {
            result = result.and(self.store.remove(key));
        }
        result
    }

    /// Writes elapsed time and the running flag. Both writes are attempted;
    /// the first failure is returned and memory stays as it is.
    pub fn save_progress(&mut self) -> Result<()> {
        let elapsed = self.store.set(KEY_ELAPSED, &self.elapsed.to_string());
        let running = self.store.set(KEY_RUNNING, flag_value(self.running));
        elapsed.and(running)
    }
}

fn flag_value(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// An empty stored target counts as never set.
fn has_target(store: &impl KeyValueStore) -> Result<bool> {
    Ok(store.get(KEY_TARGET)?.is_some_and(|value| !value.is_empty()))
}

/// Lenient integer parse of a form field: leading whitespace is skipped and
/// the leading run of digits is used. Anything else, including a sign, is 0.
pub fn parse_field(value: Option<&str>) -> Seconds {
    let Some(value) = value else {
        return 0;
    };
    let digits: String = value
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(Seconds::MAX)
}

fn read_number(store: &impl KeyValueStore, key: &str) -> Result<Seconds> {
    Ok(match store.get(key)? {
        Some(value) if !value.is_empty() => parse_stored(key, &value),
        _ => 0,
    })
}

fn parse_stored(key: &str, value: &str) -> Seconds {
    match value.trim().parse() {
        Ok(parsed) => parsed,
        Err(_) => {
            tracing::warn!(key, value, "ignoring unreadable stored value");
            0
        }
    }
}

fn parse_stored_flag(value: &str) -> bool {
    match value.trim() {
        "true" => true,
        "false" | "" => false,
        other => {
            tracing::warn!(key = KEY_RUNNING, value = other, "ignoring unreadable stored value");
            false
        }
    }
}
