/// Whole seconds, used for elapsed, target and remaining time.
pub type Seconds = u64;

/// Result of advancing the session by one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The clock was not running or already at its target.
    Idle,
    /// Elapsed time moved forward by one second.
    Advanced,
    /// Elapsed time reached the target and the clock stopped.
    TargetReached,
}
