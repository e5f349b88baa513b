//! Clock abstraction for expiry decisions

use chrono::{DateTime, Utc};

/// Source of current time, injected into the session manager.
///
/// Expiry checks are skew-sensitive across service instances; keeping the
/// clock behind a trait lets tests cross expiry boundaries deterministically
/// and keeps clock synchronization a deployment concern.
pub trait Clock: Send + Sync {
    /// Current time
    fn now_utc(&self) -> DateTime<Utc>;

    /// Current time as epoch seconds
    fn now_timestamp(&self) -> i64 {
        self.now_utc().timestamp()
    }
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
