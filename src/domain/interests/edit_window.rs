//! Edit-window policy: the minimum interval between two analyses of the
//! same user.

use chrono::Duration;

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};

/// Default number of days between survey edits.
pub const DEFAULT_EDIT_WINDOW_DAYS: i64 = 7;

/// Error detail key holding the seconds until the window reopens.
pub const RETRY_AFTER_DETAIL: &str = "retry_after_secs";

/// Minimum interval between analyses for one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditWindow {
    days: i64,
}

impl Default for EditWindow {
    fn default() -> Self {
        Self::days(DEFAULT_EDIT_WINDOW_DAYS)
    }
}

impl EditWindow {
    /// Creates a window of the given number of days (negative treated as 0).
    pub fn days(days: i64) -> Self {
        Self { days: days.max(0) }
    }

    pub fn length(&self) -> Duration {
        Duration::days(self.days)
    }

    pub fn length_days(&self) -> i64 {
        self.days
    }

    /// Latest `lastEditedAt` that still allows a new analysis at `now`.
    pub fn cutoff(&self, now: Timestamp) -> Timestamp {
        now.minus(self.length())
    }

    /// True when an analysis at `now` is allowed.
    ///
    /// A user with no previous analysis is treated as last edited at the
    /// epoch, so always allowed.
    pub fn is_open(&self, last_edited_at: Option<Timestamp>, now: Timestamp) -> bool {
        let last = last_edited_at.unwrap_or_else(Timestamp::epoch);
        now.duration_since(&last) >= self.length()
    }

    /// Time left until the window reopens; zero if already open.
    pub fn retry_after(&self, last_edited_at: Timestamp, now: Timestamp) -> Duration {
        let reopens_at = last_edited_at.plus(self.length());
        let remaining = reopens_at.duration_since(&now);
        if remaining < Duration::zero() {
            Duration::zero()
        } else {
            remaining
        }
    }

    /// Fails with `RateLimited` if the window is still closed.
    pub fn check(&self, last_edited_at: Option<Timestamp>, now: Timestamp) -> Result<(), DomainError> {
        match last_edited_at {
            Some(last) if !self.is_open(Some(last), now) => Err(self.rejection(last, now)),
            _ => Ok(()),
        }
    }

    /// The `RateLimited` error for an edit attempted at `now`.
    pub fn rejection(&self, last_edited_at: Timestamp, now: Timestamp) -> DomainError {
        // Round up so clients never retry a second too early.
        let retry = self.retry_after(last_edited_at, now);
        let mut secs = retry.num_seconds();
        if retry > Duration::seconds(secs) {
            secs += 1;
        }

        DomainError::new(
            ErrorCode::RateLimited,
            format!(
                "You can only edit your survey once every {} days.",
                self.days
            ),
        )
        .with_detail(RETRY_AFTER_DETAIL, secs.to_string())
    }
}
