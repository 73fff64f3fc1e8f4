//! Deadline arithmetic.
//!
//! A deadline minus the current instant decomposes into whole calendar
//! units for display. The decomposition never goes negative: once the
//! deadline has passed, every field clamps to zero.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

pub const MS_PER_SECOND: u64 = 1_000;
pub const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;

/// Time left until a deadline, decomposed into calendar units.
///
/// Each field is the remainder of the total millisecond difference under
/// its unit: `hours < 24`, `minutes < 60`, `seconds < 60`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remaining {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Remaining {
    pub const ZERO: Remaining = Remaining {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Non-negative time from `now` to `deadline`. All-zero when the
    /// deadline is already past.
    pub fn until<Tz1, Tz2>(deadline: &DateTime<Tz1>, now: &DateTime<Tz2>) -> Self
    where
        Tz1: TimeZone,
        Tz2: TimeZone,
    {
        let diff_ms = deadline
            .timestamp_millis()
            .saturating_sub(now.timestamp_millis());
        Self::from_ms(diff_ms.max(0) as u64)
    }

    fn from_ms(ms: u64) -> Self {
        Self {
            days: ms / MS_PER_DAY,
            hours: (ms / MS_PER_HOUR) % 24,
            minutes: (ms / MS_PER_MINUTE) % 60,
            seconds: (ms / MS_PER_SECOND) % 60,
        }
    }

    /// Reconstruct total milliseconds from the decomposed fields.
    ///
    /// Sub-second remainder is lost by the decomposition, so this matches
    /// the original difference only to within one second.
    pub fn total_ms(&self) -> u64 {
        self.days * MS_PER_DAY
            + self.hours * MS_PER_HOUR
            + self.minutes * MS_PER_MINUTE
            + self.seconds * MS_PER_SECOND
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl std::fmt::Display for Remaining {
    /// `DD:HH:MM:SS` with zero-padded fields, the page's display format.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Whether `now` falls strictly before `cutoff` (the early-bird test).
pub fn is_before<Tz1, Tz2>(cutoff: &DateTime<Tz1>, now: &DateTime<Tz2>) -> bool
where
    Tz1: TimeZone,
    Tz2: TimeZone,
{
    now.timestamp_millis() < cutoff.timestamp_millis()
}
