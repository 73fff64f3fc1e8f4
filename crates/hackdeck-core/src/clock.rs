//! Injectable time source.
//!
//! Components never read the wall clock directly; they sample whatever
//! `Clock` the shell hands them. Production shells pass [`SystemClock`],
//! tests pass a [`ManualClock`] and move it by hand, so countdown and
//! counter behavior can be driven in virtual time without waiting.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};

/// Time capability used by every time-sampling component.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock implementation for production shells.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Hand-driven clock for deterministic tests.
///
/// Clones share the same instant, so a test can hold one handle while the
/// component under test holds another.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    /// Move the clock forward (or backward, for robustness tests).
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }

    pub fn set(&self, to: DateTime<Utc>) {
        *self.now.lock().unwrap() = to;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}
