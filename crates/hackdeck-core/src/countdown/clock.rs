//! Countdown state machine.
//!
//! The countdown is a wall-clock-based state machine with no internal
//! threads - the shell owns the one repeating timer and calls `tick()`
//! roughly once per second. Each tick samples the injected [`Clock`] and
//! publishes only when the displayed value actually changes, so a shell
//! that ticks faster than once per second does not spam its subscribers.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> Stopped (terminal)
//! ```

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use super::Remaining;
use crate::clock::Clock;
use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountdownState {
    Idle,
    Running,
    /// Terminal: set by `stop()` when the host view is torn down.
    Stopped,
}

/// Countdown toward a fixed deadline.
#[derive(Debug, Clone)]
pub struct Countdown {
    deadline: DateTime<FixedOffset>,
    state: CountdownState,
    /// Last value published through a tick event.
    last_published: Option<Remaining>,
    reached_emitted: bool,
}

/// Point-in-time view of the countdown, for status commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownSnapshot {
    pub state: CountdownState,
    pub deadline: DateTime<FixedOffset>,
    pub remaining: Remaining,
    pub reached: bool,
    pub at: DateTime<Utc>,
}

impl Countdown {
    pub fn new(deadline: DateTime<FixedOffset>) -> Self {
        Self {
            deadline,
            state: CountdownState::Idle,
            last_published: None,
            reached_emitted: false,
        }
    }

    pub fn state(&self) -> CountdownState {
        self.state
    }

    pub fn deadline(&self) -> DateTime<FixedOffset> {
        self.deadline
    }

    /// Begin sampling. A no-op while already running, so a second `start`
    /// never yields a second publication stream. A stopped countdown stays
    /// stopped.
    pub fn start(&mut self) {
        if self.state == CountdownState::Idle {
            self.state = CountdownState::Running;
        }
    }

    /// Sample the clock and publish when the display changes.
    ///
    /// The zero-crossing sample is published as [`Event::CountdownReached`]
    /// (exactly once, including a start that is already past the deadline);
    /// the display is all-zero from then on. Sampling continues after the
    /// deadline until `stop()` -- the re-sampled zeros simply publish
    /// nothing new.
    pub fn tick(&mut self, clock: &dyn Clock) -> Option<Event> {
        if self.state != CountdownState::Running {
            return None;
        }
        let now = clock.now();
        let remaining = Remaining::until(&self.deadline, &now);
        if self.last_published == Some(remaining) {
            return None;
        }
        self.last_published = Some(remaining);
        if remaining.is_zero() {
            if self.reached_emitted {
                return None;
            }
            self.reached_emitted = true;
            return Some(Event::CountdownReached { at: now });
        }
        Some(Event::CountdownTick { remaining, at: now })
    }

    /// Cancel sampling. Idempotent; after this `tick()` never publishes
    /// again.
    pub fn stop(&mut self) {
        self.state = CountdownState::Stopped;
    }

    pub fn snapshot(&self, clock: &dyn Clock) -> CountdownSnapshot {
        let now = clock.now();
        let remaining = Remaining::until(&self.deadline, &now);
        CountdownSnapshot {
            state: self.state,
            deadline: self.deadline,
            remaining,
            reached: remaining.is_zero(),
            at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use chrono::Duration;

    fn deadline() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2025-09-14T23:59:00+05:30").unwrap()
    }

    fn running_at(now: &str) -> (Countdown, ManualClock) {
        let clock = ManualClock::new(
            DateTime::parse_from_rfc3339(now)
                .unwrap()
                .with_timezone(&Utc),
        );
        let mut countdown = Countdown::new(deadline());
        countdown.start();
        (countdown, clock)
    }

    #[test]
    fn publishes_first_sample() {
        let (mut countdown, clock) = running_at("2025-09-14T23:58:30+05:30");
        match countdown.tick(&clock) {
            Some(Event::CountdownTick { remaining, .. }) => {
                assert_eq!(remaining.seconds, 30);
            }
            other => panic!("expected tick, got {other:?}"),
        }
    }

    #[test]
    fn unchanged_sample_publishes_nothing() {
        // 30.5 s out, so the next 300 ms stay inside the same display second.
        let (mut countdown, clock) = running_at("2025-09-14T23:58:29.500+05:30");
        assert!(countdown.tick(&clock).is_some());
        clock.advance(Duration::milliseconds(300));
        assert!(countdown.tick(&clock).is_none());
        clock.advance(Duration::milliseconds(700));
        assert!(countdown.tick(&clock).is_some());
    }

    #[test]
    fn reached_emitted_once_then_silence() {
        let (mut countdown, clock) = running_at("2025-09-14T23:58:59+05:30");
        assert!(countdown.tick(&clock).is_some());
        clock.advance(Duration::seconds(1));
        match countdown.tick(&clock) {
            Some(Event::CountdownReached { .. }) => {}
            other => panic!("expected reached, got {other:?}"),
        }
        // Still running, still sampling: the zeros publish nothing new.
        assert_eq!(countdown.state(), CountdownState::Running);
        for _ in 0..5 {
            clock.advance(Duration::seconds(1));
            assert!(countdown.tick(&clock).is_none());
        }
    }

    #[test]
    fn start_past_deadline_reports_reached() {
        let (mut countdown, clock) = running_at("2025-09-15T00:00:00+05:30");
        match countdown.tick(&clock) {
            Some(Event::CountdownReached { .. }) => {}
            other => panic!("expected reached, got {other:?}"),
        }
    }

    #[test]
    fn stop_silences_ticks() {
        let (mut countdown, clock) = running_at("2025-09-14T23:58:30+05:30");
        assert!(countdown.tick(&clock).is_some());
        countdown.stop();
        for _ in 0..3 {
            clock.advance(Duration::seconds(1));
            assert!(countdown.tick(&clock).is_none());
        }
    }

    #[test]
    fn stop_is_idempotent_and_terminal() {
        let (mut countdown, clock) = running_at("2025-09-14T23:58:30+05:30");
        countdown.stop();
        countdown.stop();
        // start() cannot revive a stopped countdown.
        countdown.start();
        assert_eq!(countdown.state(), CountdownState::Stopped);
        assert!(countdown.tick(&clock).is_none());
    }

    #[test]
    fn start_while_running_is_noop() {
        let (mut countdown, clock) = running_at("2025-09-14T23:58:30+05:30");
        assert!(countdown.tick(&clock).is_some());
        countdown.start();
        // No re-publication of the unchanged value after the second start.
        assert!(countdown.tick(&clock).is_none());
    }

    #[test]
    fn snapshot_reports_reached_flag() {
        let (countdown, clock) = running_at("2025-09-15T00:00:00+05:30");
        let snapshot = countdown.snapshot(&clock);
        assert!(snapshot.reached);
        assert_eq!(snapshot.remaining, Remaining::ZERO);
    }
}
