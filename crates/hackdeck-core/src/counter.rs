//! Visibility-armed stat counters.
//!
//! Each counter shows 0 until its host region scrolls into view, then runs
//! a fixed-length eased climb to its target and stays there. The climb is
//! cosine-eased rather than linear, and the final frame lands on the
//! target exactly. A counter runs once per page view; later visibility
//! crossings are ignored.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::clock::Clock;
use crate::viewport::{CrossingHandler, ViewportError, ViewportObserver, WatchId};

/// Length of the climb animation.
pub const EASE_DURATION_MS: u64 = 1_200;

/// Fraction of the host region that must be visible to trigger the climb.
pub const DEFAULT_VISIBILITY_RATIO: f64 = 0.4;

/// Cosine ease: 0 at p=0, 1 at p=1, smooth at both ends.
fn ease(p: f64) -> f64 {
    (1.0 - (std::f64::consts::PI * p).cos()) / 2.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    /// Waiting for the host region to become visible.
    Armed,
    Running { started_at: DateTime<Utc> },
    /// Finished or cancelled; frames stop either way.
    Done,
}

/// One-shot eased climb from 0 to a fixed target.
pub struct EasedCounter {
    label: String,
    region: String,
    target: u64,
    threshold: f64,
    phase: Phase,
    triggered: Arc<AtomicBool>,
    watch: Option<WatchId>,
    value: u64,
    completed: bool,
}

impl EasedCounter {
    pub fn new(label: impl Into<String>, region: impl Into<String>, target: u64) -> Self {
        Self {
            label: label.into(),
            region: region.into(),
            target,
            threshold: DEFAULT_VISIBILITY_RATIO,
            phase: Phase::Armed,
            triggered: Arc::new(AtomicBool::new(false)),
            watch: None,
            value: 0,
            completed: false,
        }
    }

    /// Override the visibility ratio that triggers the climb.
    pub fn with_threshold(mut self, ratio: f64) -> Self {
        self.threshold = ratio;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// Latest reported value.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Whether the climb ran to completion (as opposed to being cancelled).
    pub fn completed(&self) -> bool {
        self.completed
    }

    /// Register the visibility trigger. A counter whose region is absent
    /// from the page simply never fires. Arming twice keeps the first
    /// watch.
    pub fn arm(&mut self, observer: &mut dyn ViewportObserver) {
        if self.watch.is_some() {
            return;
        }
        let triggered = Arc::clone(&self.triggered);
        let handler: CrossingHandler = Box::new(move |_crossing| {
            triggered.store(true, Ordering::SeqCst);
        });
        match observer.observe(&self.region, self.threshold, handler) {
            Ok(watch) => self.watch = Some(watch),
            Err(ViewportError::NoSuchRegion(_)) => {}
        }
    }

    /// Release the visibility watch (after the one-shot trigger has fired,
    /// or at teardown). Idempotent.
    pub fn disarm(&mut self, observer: &mut dyn ViewportObserver) {
        if let Some(watch) = self.watch.take() {
            observer.unobserve(watch);
        }
    }

    /// Advance the animation one frame.
    ///
    /// Returns the value to display, or `None` while waiting for the
    /// trigger and after the climb ends. The reported sequence never
    /// decreases, and the last reported value equals the target exactly.
    pub fn frame(&mut self, clock: &dyn Clock) -> Option<u64> {
        match self.phase {
            Phase::Armed => {
                if !self.triggered.load(Ordering::SeqCst) {
                    return None;
                }
                self.phase = Phase::Running {
                    started_at: clock.now(),
                };
                Some(0)
            }
            Phase::Running { started_at } => {
                let elapsed = (clock.now() - started_at).num_milliseconds().max(0) as u64;
                if elapsed >= EASE_DURATION_MS {
                    self.phase = Phase::Done;
                    self.completed = true;
                    self.value = self.target;
                    return Some(self.target);
                }
                let p = elapsed as f64 / EASE_DURATION_MS as f64;
                let eased = (self.target as f64 * ease(p)).floor() as u64;
                // Clamped so a jittery clock can never walk the display
                // backwards or past the target.
                self.value = self.value.max(eased.min(self.target));
                Some(self.value)
            }
            Phase::Done => None,
        }
    }

    /// Abandon the climb (host region removed mid-animation). No further
    /// frames are reported. Idempotent.
    pub fn cancel(&mut self) {
        self.phase = Phase::Done;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::viewport::ScriptedViewport;
    use chrono::Duration;
    use proptest::prelude::*;

    fn armed_counter(target: u64) -> (EasedCounter, ScriptedViewport, ManualClock) {
        let clock = ManualClock::new(Utc::now());
        let mut viewport = ScriptedViewport::new(["register"]);
        let mut counter = EasedCounter::new("Registered Teams", "register", target);
        counter.arm(&mut viewport);
        (counter, viewport, clock)
    }

    #[test]
    fn silent_until_visible() {
        let (mut counter, _viewport, clock) = armed_counter(120);
        assert!(counter.frame(&clock).is_none());
    }

    #[test]
    fn below_threshold_does_not_trigger() {
        let (mut counter, mut viewport, clock) = armed_counter(120);
        viewport.emit("register", 0.3);
        assert!(counter.frame(&clock).is_none());
        viewport.emit("register", 0.4);
        assert_eq!(counter.frame(&clock), Some(0));
    }

    #[test]
    fn climbs_to_exact_target_then_stops() {
        let (mut counter, mut viewport, clock) = armed_counter(100);
        viewport.emit("register", 0.5);
        assert_eq!(counter.frame(&clock), Some(0));

        // Halfway: ease(0.5) = 0.5.
        clock.advance(Duration::milliseconds(600));
        assert_eq!(counter.frame(&clock), Some(50));

        clock.advance(Duration::milliseconds(600));
        assert_eq!(counter.frame(&clock), Some(100));
        assert!(counter.completed());

        // The run is over; re-crossing does not restart it.
        viewport.emit("register", 1.0);
        clock.advance(Duration::milliseconds(100));
        assert!(counter.frame(&clock).is_none());
        assert_eq!(counter.value(), 100);
    }

    #[test]
    fn cancel_mid_climb_is_silent_and_idempotent() {
        let (mut counter, mut viewport, clock) = armed_counter(100);
        viewport.emit("register", 0.5);
        counter.frame(&clock);
        clock.advance(Duration::milliseconds(300));
        counter.frame(&clock);

        counter.cancel();
        counter.cancel();
        counter.disarm(&mut viewport);
        clock.advance(Duration::milliseconds(2_000));
        assert!(counter.frame(&clock).is_none());
        assert!(!counter.completed());
        assert_eq!(viewport.watch_count(), 0);
    }

    #[test]
    fn custom_threshold_raises_the_trigger_bar() {
        let clock = ManualClock::new(Utc::now());
        let mut viewport = ScriptedViewport::new(["register"]);
        let mut counter =
            EasedCounter::new("Registered Teams", "register", 10).with_threshold(0.9);
        counter.arm(&mut viewport);
        viewport.emit("register", 0.5);
        assert!(counter.frame(&clock).is_none());
        viewport.emit("register", 0.95);
        assert_eq!(counter.frame(&clock), Some(0));
    }

    #[test]
    fn missing_region_never_fires() {
        let clock = ManualClock::new(Utc::now());
        let mut viewport = ScriptedViewport::new(["home"]);
        let mut counter = EasedCounter::new("Mentor Slots", "register", 30);
        counter.arm(&mut viewport);
        viewport.emit("home", 1.0);
        assert!(counter.frame(&clock).is_none());
    }

    #[test]
    fn zero_target_completes_at_zero() {
        let (mut counter, mut viewport, clock) = armed_counter(0);
        viewport.emit("register", 0.5);
        assert_eq!(counter.frame(&clock), Some(0));
        clock.advance(Duration::milliseconds(1_200));
        assert_eq!(counter.frame(&clock), Some(0));
        assert!(counter.completed());
    }

    proptest! {
        #[test]
        fn reported_values_never_decrease_and_finish_exact(
            target in 0u64..1_000_000,
            mut offsets in proptest::collection::vec(0u64..1_200, 1..40),
        ) {
            offsets.sort_unstable();
            let start = Utc::now();
            let clock = ManualClock::new(start);
            let mut viewport = ScriptedViewport::new(["register"]);
            let mut counter = EasedCounter::new("Prize Pool", "register", target);
            counter.arm(&mut viewport);
            viewport.emit("register", 1.0);

            let mut reported = vec![counter.frame(&clock).unwrap()];
            for offset in offsets {
                clock.set(start + Duration::milliseconds(offset as i64));
                reported.push(counter.frame(&clock).unwrap());
            }
            clock.set(start + Duration::milliseconds(EASE_DURATION_MS as i64));
            reported.push(counter.frame(&clock).unwrap());

            prop_assert!(reported.windows(2).all(|w| w[0] <= w[1]));
            prop_assert!(reported.iter().all(|v| *v <= target));
            prop_assert_eq!(*reported.last().unwrap(), target);
        }
    }
}
