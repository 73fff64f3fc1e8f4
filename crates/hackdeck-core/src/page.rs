//! Page shell wiring.
//!
//! `EventPage` mounts the independent components - countdown, scroll spy,
//! stat counters, registration - over whatever capabilities the shell
//! provides, and funnels their publications through one `tick()`. Teardown
//! halts everything: after it, no component produces further output.

use crate::clock::Clock;
use crate::countdown::{Countdown, CountdownSnapshot};
use crate::counter::EasedCounter;
use crate::error::CoreError;
use crate::events::Event;
use crate::registration::{Launcher, Registration, RegistrationOutcome};
use crate::scrollspy::ScrollSpy;
use crate::section::Section;
use crate::storage::{EventConfig, StateStore};
use crate::viewport::ViewportObserver;

/// One mounted page view.
pub struct EventPage {
    countdown: Countdown,
    spy: ScrollSpy,
    counters: Vec<EasedCounter>,
    registration: Registration,
    torn_down: bool,
}

impl EventPage {
    /// Mount every component. The countdown starts immediately; counters
    /// arm their visibility triggers; the spy watches every section it
    /// can find.
    pub fn mount(
        config: &EventConfig,
        observer: &mut dyn ViewportObserver,
    ) -> Result<Self, CoreError> {
        let mut countdown = Countdown::new(config.countdown_target()?);
        countdown.start();

        let spy = ScrollSpy::mount(observer);

        let counters = config
            .counters
            .iter()
            .map(|stat| {
                let mut counter = EasedCounter::new(&stat.label, &stat.region, stat.target);
                counter.arm(observer);
                counter
            })
            .collect();

        let registration = Registration::new(config)?;

        Ok(Self {
            countdown,
            spy,
            counters,
            registration,
            torn_down: false,
        })
    }

    /// Advance every component once. The shell calls this from its one
    /// repeating timer (roughly once per second; more often while a
    /// counter animates).
    pub fn tick(
        &mut self,
        clock: &dyn Clock,
        observer: &mut dyn ViewportObserver,
    ) -> Vec<Event> {
        let mut events = Vec::new();
        if let Some(event) = self.countdown.tick(clock) {
            events.push(event);
        }
        if let Some(event) = self.spy.poll(clock) {
            events.push(event);
        }
        for counter in &mut self.counters {
            if let Some(value) = counter.frame(clock) {
                if counter.completed() {
                    events.push(Event::CounterCompleted {
                        label: counter.label().to_string(),
                        value,
                        at: clock.now(),
                    });
                    // One-shot: drop the watch once the run has finished.
                    counter.disarm(observer);
                }
            }
        }
        events
    }

    pub fn active_section(&self) -> Section {
        self.spy.active()
    }

    pub fn countdown_snapshot(&self, clock: &dyn Clock) -> CountdownSnapshot {
        self.countdown.snapshot(clock)
    }

    pub fn counters(&self) -> &[EasedCounter] {
        &self.counters
    }

    pub fn is_registered(&self, store: &dyn StateStore) -> bool {
        self.registration.is_registered(store)
    }

    pub fn is_early_bird(&self, clock: &dyn Clock) -> bool {
        self.registration.is_early_bird(&clock.now())
    }

    /// Run the registration action.
    pub fn register(
        &self,
        store: &mut dyn StateStore,
        launcher: &mut dyn Launcher,
        clock: &dyn Clock,
    ) -> RegistrationOutcome {
        self.registration.register(store, launcher, clock.now())
    }

    /// Navigation label for the register button.
    pub fn register_label(&self, store: &dyn StateStore) -> &'static str {
        if self.is_registered(store) {
            "Registered ✓"
        } else {
            "Register Now"
        }
    }

    /// Halt everything: stop the countdown, cancel every counter, release
    /// every viewport watch. Idempotent.
    pub fn teardown(&mut self, observer: &mut dyn ViewportObserver) {
        self.countdown.stop();
        for counter in &mut self.counters {
            counter.cancel();
            counter.disarm(observer);
        }
        self.spy.unmount(observer);
        self.torn_down = true;
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}
