//! Active-section tracking.
//!
//! One watch per page section; whichever watched region most recently
//! crossed the visibility threshold is the active section. Sections with
//! no on-page region are skipped silently -- a page variant that drops a
//! section still spies on the rest.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::clock::Clock;
use crate::events::Event;
use crate::section::Section;
use crate::viewport::{CrossingHandler, ViewportError, ViewportObserver, WatchId};

/// A section counts as active once at least half of it sits inside the
/// viewport.
pub const ACTIVE_THRESHOLD: f64 = 0.5;

/// Watches every page section and republishes the active one on change.
pub struct ScrollSpy {
    active: Section,
    crossings: Arc<Mutex<VecDeque<Section>>>,
    watches: Vec<WatchId>,
}

impl ScrollSpy {
    /// Register a watch for each section. Regions the observer does not
    /// know are not an error; they are simply never reported active.
    pub fn mount(observer: &mut dyn ViewportObserver) -> Self {
        let crossings: Arc<Mutex<VecDeque<Section>>> = Arc::new(Mutex::new(VecDeque::new()));
        let mut watches = Vec::new();
        for section in Section::ALL {
            let queue = Arc::clone(&crossings);
            let handler: CrossingHandler = Box::new(move |_crossing| {
                queue.lock().unwrap().push_back(section);
            });
            match observer.observe(section.id(), ACTIVE_THRESHOLD, handler) {
                Ok(watch) => watches.push(watch),
                Err(ViewportError::NoSuchRegion(_)) => {}
            }
        }
        Self {
            active: Section::Home,
            crossings,
            watches,
        }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Drain queued crossings and publish the new active section, if it
    /// changed. When several regions crossed since the last poll, the last
    /// one received wins; there is no positional tie-break.
    pub fn poll(&mut self, clock: &dyn Clock) -> Option<Event> {
        let last = {
            let mut queue = self.crossings.lock().unwrap();
            queue.drain(..).last()
        };
        match last {
            Some(section) if section != self.active => {
                self.active = section;
                Some(Event::SectionChanged {
                    section,
                    at: clock.now(),
                })
            }
            _ => None,
        }
    }

    /// Release every watch. Safe to call repeatedly and during teardown;
    /// crossings delivered before the release are discarded unread.
    pub fn unmount(&mut self, observer: &mut dyn ViewportObserver) {
        for watch in self.watches.drain(..) {
            observer.unobserve(watch);
        }
        self.crossings.lock().unwrap().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::viewport::ScriptedViewport;
    use chrono::Utc;

    fn full_page() -> ScriptedViewport {
        ScriptedViewport::new(Section::ALL.iter().map(|s| s.id()))
    }

    #[test]
    fn starts_at_home() {
        let mut viewport = full_page();
        let spy = ScrollSpy::mount(&mut viewport);
        assert_eq!(spy.active(), Section::Home);
    }

    #[test]
    fn crossing_changes_active_section() {
        let clock = ManualClock::new(Utc::now());
        let mut viewport = full_page();
        let mut spy = ScrollSpy::mount(&mut viewport);
        viewport.emit("about", 0.8);
        match spy.poll(&clock) {
            Some(Event::SectionChanged { section, .. }) => {
                assert_eq!(section, Section::About)
            }
            other => panic!("expected section change, got {other:?}"),
        }
        assert_eq!(spy.active(), Section::About);
        // Re-crossing the already-active section publishes nothing.
        viewport.emit("about", 0.9);
        assert!(spy.poll(&clock).is_none());
    }

    #[test]
    fn last_crossing_received_wins() {
        let clock = ManualClock::new(Utc::now());
        let mut viewport = full_page();
        let mut spy = ScrollSpy::mount(&mut viewport);
        viewport.emit("timeline", 0.7);
        viewport.emit("prizes", 0.6);
        match spy.poll(&clock) {
            Some(Event::SectionChanged { section, .. }) => {
                assert_eq!(section, Section::Prizes)
            }
            other => panic!("expected section change, got {other:?}"),
        }
    }

    #[test]
    fn below_threshold_is_ignored() {
        let clock = ManualClock::new(Utc::now());
        let mut viewport = full_page();
        let mut spy = ScrollSpy::mount(&mut viewport);
        viewport.emit("faqs", 0.2);
        assert!(spy.poll(&clock).is_none());
    }

    #[test]
    fn missing_regions_are_skipped() {
        let clock = ManualClock::new(Utc::now());
        // A page variant with only two named regions.
        let mut viewport = ScriptedViewport::new(["home", "contact"]);
        let mut spy = ScrollSpy::mount(&mut viewport);
        assert_eq!(viewport.watch_count(), 2);
        viewport.emit("contact", 1.0);
        match spy.poll(&clock) {
            Some(Event::SectionChanged { section, .. }) => {
                assert_eq!(section, Section::Contact)
            }
            other => panic!("expected section change, got {other:?}"),
        }
    }

    #[test]
    fn unmount_releases_watches_and_silences_polls() {
        let clock = ManualClock::new(Utc::now());
        let mut viewport = full_page();
        let mut spy = ScrollSpy::mount(&mut viewport);
        viewport.emit("rules", 0.9);
        spy.unmount(&mut viewport);
        assert_eq!(viewport.watch_count(), 0);
        assert!(spy.poll(&clock).is_none());
        // Safe to unmount twice.
        spy.unmount(&mut viewport);
    }
}
