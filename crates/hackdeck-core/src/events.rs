use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::countdown::Remaining;
use crate::section::Section;

/// Every observable state change on the page produces an Event.
/// Shells poll components and render the latest values they carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// The countdown display changed.
    CountdownTick {
        remaining: Remaining,
        at: DateTime<Utc>,
    },
    /// The countdown target has passed; the display is all-zero from here on.
    CountdownReached { at: DateTime<Utc> },
    /// A different section is now centered in the viewport.
    SectionChanged {
        section: Section,
        at: DateTime<Utc>,
    },
    /// A stat counter finished its run at exactly its target.
    CounterCompleted {
        label: String,
        value: u64,
        at: DateTime<Utc>,
    },
    /// The registration flag was written (or re-written).
    RegistrationRecorded {
        already_registered: bool,
        at: DateTime<Utc>,
    },
    /// The external registration form was opened in a new browsing context.
    RegistrationFormOpened { url: String, at: DateTime<Utc> },
    /// A short user-facing notice (toast).
    Notice {
        title: String,
        body: String,
        at: DateTime<Utc>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_tag_by_type() {
        let event = Event::CountdownReached { at: Utc::now() };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "CountdownReached");
    }

    #[test]
    fn tick_round_trips() {
        let event = Event::CountdownTick {
            remaining: Remaining {
                days: 1,
                hours: 2,
                minutes: 3,
                seconds: 4,
            },
            at: Utc::now(),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
