//! Calendar deep links.
//!
//! "Add to calendar" is pure URL construction - no calendar API, no
//! network call. Google's template form wants compact UTC timestamps
//! (`YYYYMMDDTHHMMSSZ`, an ISO-8601 UTC rendering with punctuation and
//! milliseconds stripped); Outlook's compose form wants full ISO-8601 UTC
//! strings. Text fields are percent-encoded in both.

use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

pub const GOOGLE_CALENDAR_BASE: &str = "https://www.google.com/calendar/render";
pub const OUTLOOK_COMPOSE_BASE: &str = "https://outlook.live.com/calendar/0/deeplink/compose";

/// The event's opening and close instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventWindow {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

/// `YYYYMMDDTHHMMSSZ`
fn compact_utc(instant: &DateTime<FixedOffset>) -> String {
    instant.with_timezone(&Utc).format("%Y%m%dT%H%M%SZ").to_string()
}

/// Full ISO-8601 UTC, millisecond precision.
fn iso_utc(instant: &DateTime<FixedOffset>) -> String {
    instant
        .with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn query(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Google Calendar event-template link.
pub fn google_calendar_link(
    window: &EventWindow,
    title: &str,
    details: &str,
    location: &str,
) -> String {
    let dates = format!("{}/{}", compact_utc(&window.start), compact_utc(&window.end));
    let query = query(&[
        ("action", "TEMPLATE"),
        ("text", title),
        ("dates", &dates),
        ("details", details),
        ("location", location),
    ]);
    format!("{GOOGLE_CALENDAR_BASE}?{query}")
}

/// Outlook Live compose link.
pub fn outlook_calendar_link(
    window: &EventWindow,
    title: &str,
    body: &str,
    location: &str,
) -> String {
    let start = iso_utc(&window.start);
    let end = iso_utc(&window.end);
    let query = query(&[
        ("path", "/calendar/action/compose"),
        ("rru", "addevent"),
        ("subject", title),
        ("startdt", &start),
        ("enddt", &end),
        ("body", body),
        ("location", location),
    ]);
    format!("{OUTLOOK_COMPOSE_BASE}?{query}")
}
