mod links;

pub use links::{
    google_calendar_link, outlook_calendar_link, EventWindow, GOOGLE_CALENDAR_BASE,
    OUTLOOK_COMPOSE_BASE,
};
