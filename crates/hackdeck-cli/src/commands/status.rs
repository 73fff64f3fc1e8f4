use hackdeck_core::{
    Clock, EventConfig, Registration, Remaining, SqliteStore, SystemClock,
};
use serde::Serialize;

#[derive(Serialize)]
struct StatusReport {
    registered: bool,
    register_label: &'static str,
    early_bird: bool,
    remaining: Remaining,
    reached: bool,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = EventConfig::load_or_default();
    let clock = SystemClock;
    let store = SqliteStore::open()?;
    let registration = Registration::new(&config)?;

    let now = clock.now();
    let remaining = Remaining::until(&config.countdown_target()?, &now);
    let registered = registration.is_registered(&store);
    let report = StatusReport {
        registered,
        register_label: if registered {
            "Registered ✓"
        } else {
            "Register Now"
        },
        early_bird: registration.is_early_bird(&now),
        remaining,
        reached: remaining.is_zero(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
