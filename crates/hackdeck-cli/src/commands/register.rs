use hackdeck_core::{
    Clock, Event, EventConfig, RecordingLauncher, Registration, SqliteStore, SystemClock,
    SystemLauncher,
};
use serde::Serialize;

#[derive(Serialize)]
struct RegisterReport {
    events: Vec<Event>,
    confetti_particles: usize,
    form_url: String,
}

pub fn run(no_open: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = EventConfig::load_or_default();
    let clock = SystemClock;
    let mut store = SqliteStore::open()?;
    let registration = Registration::new(&config)?;

    let outcome = if no_open {
        let mut launcher = RecordingLauncher::default();
        registration.register(&mut store, &mut launcher, clock.now())
    } else {
        let mut launcher = SystemLauncher;
        registration.register(&mut store, &mut launcher, clock.now())
    };

    let report = RegisterReport {
        confetti_particles: outcome.burst.particles.len(),
        form_url: registration.form_url().to_string(),
        events: outcome.events,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
