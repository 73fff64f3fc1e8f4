//! Visitor registration state.
//!
//! Registration is a local affair: one persisted boolean flag plus a
//! burst of side effects when the visitor registers - a confetti burst,
//! a toast, and a jump to the external form. The form itself is someone
//! else's system; there is no completion signal to wait for.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};

use crate::countdown::is_before;
use crate::effects::{ConfettiBurst, ConfettiConfig};
use crate::error::ConfigError;
use crate::events::Event;
use crate::storage::{EventConfig, StateStore, REGISTERED_KEY, REGISTERED_VALUE};

/// Browser-launch capability. Production shells open a real browsing
/// context; tests record the URL instead.
pub trait Launcher {
    fn open(&mut self, url: &str) -> Result<(), Box<dyn std::error::Error>>;
}

/// Opens URLs with the OS default browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn open(&mut self, url: &str) -> Result<(), Box<dyn std::error::Error>> {
        open::that(url)?;
        Ok(())
    }
}

/// Records opened URLs without touching a browser.
#[derive(Debug, Clone, Default)]
pub struct RecordingLauncher {
    pub opened: Vec<String>,
}

impl Launcher for RecordingLauncher {
    fn open(&mut self, url: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.opened.push(url.to_string());
        Ok(())
    }
}

/// Everything produced by one register action.
#[derive(Debug, Clone)]
pub struct RegistrationOutcome {
    pub burst: ConfettiBurst,
    pub events: Vec<Event>,
}

/// The page's registration surface.
#[derive(Debug, Clone)]
pub struct Registration {
    form_url: String,
    early_bird_cutoff: DateTime<FixedOffset>,
    confetti: ConfettiConfig,
}

impl Registration {
    /// Build from configuration, validating the form URL and cutoff once
    /// up front.
    pub fn new(config: &EventConfig) -> Result<Self, ConfigError> {
        let form_url = config.registration_url()?.to_string();
        Ok(Self {
            form_url,
            early_bird_cutoff: config.early_bird_cutoff()?,
            confetti: config.effects.confetti.clone(),
        })
    }

    pub fn form_url(&self) -> &str {
        &self.form_url
    }

    /// Whether this visitor has registered. Defaults to false, including
    /// when the store cannot be read.
    pub fn is_registered(&self, store: &dyn StateStore) -> bool {
        matches!(store.get(REGISTERED_KEY), Ok(Some(v)) if v == REGISTERED_VALUE)
    }

    /// Whether `now` still falls inside the early-bird window.
    pub fn is_early_bird<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> bool {
        is_before(&self.early_bird_cutoff, now)
    }

    /// Register this visitor: persist the flag, fire the celebration,
    /// raise a toast, and open the external form.
    ///
    /// The flag write is best-effort - the celebration, notice and
    /// navigation go ahead even when storage is unavailable, and the form
    /// is opened even when the flag write failed. Calling this again
    /// later leaves the flag set (the action is idempotent in its final
    /// state).
    pub fn register(
        &self,
        store: &mut dyn StateStore,
        launcher: &mut dyn Launcher,
        now: DateTime<Utc>,
    ) -> RegistrationOutcome {
        let already_registered = self.is_registered(store);
        let _ = store.set(REGISTERED_KEY, REGISTERED_VALUE);

        let burst = ConfettiBurst::generate(&self.confetti);
        let mut events = vec![
            Event::RegistrationRecorded {
                already_registered,
                at: now,
            },
            Event::Notice {
                title: "Registration".to_string(),
                body: "Opening registration form...".to_string(),
                at: now,
            },
        ];
        if launcher.open(&self.form_url).is_ok() {
            events.push(Event::RegistrationFormOpened {
                url: self.form_url.clone(),
                at: now,
            });
        }
        RegistrationOutcome { burst, events }
    }
}
