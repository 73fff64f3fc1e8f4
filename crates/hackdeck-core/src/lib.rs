//! # Hackdeck Core Library
//!
//! This library provides the computed core of the hackathon event page:
//! countdown timing, active-section tracking, stat-counter easing, and the
//! visitor's registration state. It implements a CLI-first philosophy where
//! all operations are available via a standalone CLI binary, with GUI
//! shells being thin layers over the same core library.
//!
//! ## Architecture
//!
//! - **Countdown**: A wall-clock-based state machine that requires the
//!   caller to periodically invoke `tick()` for progress updates
//! - **Viewport**: A capability trait over the platform's visibility
//!   primitive, driving the scroll spy and the stat counters
//! - **Storage**: SQLite-backed kv state and TOML-based configuration
//! - **Effects**: Deterministic confetti bursts and the best-effort
//!   decorative animation fetch
//!
//! ## Key Components
//!
//! - [`Countdown`]: Deadline countdown state machine
//! - [`ScrollSpy`]: Active-section tracker
//! - [`EasedCounter`]: One-shot eased stat counter
//! - [`Registration`]: Persisted registration flag and its side effects
//! - [`EventConfig`]: Event configuration management
//! - [`EventPage`]: Shell-facing wiring of all of the above

pub mod calendar;
pub mod clock;
pub mod content;
pub mod countdown;
pub mod counter;
pub mod effects;
pub mod error;
pub mod events;
pub mod page;
pub mod registration;
pub mod scrollspy;
pub mod section;
pub mod storage;
pub mod viewport;

pub use calendar::{google_calendar_link, outlook_calendar_link, EventWindow};
pub use clock::{Clock, ManualClock, SystemClock};
pub use countdown::{Countdown, CountdownSnapshot, CountdownState, Remaining};
pub use counter::EasedCounter;
pub use effects::{ConfettiBurst, ConfettiConfig, HeroVisual};
pub use error::{AssetError, ConfigError, CoreError, StorageError};
pub use events::Event;
pub use page::EventPage;
pub use registration::{
    Launcher, RecordingLauncher, Registration, RegistrationOutcome, SystemLauncher,
};
pub use scrollspy::ScrollSpy;
pub use section::Section;
pub use storage::{
    data_dir, EventConfig, MemoryStore, SqliteStore, StateStore, StatCounter,
};
pub use viewport::{Crossing, ScriptedViewport, ViewportObserver, WatchId};
