//! TOML-based event configuration.
//!
//! Everything the original page hard-coded at build time lives here:
//! - Event identity (name, organizer, venue, contact, socials)
//! - The four fixed instants (start, end, countdown target, early-bird
//!   cutoff), stored as RFC 3339 strings with their zone offsets
//! - The registration form URL
//! - Effect settings (low-motion flag, decorative asset URL, confetti)
//! - Stat counter targets
//!
//! Configuration is stored at `~/.config/hackdeck/config.toml`.

use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use url::Url;

use super::data_dir;
use crate::calendar::EventWindow;
use crate::effects::ConfettiConfig;
use crate::error::ConfigError;

/// Event identity and fixed instants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventInfo {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_organizer")]
    pub organizer: String,
    #[serde(default = "default_venue")]
    pub venue: String,
    /// Location string placed in calendar links.
    #[serde(default = "default_venue")]
    pub location: String,
    /// Long description for calendar links and the about section.
    #[serde(default = "default_details")]
    pub details: String,
    /// One-line description for the compact calendar form.
    #[serde(default = "default_blurb")]
    pub blurb: String,
    #[serde(default = "default_contact_email")]
    pub contact_email: String,
    #[serde(default = "default_linkedin")]
    pub linkedin_url: String,
    #[serde(default = "default_instagram")]
    pub instagram_url: String,
    /// Event opening, RFC 3339.
    #[serde(default = "default_start")]
    pub start: String,
    /// Event close, RFC 3339.
    #[serde(default = "default_end")]
    pub end: String,
    /// Instant the hero countdown runs toward, RFC 3339.
    #[serde(default = "default_countdown_target")]
    pub countdown_target: String,
    /// End of the early-bird window, RFC 3339.
    #[serde(default = "default_early_bird_cutoff")]
    pub early_bird_cutoff: String,
    /// External registration form opened by the register action.
    #[serde(default = "default_registration_url")]
    pub registration_url: String,
}

/// Decorative effect settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectsConfig {
    /// Presentational flag: shells may skip decorative layers when set.
    /// Gates nothing computed.
    #[serde(default)]
    pub low_motion: bool,
    /// Decorative animation payload fetched best-effort at mount.
    #[serde(default = "default_animation_url")]
    pub animation_url: String,
    #[serde(default)]
    pub confetti: ConfettiConfig,
}

/// One stat counter: label, target, and the page region that arms it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatCounter {
    pub label: String,
    pub target: u64,
    #[serde(default = "default_counter_region")]
    pub region: String,
}

/// Event page configuration.
///
/// Serialized to/from TOML at `~/.config/hackdeck/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventConfig {
    #[serde(default)]
    pub event: EventInfo,
    #[serde(default)]
    pub effects: EffectsConfig,
    #[serde(default = "default_counters")]
    pub counters: Vec<StatCounter>,
}

// Default functions
fn default_name() -> String {
    "Agentic AI Hackathon".into()
}
fn default_organizer() -> String {
    "VITKULT".into()
}
fn default_venue() -> String {
    "VIT Bhopal University".into()
}
fn default_details() -> String {
    "Agentic AI Hackathon by VITKULT at VIT Bhopal. Build autonomous agents with real-world impact."
        .into()
}
fn default_blurb() -> String {
    "Agentic AI Hackathon by VITKULT at VIT Bhopal.".into()
}
fn default_contact_email() -> String {
    "team@vitkult.example".into()
}
fn default_linkedin() -> String {
    "https://www.linkedin.com/company/vitkult".into()
}
fn default_instagram() -> String {
    "https://instagram.com/vitkult".into()
}
fn default_start() -> String {
    "2025-09-14T09:00:00+05:30".into()
}
fn default_end() -> String {
    "2025-09-15T18:00:00+05:30".into()
}
fn default_countdown_target() -> String {
    "2025-09-14T23:59:00+05:30".into()
}
fn default_early_bird_cutoff() -> String {
    "2025-09-01T00:00:00+05:30".into()
}
fn default_registration_url() -> String {
    "https://forms.gle/your-form-id".into()
}
fn default_animation_url() -> String {
    "https://assets6.lottiefiles.com/packages/lf20_3vbOcw.json".into()
}
fn default_counter_region() -> String {
    "register".into()
}
fn default_counters() -> Vec<StatCounter> {
    vec![
        StatCounter {
            label: "Registered Teams".into(),
            target: 120,
            region: default_counter_region(),
        },
        StatCounter {
            label: "Mentor Slots".into(),
            target: 30,
            region: default_counter_region(),
        },
        StatCounter {
            label: "Prize Pool (₹)".into(),
            target: 52_000,
            region: default_counter_region(),
        },
    ]
}

impl Default for EventInfo {
    fn default() -> Self {
        Self {
            name: default_name(),
            organizer: default_organizer(),
            venue: default_venue(),
            location: default_venue(),
            details: default_details(),
            blurb: default_blurb(),
            contact_email: default_contact_email(),
            linkedin_url: default_linkedin(),
            instagram_url: default_instagram(),
            start: default_start(),
            end: default_end(),
            countdown_target: default_countdown_target(),
            early_bird_cutoff: default_early_bird_cutoff(),
            registration_url: default_registration_url(),
        }
    }
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            low_motion: false,
            animation_url: default_animation_url(),
            confetti: ConfettiConfig::default(),
        }
    }
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            event: EventInfo::default(),
            effects: EffectsConfig::default(),
            counters: default_counters(),
        }
    }
}

fn instant(key: &str, value: &str) -> Result<DateTime<FixedOffset>, ConfigError> {
    DateTime::parse_from_rfc3339(value).map_err(|e| ConfigError::InvalidValue {
        key: key.to_string(),
        message: e.to_string(),
    })
}

impl EventConfig {
    /// Path of the config file.
    pub fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("~/.config/hackdeck"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk or write-and-return the defaults.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, creating it with defaults when absent.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
            Err(_) => {
                let config = Self::default();
                config.save_to(path)?;
                Ok(config)
            }
        }
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    /// Persist to `path`.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load from disk, returning defaults on error. Never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    // ── Parsed instants ──────────────────────────────────────────────

    pub fn countdown_target(&self) -> Result<DateTime<FixedOffset>, ConfigError> {
        instant("event.countdown_target", &self.event.countdown_target)
    }

    pub fn early_bird_cutoff(&self) -> Result<DateTime<FixedOffset>, ConfigError> {
        instant("event.early_bird_cutoff", &self.event.early_bird_cutoff)
    }

    pub fn event_window(&self) -> Result<EventWindow, ConfigError> {
        let start = instant("event.start", &self.event.start)?;
        let end = instant("event.end", &self.event.end)?;
        if end <= start {
            return Err(ConfigError::InvalidValue {
                key: "event.end".to_string(),
                message: "event ends before it starts".to_string(),
            });
        }
        Ok(EventWindow { start, end })
    }

    pub fn registration_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.event.registration_url).map_err(|e| ConfigError::InvalidValue {
            key: "event.registration_url".to_string(),
            message: e.to_string(),
        })
    }

    // ── Dot-path access ──────────────────────────────────────────────

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let value = value_at(&json, key)?;
        match value {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key and persist. The new value must match
    /// the type already at that key.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json =
            serde_json::to_value(&*self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        set_value_at(&mut json, key, value)?;
        *self =
            serde_json::from_value(json).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        self.save()
    }
}

fn value_at<'a>(root: &'a serde_json::Value, key: &str) -> Option<&'a serde_json::Value> {
    if key.is_empty() {
        return None;
    }
    let mut current = root;
    for part in key.split('.') {
        current = current.get(part)?;
    }
    Some(current)
}

fn set_value_at(
    root: &mut serde_json::Value,
    key: &str,
    raw: &str,
) -> Result<(), ConfigError> {
    let unknown = || ConfigError::UnknownKey(key.to_string());
    let (parent_path, leaf) = match key.rsplit_once('.') {
        Some((parent, leaf)) => (Some(parent), leaf),
        None => (None, key),
    };
    if leaf.is_empty() {
        return Err(unknown());
    }

    let mut parent = root;
    if let Some(path) = parent_path {
        for part in path.split('.') {
            parent = parent.get_mut(part).ok_or_else(unknown)?;
        }
    }
    let object = parent.as_object_mut().ok_or_else(unknown)?;
    let existing = object.get(leaf).ok_or_else(unknown)?;

    let invalid = |message: String| ConfigError::InvalidValue {
        key: key.to_string(),
        message,
    };
    let parsed = match existing {
        serde_json::Value::Bool(_) => serde_json::Value::Bool(
            raw.parse::<bool>()
                .map_err(|_| invalid(format!("cannot parse '{raw}' as bool")))?,
        ),
        serde_json::Value::Number(_) => {
            if let Ok(n) = raw.parse::<u64>() {
                serde_json::Value::Number(n.into())
            } else if let Ok(n) = raw.parse::<f64>() {
                serde_json::Number::from_f64(n)
                    .map(serde_json::Value::Number)
                    .ok_or_else(|| invalid(format!("cannot parse '{raw}' as number")))?
            } else {
                return Err(invalid(format!("cannot parse '{raw}' as number")));
            }
        }
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
            serde_json::from_str(raw).map_err(|e| invalid(e.to_string()))?
        }
        _ => serde_json::Value::String(raw.to_string()),
    };

    object.insert(leaf.to_string(), parsed);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = EventConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: EventConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.event.name, "Agentic AI Hackathon");
        assert_eq!(parsed.counters.len(), 3);
        assert_eq!(parsed.effects.confetti.particle_count, 180);
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let parsed: EventConfig = toml::from_str("").unwrap();
        assert_eq!(parsed.event.organizer, "VITKULT");
        assert!(!parsed.effects.low_motion);
    }

    #[test]
    fn instants_parse_with_their_offsets() {
        let config = EventConfig::default();
        let target = config.countdown_target().unwrap();
        assert_eq!(target.to_rfc3339(), "2025-09-14T23:59:00+05:30");
        let window = config.event_window().unwrap();
        assert!(window.start < window.end);
    }

    #[test]
    fn malformed_instant_is_reported_by_key() {
        let mut config = EventConfig::default();
        config.event.countdown_target = "tomorrow-ish".into();
        match config.countdown_target() {
            Err(ConfigError::InvalidValue { key, .. }) => {
                assert_eq!(key, "event.countdown_target")
            }
            other => panic!("expected invalid value, got {other:?}"),
        }
    }

    #[test]
    fn inverted_window_is_rejected() {
        let mut config = EventConfig::default();
        config.event.end = config.event.start.clone();
        assert!(config.event_window().is_err());
    }

    #[test]
    fn registration_url_must_parse() {
        let mut config = EventConfig::default();
        assert!(config.registration_url().is_ok());
        config.event.registration_url = "not a url".into();
        assert!(config.registration_url().is_err());
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let config = EventConfig::default();
        assert_eq!(config.get("event.organizer").as_deref(), Some("VITKULT"));
        assert_eq!(config.get("effects.low_motion").as_deref(), Some("false"));
        assert_eq!(
            config.get("effects.confetti.particle_count").as_deref(),
            Some("180")
        );
        assert!(config.get("event.missing_key").is_none());
        assert!(config.get("").is_none());
    }

    #[test]
    fn set_value_at_updates_nested_bool() {
        let mut json = serde_json::to_value(EventConfig::default()).unwrap();
        set_value_at(&mut json, "effects.low_motion", "true").unwrap();
        assert_eq!(
            value_at(&json, "effects.low_motion").unwrap(),
            &serde_json::Value::Bool(true)
        );
    }

    #[test]
    fn set_value_at_updates_nested_number() {
        let mut json = serde_json::to_value(EventConfig::default()).unwrap();
        set_value_at(&mut json, "effects.confetti.particle_count", "64").unwrap();
        assert_eq!(
            value_at(&json, "effects.confetti.particle_count").unwrap(),
            &serde_json::Value::Number(64.into())
        );
    }

    #[test]
    fn set_value_at_rejects_unknown_key() {
        let mut json = serde_json::to_value(EventConfig::default()).unwrap();
        assert!(set_value_at(&mut json, "event.nonexistent", "x").is_err());
        assert!(set_value_at(&mut json, "", "x").is_err());
    }

    #[test]
    fn set_value_at_rejects_type_mismatch() {
        let mut json = serde_json::to_value(EventConfig::default()).unwrap();
        let result = set_value_at(&mut json, "effects.low_motion", "loud");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn save_and_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = EventConfig::default();
        config.event.name = "Winter Build Night".into();
        config.save_to(&path).unwrap();

        let loaded = EventConfig::load_from(&path).unwrap();
        assert_eq!(loaded.event.name, "Winter Build Night");
    }

    #[test]
    fn load_from_missing_path_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let loaded = EventConfig::load_from(&path).unwrap();
        assert_eq!(loaded.event.name, "Agentic AI Hackathon");
        assert!(path.exists());
    }
}
