//! Viewport visibility capability.
//!
//! The platform's intersection primitive sits behind this trait so the
//! scroll spy and the stat counters can be unit-tested against a scripted
//! implementation that synthesizes crossings deterministically, without a
//! rendering surface. A GUI shell implements it over its own viewport
//! machinery; headless shells use [`ScriptedViewport`].

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A visibility sample for a watched page region: the fraction of the
/// region currently inside the viewport, 0.0 to 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crossing {
    pub region: String,
    pub ratio: f64,
}

/// Runs on every threshold crossing of the watched region.
pub type CrossingHandler = Box<dyn FnMut(&Crossing) + Send>;

/// Identifies one registered watch. Each watcher owns its own handles and
/// releases them on teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WatchId(u64);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewportError {
    /// The page has no region with this identifier.
    #[error("no region '{0}' on the page")]
    NoSuchRegion(String),
}

/// Platform hook for viewport visibility.
pub trait ViewportObserver {
    /// Watch `region`; the handler runs whenever the region's visible
    /// ratio reaches `threshold`. Fails only when the region does not
    /// exist on the page.
    fn observe(
        &mut self,
        region: &str,
        threshold: f64,
        handler: CrossingHandler,
    ) -> Result<WatchId, ViewportError>;

    /// Release one watch. Unknown or already-released handles are a no-op.
    fn unobserve(&mut self, watch: WatchId);
}

struct Watch {
    region: String,
    threshold: f64,
    handler: CrossingHandler,
}

/// Deterministic observer for tests and headless shells.
///
/// Regions are declared up front; crossings are injected with [`emit`].
/// Several watches may target the same region, each with its own
/// threshold, matching one observer per element on the real page.
///
/// [`emit`]: ScriptedViewport::emit
pub struct ScriptedViewport {
    regions: HashSet<String>,
    watches: HashMap<WatchId, Watch>,
    next_id: u64,
}

impl ScriptedViewport {
    pub fn new<I, S>(regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            regions: regions.into_iter().map(Into::into).collect(),
            watches: HashMap::new(),
            next_id: 0,
        }
    }

    /// Deliver a visibility sample for `region` to every watch whose
    /// threshold it reaches.
    pub fn emit(&mut self, region: &str, ratio: f64) {
        let crossing = Crossing {
            region: region.to_string(),
            ratio,
        };
        for watch in self.watches.values_mut() {
            if watch.region == region && ratio >= watch.threshold {
                (watch.handler)(&crossing);
            }
        }
    }

    /// Number of live watches, for teardown assertions.
    pub fn watch_count(&self) -> usize {
        self.watches.len()
    }

    /// Whether any live watch targets `region`.
    pub fn is_watched(&self, region: &str) -> bool {
        self.watches.values().any(|w| w.region == region)
    }
}

impl ViewportObserver for ScriptedViewport {
    fn observe(
        &mut self,
        region: &str,
        threshold: f64,
        handler: CrossingHandler,
    ) -> Result<WatchId, ViewportError> {
        if !self.regions.contains(region) {
            return Err(ViewportError::NoSuchRegion(region.to_string()));
        }
        let id = WatchId(self.next_id);
        self.next_id += 1;
        self.watches.insert(
            id,
            Watch {
                region: region.to_string(),
                threshold,
                handler,
            },
        );
        Ok(id)
    }

    fn unobserve(&mut self, watch: WatchId) {
        self.watches.remove(&watch);
    }
}
