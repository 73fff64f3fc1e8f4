//! Celebration burst generation.
//!
//! The registration action fires a short decorative particle burst. The
//! burst here is pure data - a set of launch angles, speeds and colors
//! for whatever layer draws it. Quantity, spread and origin come from
//! configuration, not computation. With a seed set the burst is fully
//! reproducible.

use rand::prelude::*;
use rand_pcg::Mcg128Xsl64;
use serde::{Deserialize, Serialize};

/// The page's accent colors.
pub const PALETTE: [&str; 2] = ["#7c3aed", "#06b6d4"];

/// Burst parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfettiConfig {
    #[serde(default = "default_particle_count")]
    pub particle_count: usize,
    /// Full fan width in degrees, centered on straight up.
    #[serde(default = "default_spread_deg")]
    pub spread_deg: f64,
    /// Launch origin in viewport fractions (0,0 = top left).
    #[serde(default = "default_origin_x")]
    pub origin_x: f64,
    #[serde(default = "default_origin_y")]
    pub origin_y: f64,
    /// Seed for reproducibility (None = OS entropy).
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_particle_count() -> usize {
    180
}
fn default_spread_deg() -> f64 {
    70.0
}
fn default_origin_x() -> f64 {
    0.5
}
fn default_origin_y() -> f64 {
    0.65
}

impl Default for ConfettiConfig {
    fn default() -> Self {
        Self {
            particle_count: default_particle_count(),
            spread_deg: default_spread_deg(),
            origin_x: default_origin_x(),
            origin_y: default_origin_y(),
            seed: None,
        }
    }
}

/// One launched particle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Launch angle in degrees; 90 is straight up.
    pub angle_deg: f64,
    /// Launch speed, 0..1 of the renderer's maximum.
    pub speed: f64,
    /// Horizontal drift applied over the particle's life, -1..1.
    pub drift: f64,
    pub color: String,
}

/// A generated burst, ready for a drawing layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfettiBurst {
    pub origin: (f64, f64),
    pub particles: Vec<Particle>,
}

impl ConfettiBurst {
    pub fn generate(config: &ConfettiConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => Mcg128Xsl64::seed_from_u64(seed),
            None => Mcg128Xsl64::from_entropy(),
        };
        let half = config.spread_deg / 2.0;
        let particles = (0..config.particle_count)
            .map(|_| Particle {
                angle_deg: 90.0 + rng.gen_range(-half..=half),
                speed: rng.gen_range(0.4..=1.0),
                drift: rng.gen_range(-1.0..=1.0),
                color: PALETTE[rng.gen_range(0..PALETTE.len())].to_string(),
            })
            .collect();
        Self {
            origin: (config.origin_x, config.origin_y),
            particles,
        }
    }
}
