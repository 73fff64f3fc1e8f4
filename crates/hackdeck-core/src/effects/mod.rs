mod confetti;
mod lottie;

pub use confetti::{ConfettiBurst, ConfettiConfig, Particle, PALETTE};
pub use lottie::{fetch_animation, fetch_animation_blocking, HeroVisual};
