//! Slingroll - launch-and-roll simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (flight, bounce, roll, rest)
//! - `upgrades`: Upgrade levels and their effect on launch parameters
//! - `config`: JSON configuration loading
//! - `error`: Configuration and parameter errors

pub mod config;
pub mod error;
pub mod sim;
pub mod upgrades;

pub use config::Config;
pub use error::{ConfigError, ParamError};
pub use upgrades::Upgrades;

use glam::Vec2;

/// Default simulation constants
pub mod consts {
    /// Steps per second the per-step units are tuned for
    pub const STEPS_PER_SECOND: u32 = 60;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Launch origin (slingshot point)
    pub const LAUNCH_ORIGIN_X: f32 = 500.0;
    pub const LAUNCH_ORIGIN_Y: f32 = 450.0;
    /// Ground contact plane (y grows downward)
    pub const GROUND_Y: f32 = 450.0;

    /// Gravity added to vy every airborne step
    pub const GRAVITY: f32 = 0.5;
    pub const AIR_FRICTION: f32 = 0.99;
    pub const GROUND_FRICTION: f32 = 0.98;
    /// Fraction of vertical speed kept on a bounce
    pub const RESTITUTION: f32 = 0.5;

    pub const LAUNCH_POWER: f32 = 10.0;
    /// Divides pull-back displacement when deriving release velocity
    pub const LAUNCH_NORMALIZATION: f32 = 50.0;
    pub const MAX_PULL_BACK: f32 = 70.0;

    pub const BODY_RADIUS: f32 = 20.0;
    /// Landing |vy| above this bounces, at or below it starts rolling
    pub const LANDING_SPEED: f32 = 2.0;
    /// Rolling |vx| below this comes to rest
    pub const STOP_EPSILON: f32 = 0.1;
    pub const WEIGHT: f32 = 1.0;

    /// Mid-flight impulse: vy set to -BOOST, vx nudged by NUDGE
    pub const IMPULSE_BOOST: f32 = 12.0;
    pub const IMPULSE_NUDGE: f32 = 3.0;

    /// Key launch base velocity (before boost)
    pub const KEY_LAUNCH_SPEED: f32 = 12.0;
    pub const KEY_LAUNCH_LIFT: f32 = 8.0;
}

/// Clamp a vector to at most `max_len`, keeping its direction
#[inline]
pub fn clamp_to_radius(v: Vec2, max_len: f32) -> Vec2 {
    let len = v.length();
    if len > max_len && len > 0.0 {
        v * (max_len / len)
    } else {
        v
    }
}

/// Rotation produced by rolling `dx` units on a wheel of `radius`
///
/// Returns 0 for a degenerate radius or non-finite input.
#[inline]
pub fn roll_angle(dx: f32, radius: f32) -> f32 {
    if radius > 0.0 && radius.is_finite() && dx.is_finite() {
        dx / radius
    } else {
        0.0
    }
}
