//! Launch parameters
//!
//! Fixed for the duration of a run. The upgrade collaborator may swap them
//! between runs through [`super::Simulator::set_params`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ParamError;

/// Physics and launch configuration for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchParams {
    /// Slingshot point; body starts and re-launches here
    pub launch_origin: Vec2,
    /// y of the ground contact plane (y grows downward)
    pub ground_y: f32,

    /// Added to vy every airborne step (scaled by `weight`)
    pub gravity: f32,
    /// Multiplier on gravity; lighter bodies fall slower
    pub weight: f32,
    /// vx multiplier per airborne step
    pub air_friction: f32,
    /// vx multiplier per rolling step
    pub ground_friction: f32,
    /// Fraction of |vy| kept on a bounce
    pub restitution: f32,

    /// Pull-back to velocity scale (numerator)
    pub launch_power: f32,
    /// Pull-back to velocity scale (denominator)
    pub launch_normalization: f32,
    /// Longest allowed pull-back from the origin
    pub max_pull_back: f32,
    /// Keep the aim point from moving ahead of the origin on x
    pub forward_pull_clamp: bool,

    pub body_radius: f32,
    /// Landing |vy| above this bounces, otherwise the body starts rolling
    pub landing_speed: f32,
    /// Rolling |vx| below this ends the run
    pub stop_epsilon: f32,

    /// Mid-flight impulses allowed per run
    pub impulse_allowance: u32,
    pub impulse_boost: f32,
    pub impulse_nudge: f32,

    pub key_launch_speed: f32,
    pub key_launch_lift: f32,
    /// Combined boost from equipped gear, multiplies key launch speed
    pub key_launch_boost: f32,
}

impl Default for LaunchParams {
    fn default() -> Self {
        Self {
            launch_origin: Vec2::new(LAUNCH_ORIGIN_X, LAUNCH_ORIGIN_Y),
            ground_y: GROUND_Y,
            gravity: GRAVITY,
            weight: WEIGHT,
            air_friction: AIR_FRICTION,
            ground_friction: GROUND_FRICTION,
            restitution: RESTITUTION,
            launch_power: LAUNCH_POWER,
            launch_normalization: LAUNCH_NORMALIZATION,
            max_pull_back: MAX_PULL_BACK,
            forward_pull_clamp: false,
            body_radius: BODY_RADIUS,
            landing_speed: LANDING_SPEED,
            stop_epsilon: STOP_EPSILON,
            impulse_allowance: 0,
            impulse_boost: IMPULSE_BOOST,
            impulse_nudge: IMPULSE_NUDGE,
            key_launch_speed: KEY_LAUNCH_SPEED,
            key_launch_lift: KEY_LAUNCH_LIFT,
            key_launch_boost: 1.0,
        }
    }
}

impl LaunchParams {
    /// Effective gravity per step
    #[inline]
    pub fn effective_gravity(&self) -> f32 {
        self.gravity * self.weight
    }

    /// Check every field against its allowed range
    pub fn validate(&self) -> Result<(), ParamError> {
        let finite = [
            ("launch_origin.x", self.launch_origin.x),
            ("launch_origin.y", self.launch_origin.y),
            ("ground_y", self.ground_y),
            ("impulse_boost", self.impulse_boost),
            ("impulse_nudge", self.impulse_nudge),
            ("key_launch_speed", self.key_launch_speed),
            ("key_launch_lift", self.key_launch_lift),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ParamError::NotFinite { field });
            }
        }

        let positive = [
            ("gravity", self.gravity),
            ("weight", self.weight),
            ("launch_power", self.launch_power),
            ("launch_normalization", self.launch_normalization),
            ("max_pull_back", self.max_pull_back),
            ("body_radius", self.body_radius),
            ("landing_speed", self.landing_speed),
            ("stop_epsilon", self.stop_epsilon),
            ("key_launch_boost", self.key_launch_boost),
        ];
        for (field, value) in positive {
            if !value.is_finite() {
                return Err(ParamError::NotFinite { field });
            }
            if value <= 0.0 {
                return Err(ParamError::NotPositive { field, value });
            }
        }

        for (field, value) in [
            ("air_friction", self.air_friction),
            ("ground_friction", self.ground_friction),
        ] {
            if !(value > 0.0 && value < 1.0) {
                return Err(ParamError::FrictionOutOfRange { field, value });
            }
        }

        if !(self.restitution > 0.0 && self.restitution < 1.0) {
            return Err(ParamError::RestitutionOutOfRange {
                value: self.restitution,
            });
        }

        Ok(())
    }
}
