//! Simulator state and core types
//!
//! Everything the presentation layer reads each frame lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::params::LaunchParams;
use crate::error::ParamError;

/// Undrained events kept before the oldest are dropped
pub const MAX_PENDING_EVENTS: usize = 256;

/// Current phase of the body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Sitting still; waiting for the next aim or key launch
    #[default]
    Resting,
    /// Being dragged back on the slingshot
    Aiming,
    /// Ballistic flight, may bounce
    Airborne,
    /// On the ground, decelerating
    Rolling,
}

/// The simulated tire/penguin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    /// Units per step
    pub vel: Vec2,
    /// Cumulative spin (visual only)
    pub angle: f32,
    pub mode: Mode,
}

impl Body {
    pub fn at_rest(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            angle: 0.0,
            mode: Mode::Resting,
        }
    }

    /// True while the body is moving on its own
    pub fn in_motion(&self) -> bool {
        matches!(self.mode, Mode::Airborne | Mode::Rolling)
    }
}

/// Per-run statistics, reset when the next run starts
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RunStats {
    /// Furthest x reached past the launch origin this run
    pub distance: f32,
    /// Currency earned this run (set once the run completes)
    pub earned: f32,
    /// Mid-flight impulses spent this run
    pub impulses_used: u32,
}

/// Notifications for the presentation layer, drained once per frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    AimStarted { pointer: Vec2 },
    Launched { velocity: Vec2 },
    Bounced { vy_before: f32, vy_after: f32 },
    /// Touched down and began rolling
    Landed { x: f32 },
    ImpulseUsed { remaining: u32 },
    RunComplete {
        distance: f32,
        earned: f32,
        total_currency: f32,
    },
}

/// The launch-and-roll simulator: one body, its parameters and run bookkeeping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Simulator {
    pub(crate) params: LaunchParams,
    pub(crate) body: Body,
    pub(crate) stats: RunStats,
    /// Sum of all run credits
    pub(crate) total_currency: f32,
    pub(crate) runs_completed: u32,
    /// Simulation step counter
    pub(crate) time_steps: u64,
    /// Last pointer seen while aiming
    pub(crate) drag_point: Option<Vec2>,
    #[serde(skip)]
    pub(crate) events: Vec<SimEvent>,
}

impl Simulator {
    /// Create a simulator with the body resting at the launch origin
    pub fn new(params: LaunchParams) -> Self {
        Self {
            body: Body::at_rest(params.launch_origin),
            params,
            stats: RunStats::default(),
            total_currency: 0.0,
            runs_completed: 0,
            time_steps: 0,
            drag_point: None,
            events: Vec::new(),
        }
    }

    /// Like [`Simulator::new`], but rejects parameters that fail validation
    pub fn try_new(params: LaunchParams) -> Result<Self, ParamError> {
        params.validate()?;
        Ok(Self::new(params))
    }

    pub fn params(&self) -> &LaunchParams {
        &self.params
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn mode(&self) -> Mode {
        self.body.mode
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    pub fn total_currency(&self) -> f32 {
        self.total_currency
    }

    pub fn runs_completed(&self) -> u32 {
        self.runs_completed
    }

    pub fn time_steps(&self) -> u64 {
        self.time_steps
    }

    pub fn drag_point(&self) -> Option<Vec2> {
        self.drag_point
    }

    /// Impulses still available this run
    pub fn impulses_remaining(&self) -> u32 {
        self.params
            .impulse_allowance
            .saturating_sub(self.stats.impulses_used)
    }

    /// Replace the launch parameters (upgrades). Only applied while Resting
    /// and only if they pass [`LaunchParams::validate`].
    ///
    /// Returns whether the parameters were applied.
    pub fn set_params(&mut self, params: LaunchParams) -> bool {
        if self.body.mode != Mode::Resting {
            log::debug!("set_params ignored in {:?}", self.body.mode);
            return false;
        }
        if let Err(e) = params.validate() {
            log::warn!("set_params rejected: {}", e);
            return false;
        }
        self.params = params;
        true
    }

    /// Take all events queued since the last drain
    ///
    /// At most [`MAX_PENDING_EVENTS`] are kept between drains. Past that the
    /// oldest are dropped, so a host that never drains holds bounded memory.
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    /// Events queued since the last drain
    pub fn pending_events(&self) -> &[SimEvent] {
        &self.events
    }

    pub(crate) fn push_event(&mut self, event: SimEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            self.events.remove(0);
        }
        self.events.push(event);
    }

    /// Start a new run: clear statistics and put the body back on the origin
    pub(crate) fn start_run(&mut self) {
        self.stats = RunStats::default();
        self.body.pos = self.params.launch_origin;
        self.body.vel = Vec2::ZERO;
    }

    /// Recompute distance as the furthest x past the origin
    pub(crate) fn update_distance(&mut self) {
        let dx = self.body.pos.x - self.params.launch_origin.x;
        if dx.is_finite() && dx > self.stats.distance {
            self.stats.distance = dx;
        }
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(LaunchParams::default())
    }
}
