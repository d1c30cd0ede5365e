//! Input-driven transitions
//!
//! Every operation here is a no-op when called in the wrong mode. The host
//! never has to check the mode first, and a stray event can't corrupt state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aim::{aim_position, release_velocity};
use super::state::{Mode, SimEvent, Simulator};

/// One input event from the pointer or keyboard
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    BeginAim(Vec2),
    UpdateAim(Vec2),
    Release,
    KeyLaunch,
    Impulse,
}

impl Simulator {
    /// Apply a single input event
    pub fn apply_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::BeginAim(p) => self.begin_aim(p),
            InputEvent::UpdateAim(p) => self.update_aim(p),
            InputEvent::Release => self.release(),
            InputEvent::KeyLaunch => self.key_launch(),
            InputEvent::Impulse => self.apply_mid_flight_impulse(),
        }
    }

    /// Grab the body. Starts a new run.
    pub fn begin_aim(&mut self, pointer: Vec2) {
        if self.body.mode != Mode::Resting || !pointer.is_finite() {
            return;
        }
        self.start_run();
        self.body.mode = Mode::Aiming;
        self.drag_point = Some(pointer);
        self.push_event(SimEvent::AimStarted { pointer });
    }

    /// Drag the body, held to `max_pull_back` from the origin
    pub fn update_aim(&mut self, pointer: Vec2) {
        if self.body.mode != Mode::Aiming || !pointer.is_finite() {
            return;
        }
        self.drag_point = Some(pointer);
        self.body.pos = aim_position(
            self.params.launch_origin,
            pointer,
            self.params.max_pull_back,
            self.params.forward_pull_clamp,
        );
    }

    /// Let go: fly opposite to the pull-back, starting from the origin
    pub fn release(&mut self) {
        if self.body.mode != Mode::Aiming {
            return;
        }
        // Velocity comes from the clamped aim point, before snapping back
        let velocity = release_velocity(
            self.params.launch_origin,
            self.body.pos,
            self.params.launch_power,
            self.params.launch_normalization,
        );
        self.drag_point = None;
        self.fire(velocity);
    }

    /// Launch straight from rest without a drag gesture
    pub fn key_launch(&mut self) {
        if self.body.mode != Mode::Resting {
            return;
        }
        self.start_run();
        let velocity = Vec2::new(
            self.params.key_launch_speed * self.params.key_launch_boost,
            -self.params.key_launch_lift,
        );
        self.fire(velocity);
    }

    /// One-shot hop while rolling, limited per run
    pub fn apply_mid_flight_impulse(&mut self) {
        if self.body.mode != Mode::Rolling || self.impulses_remaining() == 0 {
            return;
        }
        self.body.vel.y = -self.params.impulse_boost;
        self.body.vel.x += self.params.impulse_nudge;
        self.body.mode = Mode::Airborne;
        self.stats.impulses_used += 1;

        let remaining = self.impulses_remaining();
        log::debug!("Impulse used ({} left)", remaining);
        self.push_event(SimEvent::ImpulseUsed { remaining });
    }

    fn fire(&mut self, velocity: Vec2) {
        let velocity = if velocity.is_finite() {
            velocity
        } else {
            Vec2::ZERO
        };
        self.body.pos = self.params.launch_origin;
        self.body.vel = velocity;
        self.body.mode = Mode::Airborne;
        log::info!("Launched at ({:.2}, {:.2})", velocity.x, velocity.y);
        self.push_event(SimEvent::Launched { velocity });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::LaunchParams;

    fn sim_with_leash(max_pull_back: f32) -> Simulator {
        Simulator::new(LaunchParams {
            max_pull_back,
            ..Default::default()
        })
    }

    #[test]
    fn test_begin_aim_only_from_resting() {
        let mut sim = Simulator::default();
        sim.begin_aim(Vec2::new(480.0, 460.0));
        assert_eq!(sim.mode(), Mode::Aiming);
        assert_eq!(sim.drag_point(), Some(Vec2::new(480.0, 460.0)));

        sim.body.mode = Mode::Rolling;
        let before = sim.clone();
        sim.begin_aim(Vec2::new(0.0, 0.0));
        assert_eq!(sim, before);
    }

    #[test]
    fn test_release_reference_velocity_and_snap_back() {
        let mut sim = sim_with_leash(100.0);
        let origin = sim.params().launch_origin;
        assert_eq!(origin, Vec2::new(500.0, 450.0));

        sim.begin_aim(origin);
        sim.update_aim(Vec2::new(430.0, 480.0));
        assert_eq!(sim.body().pos, Vec2::new(430.0, 480.0));

        sim.release();
        assert_eq!(sim.mode(), Mode::Airborne);
        assert_eq!(sim.body().pos, origin);
        assert!((sim.body().vel.x - 14.0).abs() < 1e-5);
        assert!((sim.body().vel.y - (-6.0)).abs() < 1e-5);
    }

    #[test]
    fn test_update_aim_clamps_to_leash() {
        let mut sim = sim_with_leash(70.0);
        let origin = sim.params().launch_origin;
        let theta: f32 = 2.8;
        let pointer = origin + Vec2::new(theta.cos(), theta.sin()) * 120.0;

        sim.begin_aim(origin);
        sim.update_aim(pointer);
        let pull = sim.body().pos - origin;
        assert!((pull.length() - 70.0).abs() < 1e-3);
        assert!((pull.normalize() - (pointer - origin).normalize()).length() < 1e-5);
    }

    #[test]
    fn test_update_aim_ignores_nan_pointer() {
        let mut sim = Simulator::default();
        sim.begin_aim(Vec2::new(480.0, 450.0));
        sim.update_aim(Vec2::new(470.0, 460.0));
        let before = sim.body().clone();
        sim.update_aim(Vec2::new(f32::NAN, 1.0));
        assert_eq!(sim.body(), &before);
    }

    #[test]
    fn test_release_while_resting_is_noop() {
        let mut sim = Simulator::default();
        let before = sim.clone();
        sim.release();
        assert_eq!(sim, before);
    }

    #[test]
    fn test_update_aim_while_resting_is_noop() {
        let mut sim = Simulator::default();
        let before = sim.clone();
        sim.update_aim(Vec2::new(400.0, 400.0));
        assert_eq!(sim, before);
    }

    #[test]
    fn test_key_launch_uses_boost() {
        let mut sim = Simulator::new(LaunchParams {
            key_launch_speed: 10.0,
            key_launch_lift: 4.0,
            key_launch_boost: 1.5,
            ..Default::default()
        });
        sim.key_launch();
        assert_eq!(sim.mode(), Mode::Airborne);
        assert_eq!(sim.body().vel, Vec2::new(15.0, -4.0));

        // Second press mid-flight is ignored
        let before = sim.clone();
        sim.key_launch();
        assert_eq!(sim, before);
    }

    #[test]
    fn test_impulse_requires_rolling_and_allowance() {
        let mut sim = Simulator::new(LaunchParams {
            impulse_allowance: 1,
            ..Default::default()
        });

        // Resting: ignored
        sim.apply_mid_flight_impulse();
        assert_eq!(sim.mode(), Mode::Resting);

        sim.body.mode = Mode::Rolling;
        sim.body.vel = Vec2::new(2.0, 0.0);
        sim.apply_mid_flight_impulse();
        assert_eq!(sim.mode(), Mode::Airborne);
        let expected = Vec2::new(
            2.0 + sim.params().impulse_nudge,
            -sim.params().impulse_boost,
        );
        assert_eq!(sim.body().vel, expected);
        assert_eq!(sim.stats().impulses_used, 1);

        // Allowance exhausted
        sim.body.mode = Mode::Rolling;
        let before = sim.clone();
        sim.apply_mid_flight_impulse();
        assert_eq!(sim, before);
    }

    #[test]
    fn test_new_aim_resets_impulse_usage() {
        let mut sim = Simulator::new(LaunchParams {
            impulse_allowance: 1,
            ..Default::default()
        });
        sim.stats.impulses_used = 1;
        sim.begin_aim(Vec2::new(490.0, 450.0));
        assert_eq!(sim.stats().impulses_used, 0);
        assert_eq!(sim.impulses_remaining(), 1);
    }
}
