//! Fixed step simulation
//!
//! One call to [`Simulator::step`] advances the body by exactly one step.
//! Velocities are in units per step, so there is no `dt`.

use super::ground::{GroundContact, resolve_ground_contact};
use super::input::InputEvent;
use super::state::{Mode, SimEvent, Simulator};
use crate::roll_angle;

/// Input gathered during one frame, applied in arrival order before stepping
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub events: Vec<InputEvent>,
}

impl TickInput {
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Drain one frame of input into the simulator, then advance one step
pub fn tick(sim: &mut Simulator, input: &TickInput) {
    for event in &input.events {
        sim.apply_input(*event);
    }
    sim.step();
}

impl Simulator {
    /// Advance the body by one step
    pub fn step(&mut self) {
        self.time_steps += 1;

        match self.body.mode {
            Mode::Airborne => self.step_airborne(),
            Mode::Rolling => self.step_rolling(),
            // Aiming is driven by update_aim; Resting doesn't move
            Mode::Aiming | Mode::Resting => {}
        }
    }

    fn step_airborne(&mut self) {
        let p = &self.params;
        self.body.vel.y += p.effective_gravity();
        self.body.vel.x *= p.air_friction;
        self.body.pos += self.body.vel;
        self.body.angle += roll_angle(self.body.vel.x, p.body_radius);

        let contact = resolve_ground_contact(
            &mut self.body.pos,
            &mut self.body.vel,
            p.ground_y,
            p.landing_speed,
            p.restitution,
            p.effective_gravity(),
        );
        match contact {
            GroundContact::None => {}
            GroundContact::Bounce {
                vy_before,
                vy_after,
            } => {
                log::debug!("Bounce: vy {:.2} -> {:.2}", vy_before, vy_after);
                self.push_event(SimEvent::Bounced {
                    vy_before,
                    vy_after,
                });
            }
            GroundContact::Land => {
                self.body.mode = Mode::Rolling;
                log::debug!("Landed at x={:.1}", self.body.pos.x);
                self.push_event(SimEvent::Landed {
                    x: self.body.pos.x,
                });
            }
        }

        self.update_distance();
    }

    fn step_rolling(&mut self) {
        let p = &self.params;
        self.body.vel.x *= p.ground_friction;
        self.body.pos.x += self.body.vel.x;
        self.body.angle += roll_angle(self.body.vel.x, p.body_radius);
        let stop_epsilon = p.stop_epsilon;

        self.update_distance();

        let vx = self.body.vel.x;
        if !vx.is_finite() || vx.abs() < stop_epsilon {
            self.body.vel.x = 0.0;
            self.body.mode = Mode::Resting;
            self.complete_run();
        }
    }

    /// Credit the run's distance. Called exactly once per Rolling -> Resting.
    fn complete_run(&mut self) {
        let earned = self.stats.distance;
        self.stats.earned = earned;
        self.total_currency += earned;
        self.runs_completed += 1;

        log::info!(
            "Run {} complete: distance={:.1}, total={:.1}",
            self.runs_completed,
            earned,
            self.total_currency
        );
        self.push_event(SimEvent::RunComplete {
            distance: self.stats.distance,
            earned,
            total_currency: self.total_currency,
        });
    }
}
