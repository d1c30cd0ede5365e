//! Demo auto-player
//!
//! Drives the simulator with seeded random gestures. Same seed, same runs.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::input::InputEvent;
use super::state::{Mode, Simulator};
use super::tick::TickInput;

/// Chance a run starts with a key launch instead of a drag
const KEY_LAUNCH_CHANCE: f64 = 0.2;
/// Fire the impulse once rolling slows below this
const IMPULSE_TRIGGER_SPEED: f32 = 2.0;
/// Frames spent dragging before release
const DRAG_FRAMES: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Gesture {
    Idle,
    Dragging { target: Vec2, frame: u32 },
}

/// Seeded input source for demos and soak tests
#[derive(Debug, Clone)]
pub struct AutoPlayer {
    rng: Pcg32,
    gesture: Gesture,
}

impl AutoPlayer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            gesture: Gesture::Idle,
        }
    }

    /// Produce this frame's input for the current simulator state
    pub fn plan(&mut self, sim: &Simulator) -> TickInput {
        let mut input = TickInput::default();
        let origin = sim.params().launch_origin;

        match (sim.mode(), self.gesture) {
            (Mode::Resting, Gesture::Idle) => {
                if self.rng.random_bool(KEY_LAUNCH_CHANCE) {
                    input.push(InputEvent::KeyLaunch);
                } else {
                    // Pull down and back so the release throws up and forward
                    let theta = self
                        .rng
                        .random_range(std::f32::consts::FRAC_PI_2..std::f32::consts::PI);
                    let len = sim.params().max_pull_back * self.rng.random_range(0.5f32..1.3);
                    let target = origin + Vec2::new(theta.cos(), theta.sin()) * len;
                    input.push(InputEvent::BeginAim(origin));
                    self.gesture = Gesture::Dragging { target, frame: 0 };
                }
            }
            (Mode::Aiming, Gesture::Dragging { target, frame }) => {
                let t = (frame + 1) as f32 / DRAG_FRAMES as f32;
                input.push(InputEvent::UpdateAim(origin.lerp(target, t.min(1.0))));
                if frame + 1 >= DRAG_FRAMES {
                    input.push(InputEvent::Release);
                    self.gesture = Gesture::Idle;
                } else {
                    self.gesture = Gesture::Dragging {
                        target,
                        frame: frame + 1,
                    };
                }
            }
            (Mode::Rolling, _) => {
                if sim.impulses_remaining() > 0
                    && sim.body().vel.x.abs() < IMPULSE_TRIGGER_SPEED
                {
                    input.push(InputEvent::Impulse);
                }
            }
            // Begin-aim was ignored; try again next frame
            (Mode::Resting, Gesture::Dragging { .. }) => self.gesture = Gesture::Idle,
            // Someone else started this aim
            (Mode::Aiming, Gesture::Idle) => input.push(InputEvent::Release),
            (Mode::Airborne, _) => {}
        }

        input
    }
}
