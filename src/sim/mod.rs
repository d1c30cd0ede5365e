//! Deterministic simulation module
//!
//! All launch/flight/roll logic lives here. This module must be pure and deterministic:
//! - One fixed step per call, no wall clock
//! - Seeded RNG only (auto-player)
//! - Input applied in arrival order, one owner
//! - No rendering or platform dependencies

pub mod aim;
pub mod autoplay;
pub mod clock;
pub mod ground;
pub mod input;
pub mod params;
pub mod state;
pub mod tick;

pub use aim::{aim_position, release_velocity};
pub use autoplay::AutoPlayer;
pub use clock::FixedStep;
pub use ground::{GroundContact, resolve_ground_contact};
pub use input::InputEvent;
pub use params::LaunchParams;
pub use state::{Body, MAX_PENDING_EVENTS, Mode, RunStats, SimEvent, Simulator};
pub use tick::{TickInput, tick};
