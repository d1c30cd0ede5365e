//! Ground contact detection and response
//!
//! The ground is a flat plane at `ground_y`. A body moving downward that
//! reaches the plane is snapped onto it and then either bounces (losing
//! vertical speed) or settles into a roll.

use glam::Vec2;

/// Outcome of a ground contact check
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GroundContact {
    /// Still above the plane, or moving up through it
    None,
    /// Hit hard enough to bounce
    Bounce { vy_before: f32, vy_after: f32 },
    /// Too slow to bounce; vertical motion stops
    Land,
}

/// Resolve contact between the body and the ground plane
///
/// Mutates `pos`/`vel` in place and reports what happened. A rebound no
/// faster than `settle_speed` (one step of gravity) could not lift the body
/// off the plane, so it lands instead.
pub fn resolve_ground_contact(
    pos: &mut Vec2,
    vel: &mut Vec2,
    ground_y: f32,
    landing_speed: f32,
    restitution: f32,
    settle_speed: f32,
) -> GroundContact {
    if pos.y < ground_y || vel.y < 0.0 {
        return GroundContact::None;
    }

    pos.y = ground_y;
    let vy_before = vel.y;
    let vy_after = -vy_before * restitution;
    if vy_before.abs() > landing_speed && vy_after.abs() > settle_speed {
        vel.y = vy_after;
        GroundContact::Bounce {
            vy_before,
            vy_after,
        }
    } else {
        vel.y = 0.0;
        GroundContact::Land
    }
}
