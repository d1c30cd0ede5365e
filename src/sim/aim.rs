//! Slingshot geometry
//!
//! Pull-back is measured from the launch origin to the pointer. The body is
//! held on a leash of length `max_pull_back`; on release it flies opposite
//! to the pull-back, scaled by `launch_power / normalization`.

use glam::Vec2;

use crate::clamp_to_radius;

/// Where the body sits for a given pointer while aiming
///
/// With `forward_clamp`, the aim point never passes the origin on x, so a
/// drag cannot push the body backwards on release.
pub fn aim_position(origin: Vec2, pointer: Vec2, max_pull_back: f32, forward_clamp: bool) -> Vec2 {
    let pull = clamp_to_radius(pointer - origin, max_pull_back);
    let mut aim = origin + pull;
    if forward_clamp && aim.x > origin.x {
        aim.x = origin.x;
    }
    aim
}

/// Launch velocity for a body released at `aim`
pub fn release_velocity(origin: Vec2, aim: Vec2, launch_power: f32, normalization: f32) -> Vec2 {
    if normalization == 0.0 {
        return Vec2::ZERO;
    }
    (origin - aim) * launch_power / normalization
}
