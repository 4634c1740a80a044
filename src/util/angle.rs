//! Degree-based angle helpers.
//!
//! Yaw is accumulated without bound, so anything that compares or blends two
//! yaw values has to go the short way around the circle.

use glam::{EulerRot, Quat};

/// Signed shortest difference `target - current` in degrees, in
/// `[-180, 180)`.
#[inline]
#[must_use]
pub fn delta_angle(current: f32, target: f32) -> f32 {
    let d = (target - current).rem_euclid(360.0);
    if d >= 180.0 {
        d - 360.0
    } else {
        d
    }
}

/// Interpolate from `from` toward `to` along the shortest arc.
///
/// `t` is clamped to `[0, 1]`. The result stays continuous with `from`
/// (it is not wrapped), so accumulated yaw never jumps by 360.
#[inline]
#[must_use]
pub fn lerp_angle(from: f32, to: f32, t: f32) -> f32 {
    from + delta_angle(from, to) * t.clamp(0.0, 1.0)
}

/// Heading of a rotation around +Y, in degrees.
#[must_use]
pub fn yaw_degrees(rotation: Quat) -> f32 {
    let (yaw, _, _) = rotation.to_euler(EulerRot::YXZ);
    yaw.to_degrees()
}
