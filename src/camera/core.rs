use glam::{EulerRot, Mat3, Quat, Vec3};

/// World-space camera placement emitted once per tick.
///
/// Convention: right-handed, +Y up, the rotation's local +Z is where the
/// camera looks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransform {
    /// Camera position in world space.
    pub position: Vec3,
    /// Camera orientation.
    pub rotation: Quat,
}

impl Default for CameraTransform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl CameraTransform {
    /// Direction the camera looks along.
    #[inline]
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Camera-space up vector in world space.
    #[inline]
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }
}

/// Rotation for an orbit at `pitch_deg`, `yaw_deg` with no roll.
///
/// Positive pitch tilts the forward vector downward, so a camera placed at
/// `pivot - forward * distance` sits above the pivot.
#[inline]
#[must_use]
pub fn orbit_rotation(yaw_deg: f32, pitch_deg: f32) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        yaw_deg.to_radians(),
        pitch_deg.to_radians(),
        0.0,
    )
}

/// Rotation whose +Z points along `direction`, keeping +Y as close to world
/// up as possible.
///
/// Returns `None` when `direction` is zero or parallel to world up.
#[must_use]
pub fn look_rotation(direction: Vec3) -> Option<Quat> {
    let forward = direction.try_normalize()?;
    let right = Vec3::Y.cross(forward).try_normalize()?;
    let up = forward.cross(right);
    Some(Quat::from_mat3(&Mat3::from_cols(right, up, forward)))
}
