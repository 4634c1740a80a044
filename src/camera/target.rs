//! The tracked entity, seen from the camera.
//!
//! The controller reads a [`TargetPose`] once at the start of every tick.
//! Its only write-back is [`Target::set_yaw`], and only when options opt in.

use glam::{Quat, Vec3};

use crate::util::angle::yaw_degrees;

/// Identity of a tracked entity. Also tags the entity's collision volumes so
/// the geometry oracle can skip them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(pub u32);

/// Position and orientation of the target at the start of a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetPose {
    /// Target origin in world space.
    pub position: Vec3,
    /// Target orientation; local +Z is the target's forward.
    pub rotation: Quat,
}

impl TargetPose {
    /// Pose at `position` facing `yaw_deg` around +Y.
    #[must_use]
    pub fn new(position: Vec3, yaw_deg: f32) -> Self {
        Self {
            position,
            rotation: Quat::from_rotation_y(yaw_deg.to_radians()),
        }
    }

    /// Heading in degrees.
    #[must_use]
    pub fn yaw_degrees(&self) -> f32 {
        yaw_degrees(self.rotation)
    }

    /// Point at `offset` in the target's heading frame: x is lateral, y is
    /// world-vertical, z is forward.
    ///
    /// Only the heading is used, so a pitched or rolled target does not tip
    /// the mount point.
    #[must_use]
    pub fn mount_point(&self, offset: Vec3) -> Vec3 {
        let heading = Quat::from_rotation_y(self.yaw_degrees().to_radians());
        self.position
            + heading * Vec3::new(offset.x, 0.0, offset.z)
            + Vec3::Y * offset.y
    }
}

/// Something a camera can follow.
pub trait Target {
    /// Stable identity, used to exclude the target's own colliders.
    fn id(&self) -> TargetId;

    /// Current pose, or `None` if the target is gone or not yet spawned.
    fn pose(&self) -> Option<TargetPose>;

    /// Turn the target to face `yaw_deg`.
    ///
    /// Only called when the controller is configured to drive target
    /// rotation.
    fn set_yaw(&mut self, yaw_deg: f32);
}

/// Plain pose holder implementing [`Target`].
///
/// Locomotion code writes `pose` directly each frame; the camera may turn it
/// through [`Target::set_yaw`].
#[derive(Debug, Clone, PartialEq)]
pub struct Avatar {
    /// Identity of this avatar.
    pub id: TargetId,
    /// Current pose, `None` while despawned.
    pub pose: Option<TargetPose>,
}

impl Avatar {
    /// Spawned avatar at `position` facing `yaw_deg`.
    #[must_use]
    pub fn new(id: TargetId, position: Vec3, yaw_deg: f32) -> Self {
        Self {
            id,
            pose: Some(TargetPose::new(position, yaw_deg)),
        }
    }
}

impl Target for Avatar {
    fn id(&self) -> TargetId {
        self.id
    }

    fn pose(&self) -> Option<TargetPose> {
        self.pose
    }

    fn set_yaw(&mut self, yaw_deg: f32) {
        if let Some(pose) = &mut self.pose {
            pose.rotation = Quat::from_rotation_y(yaw_deg.to_radians());
        }
    }
}
