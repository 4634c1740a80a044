//! Camera modes and the per-mode behavior table.
//!
//! Every tick starts with one [`CameraMode::policy`] lookup; the rest of the
//! pipeline reads the returned [`ModePolicy`] instead of re-checking the
//! mode.

use std::fmt;

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Top-level camera family, as stored in options and shown in an inspector.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ModeKind {
    /// Camera sits inside the target and sees through its eyes.
    FirstPerson,
    /// Camera follows the target from outside; see [`ThirdPersonMode`].
    #[default]
    ThirdPerson,
    /// Free orbit around the target without obstruction handling.
    FreeLook,
}

/// Third-person sub-mode. Only consulted when the kind is
/// [`ModeKind::ThirdPerson`].
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ThirdPersonMode {
    /// Rigidly mounted behind the target, no player control.
    Fixed,
    /// Orbits from input, keeps a fixed distance, faces the target.
    Tracking,
    /// Orbits and zooms from input, faces the target.
    #[default]
    Interactive,
}

/// Fully resolved camera mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraMode {
    /// First-person view; orientation is copied from the target.
    FirstPerson,
    /// Third-person follow with a sub-mode.
    ThirdPerson(ThirdPersonMode),
    /// Free orbit, no obstruction checks, no forced look-at.
    FreeLook,
}

/// Which behaviors run for a mode on a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ModePolicy {
    /// Apply rotation-delta input to the orbit angles.
    pub rotate: bool,
    /// Apply zoom input to the desired distance.
    pub zoom: bool,
    /// Query the geometry oracle between pivot and camera.
    pub check_obstruction: bool,
    /// Re-orient toward the pivot after positioning.
    pub face_target: bool,
    /// Take the target's orientation verbatim (first person).
    pub copy_target_rotation: bool,
    /// Position comes from yaw, pitch and distance around a pivot.
    pub orbit: bool,
    /// The camera is allowed to write the target's yaw when configured to.
    pub may_drive_target: bool,
}

impl CameraMode {
    /// Rigid follow mount behind the target.
    pub const FIXED_FOLLOW: Self = Self::ThirdPerson(ThirdPersonMode::Fixed);
    /// Orbit without zoom, facing the target.
    pub const TRACKING_FOLLOW: Self =
        Self::ThirdPerson(ThirdPersonMode::Tracking);
    /// Orbit with zoom, facing the target.
    pub const INTERACTIVE_ORBIT: Self =
        Self::ThirdPerson(ThirdPersonMode::Interactive);

    /// Every mode, in inspector order.
    pub const ALL: [Self; 5] = [
        Self::FirstPerson,
        Self::FIXED_FOLLOW,
        Self::TRACKING_FOLLOW,
        Self::INTERACTIVE_ORBIT,
        Self::FreeLook,
    ];

    /// Combine the two option fields into a mode.
    #[must_use]
    pub fn from_parts(kind: ModeKind, third_person: ThirdPersonMode) -> Self {
        match kind {
            ModeKind::FirstPerson => Self::FirstPerson,
            ModeKind::ThirdPerson => Self::ThirdPerson(third_person),
            ModeKind::FreeLook => Self::FreeLook,
        }
    }

    /// The top-level family of this mode.
    #[must_use]
    pub fn kind(self) -> ModeKind {
        match self {
            Self::FirstPerson => ModeKind::FirstPerson,
            Self::ThirdPerson(_) => ModeKind::ThirdPerson,
            Self::FreeLook => ModeKind::FreeLook,
        }
    }

    /// The third-person sub-mode, if any.
    #[must_use]
    pub fn third_person(self) -> Option<ThirdPersonMode> {
        match self {
            Self::ThirdPerson(sub) => Some(sub),
            _ => None,
        }
    }

    /// Behavior table for this mode.
    #[must_use]
    pub const fn policy(self) -> ModePolicy {
        match self {
            Self::FirstPerson => ModePolicy {
                rotate: false,
                zoom: false,
                check_obstruction: false,
                face_target: false,
                copy_target_rotation: true,
                orbit: false,
                may_drive_target: false,
            },
            Self::ThirdPerson(ThirdPersonMode::Fixed) => ModePolicy {
                rotate: false,
                zoom: false,
                check_obstruction: false,
                face_target: false,
                copy_target_rotation: false,
                orbit: false,
                may_drive_target: false,
            },
            Self::ThirdPerson(ThirdPersonMode::Tracking) => ModePolicy {
                rotate: true,
                zoom: false,
                check_obstruction: true,
                face_target: true,
                copy_target_rotation: false,
                orbit: true,
                may_drive_target: true,
            },
            Self::ThirdPerson(ThirdPersonMode::Interactive) => ModePolicy {
                rotate: true,
                zoom: true,
                check_obstruction: true,
                face_target: true,
                copy_target_rotation: false,
                orbit: true,
                may_drive_target: true,
            },
            Self::FreeLook => ModePolicy {
                rotate: true,
                zoom: true,
                check_obstruction: false,
                face_target: false,
                copy_target_rotation: false,
                orbit: true,
                may_drive_target: false,
            },
        }
    }

    /// Canonical starting offset (lateral, vertical, forward) for this mode.
    ///
    /// Applied on every mode transition so a new mode never inherits the
    /// previous mode's offset.
    #[must_use]
    pub const fn default_offset(self) -> Vec3 {
        match self {
            Self::FirstPerson | Self::FreeLook => Vec3::new(0.0, 1.0, 0.0),
            Self::ThirdPerson(ThirdPersonMode::Fixed) => {
                Vec3::new(-12.0, 15.0, -20.0)
            }
            Self::ThirdPerson(
                ThirdPersonMode::Tracking | ThirdPersonMode::Interactive,
            ) => Vec3::new(0.0, 3.0, -7.0),
        }
    }

    /// Short help text for inspectors.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::FirstPerson => {
                "Camera sits at the target's eye point and looks wherever the \
                 target looks."
            }
            Self::ThirdPerson(ThirdPersonMode::Fixed) => {
                "Camera is mounted behind the target and cannot be steered. \
                 Simple and predictable, but it can end up behind walls or at \
                 awkward angles when the target turns."
            }
            Self::ThirdPerson(ThirdPersonMode::Tracking) => {
                "Camera follows at a fixed distance and can be swung around \
                 the target. Pulls in when geometry blocks the view."
            }
            Self::ThirdPerson(ThirdPersonMode::Interactive) => {
                "Camera orbits and zooms under player control while always \
                 facing the target. Pulls in when geometry blocks the view."
            }
            Self::FreeLook => {
                "Camera orbits and zooms freely around the target with no \
                 obstruction handling and no forced look-at."
            }
        }
    }
}

impl Default for CameraMode {
    fn default() -> Self {
        Self::from_parts(ModeKind::default(), ThirdPersonMode::default())
    }
}

impl fmt::Display for CameraMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstPerson => write!(f, "first_person"),
            Self::ThirdPerson(ThirdPersonMode::Fixed) => {
                write!(f, "third_person/fixed")
            }
            Self::ThirdPerson(ThirdPersonMode::Tracking) => {
                write!(f, "third_person/tracking")
            }
            Self::ThirdPerson(ThirdPersonMode::Interactive) => {
                write!(f, "third_person/interactive")
            }
            Self::FreeLook => write!(f, "free_look"),
        }
    }
}
