use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::mode::{CameraMode, ModeKind, ThirdPersonMode};

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[schemars(title = "Mode", inline)]
#[serde(default)]
/// Camera mode selection, split the way an inspector edits it.
pub struct ModeOptions {
    /// Camera family.
    #[schemars(title = "Camera Type")]
    pub kind: ModeKind,
    /// Third-person sub-mode; ignored for other kinds.
    #[schemars(title = "Camera Mode")]
    pub third_person: ThirdPersonMode,
    /// Camera offset in the target's heading frame (x lateral, y up,
    /// z forward). Unset means the mode's own default.
    #[schemars(title = "Camera Offset")]
    pub offset: Option<[f32; 3]>,
}

impl ModeOptions {
    /// Resolved camera mode.
    #[must_use]
    pub fn mode(&self) -> CameraMode {
        CameraMode::from_parts(self.kind, self.third_person)
    }

    /// Offset override, if one is set.
    #[must_use]
    pub fn offset(&self) -> Option<Vec3> {
        self.offset.map(Vec3::from)
    }

    /// Offset in force for the selected mode.
    #[must_use]
    pub fn effective_offset(&self) -> Vec3 {
        self.offset().unwrap_or_else(|| self.mode().default_offset())
    }

    /// Options selecting `mode`. The sub-mode keeps its current value when
    /// `mode` is not third-person; any offset override is dropped.
    pub fn set_mode(&mut self, mode: CameraMode) {
        self.offset = None;
        self.kind = mode.kind();
        if let Some(sub) = mode.third_person() {
            self.third_person = sub;
        }
    }
}
