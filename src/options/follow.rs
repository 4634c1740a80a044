use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Follow", inline)]
#[serde(default)]
/// Position smoothing and the camera-to-target coupling.
pub struct FollowOptions {
    /// Fraction of the remaining distance covered per tick.
    #[schemars(title = "Move Lerp", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub position_lerp: f32,
    /// Turn the target to the camera yaw every tick.
    #[schemars(title = "Camera Drives Target")]
    pub drive_target_rotation: bool,
    /// Turn the target to the camera yaw while the rotate-target button is
    /// held.
    #[schemars(title = "Rotate Target With Button")]
    pub rotate_target_with_button: bool,
}

impl Default for FollowOptions {
    fn default() -> Self {
        Self {
            position_lerp: 0.1,
            drive_target_rotation: false,
            rotate_target_with_button: false,
        }
    }
}
