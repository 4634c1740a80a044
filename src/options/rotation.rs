use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Rotation", inline)]
#[serde(default)]
/// Orbit rotation parameters.
pub struct RotationOptions {
    /// Degrees of rotation per unit of rotation input.
    #[schemars(title = "Rotate Speed", range(min = 0.1, max = 20.0), extend("step" = 0.1))]
    pub rotate_speed: f32,
    /// Lowest allowed pitch in degrees (negative looks up from below).
    #[schemars(title = "Vertical Min", range(min = -89.0, max = 89.0), extend("step" = 1.0))]
    pub vertical_min: f32,
    /// Highest allowed pitch in degrees.
    #[schemars(title = "Vertical Max", range(min = -89.0, max = 89.0), extend("step" = 1.0))]
    pub vertical_max: f32,
    /// Only rotate while the rotate-lock button is held.
    #[schemars(title = "Rotate With Button")]
    pub rotate_requires_button: bool,
    /// Swing back behind the target while it moves and the player is not
    /// steering the camera.
    #[schemars(title = "Return Behind Target")]
    pub return_to_behind: bool,
    /// Return-to-behind rate, fraction per second.
    #[schemars(title = "Return Damping", range(min = 0.0, max = 20.0), extend("step" = 0.1))]
    pub return_damping: f32,
}

impl Default for RotationOptions {
    fn default() -> Self {
        Self {
            rotate_speed: 4.0,
            vertical_min: -30.0,
            vertical_max: 80.0,
            rotate_requires_button: false,
            return_to_behind: false,
            return_damping: 2.0,
        }
    }
}

impl RotationOptions {
    /// Clamp a pitch into `[vertical_min, vertical_max]`.
    #[inline]
    #[must_use]
    pub fn clamp_pitch(&self, pitch_deg: f32) -> f32 {
        pitch_deg.max(self.vertical_min).min(self.vertical_max)
    }
}
