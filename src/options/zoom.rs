use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How zoom input changes the desired distance.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ZoomLaw {
    /// `desired -= zoom * zoom_speed`.
    #[default]
    Linear,
    /// `desired -= zoom * dt * zoom_rate * |desired| * speed_factor`; zooms
    /// faster the further out the camera already is.
    Proportional,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Zoom", inline)]
#[serde(default)]
/// Zoom and distance parameters.
pub struct ZoomOptions {
    /// Update law for zoom input.
    #[schemars(title = "Zoom Law")]
    pub law: ZoomLaw,
    /// Meters per unit of zoom input (linear law).
    #[schemars(title = "Zoom Speed", range(min = 0.1, max = 20.0), extend("step" = 0.1))]
    pub zoom_speed: f32,
    /// Base zoom rate (proportional law).
    #[schemars(title = "Zoom Rate", range(min = 1.0, max = 100.0), extend("step" = 1.0))]
    pub zoom_rate: f32,
    /// Distance smoothing rate, fraction per second.
    #[schemars(title = "Zoom Dampening", range(min = 0.5, max = 30.0), extend("step" = 0.5))]
    pub zoom_dampening: f32,
    /// Scale applied on top of the zoom rate (proportional law).
    #[schemars(title = "Speed Factor", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub speed_factor: f32,
    /// Closest the camera may get to the pivot.
    #[schemars(title = "Min Distance", range(min = 0.0, max = 20.0), extend("step" = 0.1))]
    pub min_distance: f32,
    /// Furthest the camera may get from the pivot.
    #[schemars(title = "Max Distance", range(min = 0.5, max = 100.0), extend("step" = 0.5))]
    pub max_distance: f32,
}

impl Default for ZoomOptions {
    fn default() -> Self {
        Self {
            law: ZoomLaw::Linear,
            zoom_speed: 5.0,
            zoom_rate: 40.0,
            zoom_dampening: 5.0,
            speed_factor: 0.1,
            min_distance: 2.0,
            max_distance: 8.0,
        }
    }
}

impl ZoomOptions {
    /// Clamp a distance into `[min_distance, max_distance]`.
    ///
    /// Never panics; validated options guarantee `min <= max`.
    #[inline]
    #[must_use]
    pub fn clamp(&self, distance: f32) -> f32 {
        distance.max(self.min_distance).min(self.max_distance)
    }
}
