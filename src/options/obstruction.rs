use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::obstruction::CollisionMask;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Obstruction", inline)]
#[serde(default)]
/// Line-of-sight correction parameters.
pub struct ObstructionOptions {
    /// Gap kept between the camera and a blocking surface, in meters.
    #[schemars(title = "Wall Offset", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub wall_offset: f32,
    /// Layers that can block the camera.
    #[schemars(skip)]
    pub collision_mask: u32,
}

impl Default for ObstructionOptions {
    fn default() -> Self {
        Self {
            wall_offset: 0.1,
            collision_mask: CollisionMask::ALL.0,
        }
    }
}

impl ObstructionOptions {
    /// Collision mask as a typed value.
    #[must_use]
    pub fn mask(&self) -> CollisionMask {
        CollisionMask(self.collision_mask)
    }
}
