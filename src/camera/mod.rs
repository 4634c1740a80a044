//! Tick-driven follow camera.
//!
//! A [`controller::CameraController`] keeps one camera behind one
//! [`target::Target`]: mode selection, orbit rotation, zoom, line-of-sight
//! correction against a [`obstruction::GeometryOracle`], and position
//! smoothing. [`rig::CameraRig`] holds one controller per target.

/// Per-target camera controller and its tick pipeline.
pub mod controller;
/// Camera transform and rotation helpers.
pub mod core;
/// Per-tick input snapshot and the latch that produces it.
pub mod input;
/// Camera modes and their behavior table.
pub mod mode;
/// Geometry oracle seam and distance correction.
pub mod obstruction;
/// Orbit angles and distances.
pub mod orbit;
/// Registry of independent controllers keyed by target.
pub mod rig;
/// The followed entity.
pub mod target;

pub use controller::{CameraController, TickOutcome};
pub use self::core::CameraTransform;
pub use input::{InputLatch, InputSnapshot};
pub use mode::CameraMode;
pub use obstruction::{GeometryOracle, NoGeometry};
pub use rig::CameraRig;
pub use target::{Avatar, Target, TargetId, TargetPose};
