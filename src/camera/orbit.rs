//! Accumulated orbit angles and distances.
//!
//! One [`OrbitState`] per camera, owned by its
//! [`CameraController`](super::controller::CameraController). Rotation and
//! zoom behaviors mutate it; everything else reads it.

use glam::{Quat, Vec3};

use super::core::orbit_rotation;
use super::input::InputSnapshot;
use super::mode::{CameraMode, ThirdPersonMode};
use super::target::TargetPose;
use crate::options::{RotationOptions, ZoomLaw, ZoomOptions};
use crate::util::angle::lerp_angle;

/// Mutable orbit state for one camera.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitState {
    /// Accumulated yaw in degrees, unbounded. In the fixed mount this is
    /// relative to the target's heading.
    pub yaw_deg: f32,
    /// Pitch in degrees, clamped to the vertical range every tick.
    pub pitch_deg: f32,
    /// Smoothed distance actually used to place the camera.
    pub current_distance: f32,
    /// Distance requested by zoom.
    pub desired_distance: f32,
    /// Desired distance after line-of-sight correction.
    pub corrected_distance: f32,
    /// Mode offset: x lateral, y vertical (pivot height for orbit modes),
    /// z forward.
    pub offset: Vec3,
    /// Whether the previous tick carried movement intent.
    pub had_movement_intent: bool,
}

impl OrbitState {
    /// Fresh state for `mode`, behind a target heading `target_yaw`.
    #[must_use]
    pub fn new(
        mode: CameraMode,
        target_yaw: f32,
        rotation: &RotationOptions,
        zoom: &ZoomOptions,
    ) -> Self {
        let mut state = Self {
            yaw_deg: 0.0,
            pitch_deg: 0.0,
            current_distance: 0.0,
            desired_distance: 0.0,
            corrected_distance: 0.0,
            offset: Vec3::ZERO,
            had_movement_intent: false,
        };
        state.reset_for_mode(mode, target_yaw, rotation, zoom);
        state
    }

    /// Snap every field to the defaults of `mode`.
    ///
    /// Offset comes from [`CameraMode::default_offset`]; see
    /// [`reset_with_offset`](Self::reset_with_offset) for the rest.
    pub fn reset_for_mode(
        &mut self,
        mode: CameraMode,
        target_yaw: f32,
        rotation: &RotationOptions,
        zoom: &ZoomOptions,
    ) {
        self.reset_with_offset(
            mode,
            mode.default_offset(),
            target_yaw,
            rotation,
            zoom,
        );
    }

    /// Snap every field for `mode`, mounted at `offset`.
    ///
    /// The three distances all become the offset's forward length, clamped
    /// to the zoom range. Orbit modes start level behind the target; the
    /// fixed mount aims from its offset at the target origin.
    pub fn reset_with_offset(
        &mut self,
        mode: CameraMode,
        offset: Vec3,
        target_yaw: f32,
        rotation: &RotationOptions,
        zoom: &ZoomOptions,
    ) {
        self.set_offset(offset, zoom);
        self.had_movement_intent = false;

        if mode == CameraMode::ThirdPerson(ThirdPersonMode::Fixed) {
            let to_target = -self.offset;
            let flat = Vec3::new(to_target.x, 0.0, to_target.z).length();
            self.yaw_deg = to_target.x.atan2(to_target.z).to_degrees();
            self.pitch_deg = (-to_target.y).atan2(flat).to_degrees();
        } else {
            self.yaw_deg = target_yaw;
            self.pitch_deg = 0.0;
        }
        self.pitch_deg = rotation.clamp_pitch(self.pitch_deg);
    }

    /// Replace the offset, keeping the angles. Distances jump to the new
    /// forward length.
    pub fn set_offset(&mut self, offset: Vec3, zoom: &ZoomOptions) {
        self.offset = offset;
        let distance = zoom.clamp(offset.z.abs());
        self.current_distance = distance;
        self.desired_distance = distance;
        self.corrected_distance = distance;
    }

    /// Apply rotation input if the button gate allows it.
    ///
    /// Returns whether any rotation was applied. Pitch is not clamped here;
    /// see [`clamp_pitch`](Self::clamp_pitch).
    pub fn rotate(
        &mut self,
        input: &InputSnapshot,
        options: &RotationOptions,
    ) -> bool {
        let gate_open = !options.rotate_requires_button || input.rotate_held;
        if !gate_open || !input.has_rotation() {
            return false;
        }
        self.yaw_deg += input.rotation.x * options.rotate_speed;
        self.pitch_deg -= input.rotation.y * options.rotate_speed;
        true
    }

    /// Clamp pitch to the configured vertical range.
    ///
    /// Runs every tick, input or not, so tightened limits apply at once.
    pub fn clamp_pitch(&mut self, options: &RotationOptions) {
        self.pitch_deg = options.clamp_pitch(self.pitch_deg);
    }

    /// Ease yaw back behind a moving target.
    ///
    /// Acts while the target has movement intent and on the first tick
    /// after it stops; a stationary target never pulls the camera.
    /// Blends the short way around at `return_damping * dt`.
    pub fn return_to_behind(
        &mut self,
        target_yaw: f32,
        input: &InputSnapshot,
        dt: f32,
        options: &RotationOptions,
    ) {
        // Intent now or on the previous tick: the swing runs through a walk
        // and once more on the tick it stops, not only on that stop tick.
        if input.has_movement() || self.had_movement_intent {
            self.yaw_deg = lerp_angle(
                self.yaw_deg,
                target_yaw,
                options.return_damping * dt,
            );
        }
    }

    /// Remember this tick's movement intent for the next one.
    pub fn note_movement(&mut self, input: &InputSnapshot) {
        self.had_movement_intent = input.has_movement();
    }

    /// Apply a zoom delta with the configured law, then clamp.
    pub fn zoom(&mut self, delta: f32, dt: f32, options: &ZoomOptions) {
        let step = match options.law {
            ZoomLaw::Linear => delta * options.zoom_speed,
            ZoomLaw::Proportional => {
                delta
                    * dt
                    * options.zoom_rate
                    * self.desired_distance.abs()
                    * options.speed_factor
            }
        };
        self.desired_distance = options.clamp(self.desired_distance - step);
    }

    /// Point the orbit turns around: target origin raised by the offset's
    /// vertical component.
    #[must_use]
    pub fn pivot(&self, pose: &TargetPose) -> Vec3 {
        pose.position + Vec3::Y * self.offset.y
    }

    /// Point the camera backs away from: the pivot shifted sideways by the
    /// offset's lateral component, in the yaw frame so pitch never tilts it.
    #[must_use]
    pub fn shoulder(&self, pivot: Vec3) -> Vec3 {
        pivot + orbit_rotation(self.yaw_deg, 0.0) * Vec3::X * self.offset.x
    }

    /// Orbit rotation from the accumulated angles.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        orbit_rotation(self.yaw_deg, self.pitch_deg)
    }
}
