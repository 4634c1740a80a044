use std::path::Path;

use glam::{Quat, Vec3};

use super::core::{look_rotation, orbit_rotation, CameraTransform};
use super::input::InputSnapshot;
use super::mode::CameraMode;
use super::obstruction::{
    correct_distance, damp_distance, GeometryOracle, QueryFilter,
};
use super::orbit::OrbitState;
use super::target::{Target, TargetId};
use crate::error::{ConfigError, VantageError};
use crate::options::Options;

/// Result of one controller tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// The camera was placed.
    Moved {
        /// New camera transform.
        transform: CameraTransform,
        /// Whether line of sight was blocked this tick.
        obstructed: bool,
    },
    /// The target had no pose; the transform was left unchanged.
    Skipped,
}

impl TickOutcome {
    /// New transform, if the tick moved the camera.
    #[must_use]
    pub fn transform(&self) -> Option<CameraTransform> {
        match self {
            Self::Moved { transform, .. } => Some(*transform),
            Self::Skipped => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Tick,
    Transition,
}

/// Follow camera for a single target.
///
/// Owns its options, mode and [`OrbitState`]. Driven by
/// [`tick`](Self::tick) once per simulation step; the per-tick path never
/// fails.
#[derive(Debug, Clone)]
pub struct CameraController {
    options: Options,
    mode: CameraMode,
    orbit: OrbitState,
    transform: CameraTransform,
    /// Orbit state must be seeded from the next target pose, and that tick
    /// places the camera without smoothing.
    reseed: bool,
    active_preset: Option<String>,
    target_yaw: f32,
    ticks: u64,
    target_writes: u64,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::from_valid(Options::default())
    }
}

impl CameraController {
    /// Controller in the mode selected by `options`.
    pub fn new(options: Options) -> Result<Self, ConfigError> {
        options.validate()?;
        Ok(Self::from_valid(options))
    }

    fn from_valid(options: Options) -> Self {
        let mode = options.camera_mode();
        let orbit =
            OrbitState::new(mode, 0.0, &options.rotation, &options.zoom);
        Self {
            options,
            mode,
            orbit,
            transform: CameraTransform::default(),
            reseed: true,
            active_preset: None,
            target_yaw: 0.0,
            ticks: 0,
            target_writes: 0,
        }
    }

    /// Options currently in force.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    /// Orbit angles and distances.
    #[must_use]
    pub fn orbit(&self) -> &OrbitState {
        &self.orbit
    }

    /// Last applied camera transform.
    #[must_use]
    pub fn transform(&self) -> CameraTransform {
        self.transform
    }

    /// Ticks that placed the camera.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// How many times the camera has turned its target.
    #[must_use]
    pub fn target_writes(&self) -> u64 {
        self.target_writes
    }

    /// Replace the options after validating them.
    ///
    /// Invalid options are rejected and the previous ones stay in force. A
    /// different mode triggers a transition on the next tick; otherwise the
    /// orbit state is kept and pulled into the new limits.
    pub fn apply_options(
        &mut self,
        options: Options,
    ) -> Result<(), ConfigError> {
        if let Err(e) = options.validate() {
            log::warn!("Rejected camera options: {e}");
            return Err(e);
        }
        let mode = options.camera_mode();
        let offset_changed = options.mode.offset != self.options.mode.offset;
        self.options = options;
        if mode == self.mode {
            if offset_changed {
                self.apply_offset();
            }
            let zoom = &self.options.zoom;
            self.orbit.desired_distance =
                zoom.clamp(self.orbit.desired_distance);
            self.orbit.corrected_distance =
                zoom.clamp(self.orbit.corrected_distance);
            self.orbit.current_distance =
                zoom.clamp(self.orbit.current_distance);
            self.orbit.clamp_pitch(&self.options.rotation);
        } else {
            log::debug!("Camera mode {} -> {} (options)", self.mode, mode);
            self.mode = mode;
            self.apply_mode_defaults();
        }
        Ok(())
    }

    /// Set one option by section and field name, as a property inspector
    /// would.
    pub fn set_option(
        &mut self,
        section: &str,
        field: &str,
        value: serde_json::Value,
    ) -> Result<(), VantageError> {
        let mut options = self.options.clone();
        options.set_field(section, field, value)?;
        self.apply_options(options)?;
        Ok(())
    }

    /// Name of the last preset loaded or saved.
    #[must_use]
    pub fn active_preset(&self) -> Option<&str> {
        self.active_preset.as_deref()
    }

    /// Load a named preset from `presets_dir` and apply it.
    /// Returns true on success.
    pub fn load_preset(&mut self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        let loaded = Options::load(&path)
            .and_then(|opts| self.apply_options(opts).map_err(Into::into));
        match loaded {
            Ok(()) => {
                log::info!("Loaded camera preset '{name}'");
                self.active_preset = Some(name.to_owned());
                true
            }
            Err(e) => {
                log::error!("Failed to load camera preset '{name}': {e}");
                false
            }
        }
    }

    /// Save the current options as a named preset.
    /// Returns true on success.
    pub fn save_preset(&mut self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match self.options.save(&path) {
            Ok(()) => {
                log::info!("Saved camera preset '{name}'");
                self.active_preset = Some(name.to_owned());
                true
            }
            Err(e) => {
                log::error!("Failed to save camera preset '{name}': {e}");
                false
            }
        }
    }

    /// Mount the camera at `offset` instead of the mode default.
    ///
    /// Angles are kept and the distances jump to the offset's forward
    /// length; the position eases over as usual. The override lasts until
    /// the next [`set_mode`](Self::set_mode).
    pub fn set_offset(&mut self, offset: Vec3) -> Result<(), ConfigError> {
        let mut options = self.options.clone();
        options.mode.offset = Some(offset.to_array());
        self.apply_options(options)
    }

    /// Reset the orbit state to the current mode's defaults, keeping any
    /// offset override.
    ///
    /// Takes effect on the next tick, which places the camera without
    /// smoothing.
    pub fn apply_mode_defaults(&mut self) {
        self.reset_orbit();
        self.reseed = true;
    }

    fn reset_orbit(&mut self) {
        self.orbit.reset_with_offset(
            self.mode,
            self.options.mode.effective_offset(),
            self.target_yaw,
            &self.options.rotation,
            &self.options.zoom,
        );
    }

    fn apply_offset(&mut self) {
        // The fixed mount aims from its offset, so it re-seeds.
        if self.mode == CameraMode::FIXED_FOLLOW {
            self.reset_orbit();
        } else {
            self.orbit.set_offset(
                self.options.mode.effective_offset(),
                &self.options.zoom,
            );
        }
    }

    /// Switch to `mode` and place the camera there immediately.
    ///
    /// Defaults are re-applied even when `mode` is already current, and an
    /// offset override is dropped. If the target has no pose the placement
    /// waits for the next tick.
    pub fn set_mode(
        &mut self,
        mode: CameraMode,
        target: &mut dyn Target,
        oracle: &dyn GeometryOracle,
    ) -> TickOutcome {
        log::debug!("Camera mode {} -> {}", self.mode, mode);
        self.mode = mode;
        self.options.mode.set_mode(mode);
        self.apply_mode_defaults();
        self.step(
            target,
            &InputSnapshot::default(),
            oracle,
            0.0,
            Step::Transition,
        )
    }

    /// Advance the camera by one fixed step of `dt` seconds.
    pub fn tick(
        &mut self,
        target: &mut dyn Target,
        input: &InputSnapshot,
        oracle: &dyn GeometryOracle,
        dt: f32,
    ) -> TickOutcome {
        self.step(target, input, oracle, dt, Step::Tick)
    }

    fn step(
        &mut self,
        target: &mut dyn Target,
        input: &InputSnapshot,
        oracle: &dyn GeometryOracle,
        dt: f32,
        step: Step,
    ) -> TickOutcome {
        let Some(pose) = target.pose() else {
            log::debug!("Camera tick skipped: {:?} has no pose", target.id());
            return TickOutcome::Skipped;
        };
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.target_yaw = pose.yaw_degrees();

        let snap = step == Step::Transition || self.reseed;
        if self.reseed {
            self.reset_orbit();
            self.reseed = false;
        }

        let policy = self.mode.policy();

        // Rotation
        let rotation_opts = &self.options.rotation;
        let rotated = policy.rotate && self.orbit.rotate(input, rotation_opts);
        if policy.orbit && rotation_opts.return_to_behind && !rotated {
            self.orbit
                .return_to_behind(self.target_yaw, input, dt, rotation_opts);
        }
        self.orbit.note_movement(input);
        self.orbit.clamp_pitch(rotation_opts);

        // Zoom
        let zoom = &self.options.zoom;
        if policy.zoom {
            self.orbit.zoom(input.zoom, dt, zoom);
        }
        self.orbit.desired_distance = zoom.clamp(self.orbit.desired_distance);
        self.orbit.corrected_distance = self.orbit.desired_distance;

        // Obstruction and placement
        let pivot = self.orbit.pivot(&pose);
        let (computed, rotation, obstructed) = if policy.copy_target_rotation {
            (pose.mount_point(self.orbit.offset), pose.rotation, false)
        } else if policy.orbit {
            let ignore = policy.check_obstruction.then(|| target.id());
            self.place_orbit(pivot, ignore, oracle, dt)
        } else {
            let rotation = orbit_rotation(
                self.target_yaw + self.orbit.yaw_deg,
                self.orbit.pitch_deg,
            );
            (pose.mount_point(self.orbit.offset), rotation, false)
        };
        self.orbit.current_distance =
            self.options.zoom.clamp(self.orbit.current_distance);

        if step == Step::Tick && policy.may_drive_target {
            let follow = &self.options.follow;
            let drive = follow.drive_target_rotation
                || (follow.rotate_target_with_button && input.rotate_target_held);
            if drive {
                target.set_yaw(self.orbit.yaw_deg);
                self.target_writes += 1;
            }
        }

        // Smoothing
        let position = if snap {
            computed
        } else {
            self.transform
                .position
                .lerp(computed, self.options.follow.position_lerp)
        };
        let rotation = if policy.face_target {
            look_rotation(pose.position - position).unwrap_or(rotation)
        } else {
            rotation
        };

        self.transform = CameraTransform { position, rotation };
        self.ticks += 1;
        TickOutcome::Moved {
            transform: self.transform,
            obstructed,
        }
    }

    /// Orbit placement: correct for obstruction, smooth the distance, then
    /// back off from the shoulder point along the view direction.
    ///
    /// `obstruction` carries the target to ignore; `None` skips the query.
    fn place_orbit(
        &mut self,
        pivot: Vec3,
        obstruction: Option<TargetId>,
        oracle: &dyn GeometryOracle,
        dt: f32,
    ) -> (Vec3, Quat, bool) {
        let rotation = self.orbit.rotation();
        let back = rotation * Vec3::NEG_Z;
        let origin = self.orbit.shoulder(pivot);
        let mut obstructed = false;

        if let Some(ignore) = obstruction {
            let candidate = origin + back * self.orbit.desired_distance;
            let filter = QueryFilter {
                mask: self.options.obstruction.mask(),
                ignore: Some(ignore),
            };
            let correction = correct_distance(
                oracle,
                origin,
                candidate,
                self.orbit.desired_distance,
                self.options.obstruction.wall_offset,
                filter,
            );
            self.orbit.corrected_distance = correction.distance;
            obstructed = correction.obstructed;
        }

        let zoom = &self.options.zoom;
        self.orbit.current_distance = zoom.clamp(damp_distance(
            self.orbit.current_distance,
            self.orbit.corrected_distance,
            obstructed,
            dt * zoom.zoom_dampening,
        ));
        (origin + back * self.orbit.current_distance, rotation, obstructed)
    }
}
