//! One independent camera per tracked target.

use rustc_hash::FxHashMap;

use super::controller::{CameraController, TickOutcome};
use super::input::InputSnapshot;
use super::obstruction::GeometryOracle;
use super::target::{Target, TargetId};
use crate::error::ConfigError;
use crate::options::Options;

/// Registry of camera controllers keyed by target.
///
/// Controllers share nothing; ticking one never touches another.
#[derive(Debug, Default)]
pub struct CameraRig {
    defaults: Options,
    cameras: FxHashMap<TargetId, CameraController>,
}

impl CameraRig {
    /// Empty rig whose new cameras start from `defaults`.
    pub fn new(defaults: Options) -> Result<Self, ConfigError> {
        defaults.validate()?;
        Ok(Self {
            defaults,
            cameras: FxHashMap::default(),
        })
    }

    /// Camera for `id`, created from the rig defaults if absent.
    pub fn attach(&mut self, id: TargetId) -> &mut CameraController {
        let defaults = &self.defaults;
        self.cameras.entry(id).or_insert_with(|| {
            log::debug!("Attached camera to {id:?}");
            CameraController::new(defaults.clone()).unwrap_or_default()
        })
    }

    /// Remove and return the camera for `id`.
    pub fn detach(&mut self, id: TargetId) -> Option<CameraController> {
        let removed = self.cameras.remove(&id);
        if removed.is_some() {
            log::debug!("Detached camera from {id:?}");
        }
        removed
    }

    /// Camera for `id`, if attached.
    #[must_use]
    pub fn get(&self, id: TargetId) -> Option<&CameraController> {
        self.cameras.get(&id)
    }

    /// Mutable camera for `id`, if attached.
    pub fn get_mut(&mut self, id: TargetId) -> Option<&mut CameraController> {
        self.cameras.get_mut(&id)
    }

    /// Number of attached cameras.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cameras.len()
    }

    /// Whether no camera is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty()
    }

    /// Tick the camera following `target`. Unattached targets are skipped.
    pub fn tick(
        &mut self,
        target: &mut dyn Target,
        input: &InputSnapshot,
        oracle: &dyn GeometryOracle,
        dt: f32,
    ) -> TickOutcome {
        match self.cameras.get_mut(&target.id()) {
            Some(camera) => camera.tick(target, input, oracle, dt),
            None => TickOutcome::Skipped,
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::mode::CameraMode;
    use crate::camera::obstruction::NoGeometry;
    use crate::camera::target::Avatar;

    #[test]
    fn cameras_are_independent() {
        let mut rig = CameraRig::default();
        let mut a = Avatar::new(TargetId(1), Vec3::ZERO, 0.0);
        let mut b = Avatar::new(TargetId(2), Vec3::new(50.0, 0.0, 0.0), 0.0);
        let _ = rig.attach(a.id);
        let _ = rig.attach(b.id);
        assert_eq!(rig.len(), 2);

        let _ = rig.tick(&mut a, &InputSnapshot::zoom(1.0), &NoGeometry, 0.02);
        let _ = rig.tick(&mut b, &InputSnapshot::default(), &NoGeometry, 0.02);

        let cam_a = rig.get(a.id).unwrap();
        let cam_b = rig.get(b.id).unwrap();
        assert_eq!(cam_a.orbit().desired_distance, 2.0);
        assert_eq!(cam_b.orbit().desired_distance, 7.0);
        assert!(cam_b.transform().position.x > 40.0);
    }

    #[test]
    fn unattached_target_is_skipped() {
        let mut rig = CameraRig::default();
        let mut a = Avatar::new(TargetId(9), Vec3::ZERO, 0.0);
        let outcome =
            rig.tick(&mut a, &InputSnapshot::default(), &NoGeometry, 0.02);
        assert_eq!(outcome, TickOutcome::Skipped);
        assert!(rig.is_empty());
    }

    #[test]
    fn attach_uses_rig_defaults_and_detach_removes() {
        let mut defaults = Options::default();
        defaults.mode.set_mode(CameraMode::FreeLook);
        let mut rig = CameraRig::new(defaults).unwrap();

        assert_eq!(rig.attach(TargetId(3)).mode(), CameraMode::FreeLook);
        rig.get_mut(TargetId(3))
            .unwrap()
            .apply_options(Options::default())
            .unwrap();
        // Re-attaching keeps the existing camera.
        assert_eq!(
            rig.attach(TargetId(3)).mode(),
            CameraMode::INTERACTIVE_ORBIT
        );

        assert!(rig.detach(TargetId(3)).is_some());
        assert!(rig.detach(TargetId(3)).is_none());
        assert!(rig.is_empty());
    }

    #[test]
    fn invalid_defaults_rejected() {
        let mut defaults = Options::default();
        defaults.follow.position_lerp = 2.0;
        assert!(CameraRig::new(defaults).is_err());
    }
}
