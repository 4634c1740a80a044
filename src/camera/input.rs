//! Per-tick input records.
//!
//! Device polling happens elsewhere and at its own rate. It feeds an
//! [`InputLatch`], and the simulation takes exactly one [`InputSnapshot`]
//! out of the latch per tick.

use glam::Vec2;

/// Immutable input sample consumed by one controller tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSnapshot {
    /// Rotation deltas: x turns (yaw), y tilts (positive looks up).
    pub rotation: Vec2,
    /// Zoom delta (positive zooms in).
    pub zoom: f32,
    /// Movement intent: x strafes, y moves forward.
    pub movement: Vec2,
    /// The rotate-lock button is held.
    pub rotate_held: bool,
    /// The rotate-target button is held.
    pub rotate_target_held: bool,
}

impl InputSnapshot {
    /// Snapshot carrying only a rotation delta.
    #[must_use]
    pub fn rotate(x: f32, y: f32) -> Self {
        Self {
            rotation: Vec2::new(x, y),
            ..Self::default()
        }
    }

    /// Snapshot carrying only a zoom delta.
    #[must_use]
    pub fn zoom(delta: f32) -> Self {
        Self {
            zoom: delta,
            ..Self::default()
        }
    }

    /// Whether any rotation delta is present.
    #[inline]
    #[must_use]
    pub fn has_rotation(&self) -> bool {
        self.rotation != Vec2::ZERO
    }

    /// Whether any movement intent is present.
    #[inline]
    #[must_use]
    pub fn has_movement(&self) -> bool {
        self.movement != Vec2::ZERO
    }
}

/// Buffers device samples between simulation ticks.
///
/// Rotation and zoom deltas accumulate across samples so nothing is lost
/// when sampling runs faster than the tick; movement axes and buttons are
/// levels, so the latest sample wins.
#[derive(Debug, Clone, Default)]
pub struct InputLatch {
    pending: InputSnapshot,
    samples: u32,
}

impl InputLatch {
    /// Create an empty latch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one device sample.
    pub fn sample(&mut self, sample: InputSnapshot) {
        self.pending.rotation += sample.rotation;
        self.pending.zoom += sample.zoom;
        self.pending.movement = sample.movement;
        self.pending.rotate_held = sample.rotate_held;
        self.pending.rotate_target_held = sample.rotate_target_held;
        self.samples = self.samples.saturating_add(1);
    }

    /// Number of samples recorded since the last [`take`](Self::take).
    #[must_use]
    pub fn pending_samples(&self) -> u32 {
        self.samples
    }

    /// Hand out the snapshot for this tick and reset the deltas.
    ///
    /// Held levels carry over, so a tick with no new samples still sees the
    /// buttons and movement axes as they were last reported.
    pub fn take(&mut self) -> InputSnapshot {
        let snapshot = self.pending;
        self.pending.rotation = Vec2::ZERO;
        self.pending.zoom = 0.0;
        self.samples = 0;
        snapshot
    }
}
