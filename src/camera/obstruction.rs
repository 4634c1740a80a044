//! Line-of-sight correction between the pivot and the camera.
//!
//! The physics engine is reduced to a single [`GeometryOracle`] query. The
//! result feeds [`damp_distance`], which snaps inward instantly (the camera
//! must never sit inside geometry, even for one frame) and eases back out.

use glam::Vec3;

use super::target::TargetId;

/// Below this segment length a query is degenerate and skipped.
pub const MIN_QUERY_LENGTH: f32 = 1e-4;

/// Bit set of collision layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollisionMask(pub u32);

impl CollisionMask {
    /// Every layer.
    pub const ALL: Self = Self(u32::MAX);
    /// No layer; queries with this mask never hit.
    pub const NONE: Self = Self(0);

    /// Whether any layer is shared with `layers`.
    #[inline]
    #[must_use]
    pub fn intersects(self, layers: Self) -> bool {
        self.0 & layers.0 != 0
    }
}

/// Which colliders a query may report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryFilter {
    /// Only colliders on these layers count.
    pub mask: CollisionMask,
    /// Colliders owned by this target never count.
    pub ignore: Option<TargetId>,
}

/// First obstruction found along a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Contact point in world space.
    pub point: Vec3,
    /// Target owning the collider that was hit, if any.
    pub owner: Option<TargetId>,
}

/// Segment query into the scene's collision world.
///
/// Implementations must be synchronous. An implementation that cannot answer
/// within the tick returns `None`; the camera then treats the line as clear.
pub trait GeometryOracle {
    /// Nearest hit on the segment `origin -> destination` that passes
    /// `filter`, or `None`.
    fn first_obstruction(
        &self,
        origin: Vec3,
        destination: Vec3,
        filter: QueryFilter,
    ) -> Option<Hit>;
}

/// Oracle for an empty scene.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGeometry;

impl GeometryOracle for NoGeometry {
    fn first_obstruction(
        &self,
        _origin: Vec3,
        _destination: Vec3,
        _filter: QueryFilter,
    ) -> Option<Hit> {
        None
    }
}

/// Outcome of one line-of-sight check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Correction {
    /// Distance the camera may sit at, never above the desired distance.
    pub distance: f32,
    /// Whether the query reported a hit.
    pub obstructed: bool,
}

/// Check the segment from `pivot` to `candidate` and shorten
/// `desired_distance` to stay `wall_offset` in front of the first hit.
///
/// A degenerate segment skips the query entirely. A hit on the ignored
/// target is discarded even if the oracle reports it.
#[must_use]
pub fn correct_distance(
    oracle: &dyn GeometryOracle,
    pivot: Vec3,
    candidate: Vec3,
    desired_distance: f32,
    wall_offset: f32,
    filter: QueryFilter,
) -> Correction {
    let clear = Correction {
        distance: desired_distance,
        obstructed: false,
    };
    if pivot.distance(candidate) < MIN_QUERY_LENGTH {
        return clear;
    }
    match oracle.first_obstruction(pivot, candidate, filter) {
        Some(hit) if filter.ignore.is_none() || hit.owner != filter.ignore => {
            let distance = (pivot.distance(hit.point) - wall_offset)
                .max(0.0)
                .min(desired_distance);
            Correction {
                distance,
                obstructed: true,
            }
        }
        _ => clear,
    }
}

/// One tick of distance smoothing.
///
/// Eases toward `corrected` when the line is clear or the camera is being
/// pushed back out; snaps to `corrected` when a hit is closer than where
/// the camera sits now. `blend` is `dt * zoom_dampening` and is clamped to
/// `[0, 1]`. The caller clamps the result to the distance range.
#[inline]
#[must_use]
pub fn damp_distance(
    current: f32,
    corrected: f32,
    obstructed: bool,
    blend: f32,
) -> f32 {
    if !obstructed || corrected > current {
        current + (corrected - current) * blend.clamp(0.0, 1.0)
    } else {
        corrected
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    /// Reports a wall at a fixed distance along any query.
    struct WallAt {
        distance: f32,
        owner: Option<TargetId>,
        calls: Cell<u32>,
    }

    impl WallAt {
        fn new(distance: f32) -> Self {
            Self {
                distance,
                owner: None,
                calls: Cell::new(0),
            }
        }
    }

    impl GeometryOracle for WallAt {
        fn first_obstruction(
            &self,
            origin: Vec3,
            destination: Vec3,
            _filter: QueryFilter,
        ) -> Option<Hit> {
            self.calls.set(self.calls.get() + 1);
            let dir = destination - origin;
            (dir.length() > self.distance).then(|| Hit {
                point: origin + dir.normalize() * self.distance,
                owner: self.owner,
            })
        }
    }

    const FILTER: QueryFilter = QueryFilter {
        mask: CollisionMask::ALL,
        ignore: Some(TargetId(7)),
    };

    #[test]
    fn hit_shortens_by_wall_offset() {
        let wall = WallAt::new(3.0);
        let c = correct_distance(
            &wall,
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, -8.0),
            8.0,
            0.1,
            FILTER,
        );
        assert!(c.obstructed);
        assert!((c.distance - 2.9).abs() < 1e-5);
    }

    #[test]
    fn clear_line_keeps_desired() {
        let wall = WallAt::new(30.0);
        let c = correct_distance(
            &wall,
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, -8.0),
            8.0,
            0.1,
            FILTER,
        );
        assert_eq!(
            c,
            Correction {
                distance: 8.0,
                obstructed: false
            }
        );
    }

    #[test]
    fn degenerate_segment_skips_query() {
        let wall = WallAt::new(0.0);
        let c = correct_distance(&wall, Vec3::ONE, Vec3::ONE, 0.0, 0.1, FILTER);
        assert!(!c.obstructed);
        assert_eq!(wall.calls.get(), 0);
    }

    #[test]
    fn self_hit_is_discarded() {
        let mut wall = WallAt::new(1.0);
        wall.owner = Some(TargetId(7));
        let c = correct_distance(
            &wall,
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, -5.0),
            5.0,
            0.1,
            FILTER,
        );
        assert!(!c.obstructed);
        assert_eq!(c.distance, 5.0);
    }

    #[test]
    fn hit_inside_wall_offset_floors_at_zero() {
        let wall = WallAt::new(0.05);
        let c = correct_distance(
            &wall,
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, -5.0),
            5.0,
            0.1,
            FILTER,
        );
        assert!(c.obstructed);
        assert_eq!(c.distance, 0.0);
    }

    #[test]
    fn closer_obstruction_snaps() {
        assert_eq!(damp_distance(8.0, 2.9, true, 0.1), 2.9);
    }

    #[test]
    fn recovery_eases_out() {
        let next = damp_distance(2.9, 8.0, true, 0.1);
        assert!((next - 3.41).abs() < 1e-4);
    }

    #[test]
    fn clear_line_eases_without_overshoot() {
        let mut current = 2.0;
        for _ in 0..50 {
            let next = damp_distance(current, 8.0, false, 0.2);
            assert!(next > current && next <= 8.0);
            current = next;
        }
    }

    #[test]
    fn blend_is_clamped() {
        assert_eq!(damp_distance(2.0, 8.0, false, 3.0), 8.0);
        assert_eq!(damp_distance(2.0, 8.0, false, -1.0), 2.0);
    }
}
