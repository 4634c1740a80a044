//! Reference collision world: axis-aligned boxes tagged with layers and an
//! optional owning target.
//!
//! Enough geometry to drive the camera outside a game engine, in tests and
//! in the headless driver.

use glam::Vec3;

use crate::camera::obstruction::{
    CollisionMask, GeometryOracle, Hit, QueryFilter,
};
use crate::camera::target::TargetId;

/// Axis-aligned box collider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
    /// Layers this collider lives on.
    pub layers: CollisionMask,
    /// Target this collider belongs to, if any.
    pub owner: Option<TargetId>,
}

impl Collider {
    /// Box between two corners on every layer, owned by nobody.
    #[must_use]
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
            layers: CollisionMask::ALL,
            owner: None,
        }
    }

    /// Box of `size` centered on `center`.
    #[must_use]
    pub fn centered(center: Vec3, size: Vec3) -> Self {
        let half = size.abs() * 0.5;
        Self::new(center - half, center + half)
    }

    /// Same box on `layers`.
    #[must_use]
    pub fn on_layers(mut self, layers: CollisionMask) -> Self {
        self.layers = layers;
        self
    }

    /// Same box owned by `owner`.
    #[must_use]
    pub fn owned_by(mut self, owner: TargetId) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Segment parameter in `[0, 1]` where `origin + delta * t` first
    /// touches the box (slab test). An origin inside the box yields `0`.
    #[must_use]
    pub fn segment_entry(&self, origin: Vec3, delta: Vec3) -> Option<f32> {
        let mut t_min = 0.0_f32;
        let mut t_max = 1.0_f32;
        for axis in 0..3 {
            let o = origin[axis];
            let d = delta[axis];
            let (lo, hi) = (self.min[axis], self.max[axis]);
            if d.abs() < f32::EPSILON {
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }
            let inv = d.recip();
            let (t0, t1) = {
                let a = (lo - o) * inv;
                let b = (hi - o) * inv;
                (a.min(b), a.max(b))
            };
            t_min = t_min.max(t0);
            t_max = t_max.min(t1);
            if t_min > t_max {
                return None;
            }
        }
        Some(t_min)
    }
}

/// Flat list of box colliders answering segment queries.
#[derive(Debug, Clone, Default)]
pub struct BoxWorld {
    colliders: Vec<Collider>,
}

impl BoxWorld {
    /// Empty world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a collider.
    pub fn insert(&mut self, collider: Collider) {
        self.colliders.push(collider);
    }

    /// Move every collider owned by `owner` by `delta`.
    pub fn translate_owned(&mut self, owner: TargetId, delta: Vec3) {
        let owned = self
            .colliders
            .iter_mut()
            .filter(|c| c.owner == Some(owner));
        for c in owned {
            c.min += delta;
            c.max += delta;
        }
    }

    /// All colliders.
    #[must_use]
    pub fn colliders(&self) -> &[Collider] {
        &self.colliders
    }
}

impl FromIterator<Collider> for BoxWorld {
    fn from_iter<I: IntoIterator<Item = Collider>>(iter: I) -> Self {
        Self {
            colliders: iter.into_iter().collect(),
        }
    }
}

impl GeometryOracle for BoxWorld {
    fn first_obstruction(
        &self,
        origin: Vec3,
        destination: Vec3,
        filter: QueryFilter,
    ) -> Option<Hit> {
        let delta = destination - origin;
        self.colliders
            .iter()
            .filter(|c| filter.mask.intersects(c.layers))
            .filter(|c| c.owner.is_none() || c.owner != filter.ignore)
            .filter_map(|c| c.segment_entry(origin, delta).map(|t| (t, c)))
            .min_by(|(a, _), (b, _)| a.total_cmp(b))
            .map(|(t, c)| Hit {
                point: origin + delta * t,
                owner: c.owner,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: QueryFilter = QueryFilter {
        mask: CollisionMask::ALL,
        ignore: None,
    };

    fn wall_at_z(z: f32) -> Collider {
        Collider::new(
            Vec3::new(-5.0, -5.0, z - 0.5),
            Vec3::new(5.0, 5.0, z + 0.5),
        )
    }

    #[test]
    fn nearest_hit_wins() {
        let world: BoxWorld =
            [wall_at_z(-6.0), wall_at_z(-3.0)].into_iter().collect();
        let hit = world
            .first_obstruction(Vec3::ZERO, Vec3::new(0.0, 0.0, -10.0), ALL)
            .unwrap();
        assert!((hit.point - Vec3::new(0.0, 0.0, -2.5)).length() < 1e-5);
    }

    #[test]
    fn short_segment_misses() {
        let world: BoxWorld = std::iter::once(wall_at_z(-6.0)).collect();
        assert!(world
            .first_obstruction(Vec3::ZERO, Vec3::new(0.0, 0.0, -4.0), ALL)
            .is_none());
    }

    #[test]
    fn parallel_segment_outside_slab_misses() {
        let world: BoxWorld = std::iter::once(wall_at_z(-6.0)).collect();
        let from = Vec3::new(0.0, 10.0, 0.0);
        assert!(world
            .first_obstruction(from, from + Vec3::new(0.0, 0.0, -10.0), ALL)
            .is_none());
    }

    #[test]
    fn mask_and_owner_filter() {
        let mut world = BoxWorld::new();
        world.insert(wall_at_z(-2.0).owned_by(TargetId(1)));
        world.insert(wall_at_z(-4.0).on_layers(CollisionMask(0b10)));
        world.insert(wall_at_z(-6.0).on_layers(CollisionMask(0b01)));

        let filter = QueryFilter {
            mask: CollisionMask(0b01),
            ignore: Some(TargetId(1)),
        };
        let hit = world
            .first_obstruction(Vec3::ZERO, Vec3::new(0.0, 0.0, -10.0), filter)
            .unwrap();
        assert!((hit.point.z - -5.5).abs() < 1e-5);

        let none = QueryFilter {
            mask: CollisionMask::NONE,
            ignore: None,
        };
        assert!(world
            .first_obstruction(Vec3::ZERO, Vec3::new(0.0, 0.0, -10.0), none)
            .is_none());
    }

    #[test]
    fn origin_inside_box_hits_at_origin() {
        let world: BoxWorld = std::iter::once(Collider::centered(
            Vec3::ZERO,
            Vec3::splat(2.0),
        ))
        .collect();
        let hit = world
            .first_obstruction(Vec3::ZERO, Vec3::new(0.0, 0.0, -5.0), ALL)
            .unwrap();
        assert_eq!(hit.point, Vec3::ZERO);
    }

    #[test]
    fn translate_owned_moves_only_owned() {
        let mut world = BoxWorld::new();
        world.insert(wall_at_z(-2.0).owned_by(TargetId(4)));
        world.insert(wall_at_z(-6.0));
        world.translate_owned(TargetId(4), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(world.colliders()[0].max.z, -0.5);
        assert_eq!(world.colliders()[1].max.z, -5.5);
    }
}
