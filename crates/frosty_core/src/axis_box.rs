//! Axis-aligned box primitive.

use std::sync::Arc;

use frosty_math::{Interval, Ray, Vec3};
use serde::Deserialize;

use crate::hittable::{HitRecord, Hittable};
use crate::material::{Material, MaterialRegistry};
use crate::{SceneError, SceneResult};

/// A box as loaded: the corner with the smallest X, Y and Z, and how far it
/// extends along each positive axis.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BoxDesc {
    pub pos: Vec3,
    pub dim: Vec3,
    pub mat: String,
}

impl BoxDesc {
    pub fn new(pos: Vec3, dim: Vec3, mat: impl Into<String>) -> Self {
        Self {
            pos,
            dim,
            mat: mat.into(),
        }
    }

    /// A box of size `dim` centered on `center`.
    pub fn centered(center: Vec3, dim: Vec3, mat: impl Into<String>) -> Self {
        Self::new(center - dim / 2.0, dim, mat)
    }

    /// Resolve the material and check the extents.
    pub fn initialize(&self, materials: &MaterialRegistry) -> SceneResult<AxisBox> {
        let material = materials
            .get(&self.mat)
            .cloned()
            .ok_or_else(|| SceneError::MaterialNotFound(self.mat.clone()))?;

        if !self.dim.cmpgt(Vec3::ZERO).all() {
            return Err(SceneError::InvalidExtent(self.dim));
        }

        let max = self.pos + self.dim;
        Ok(AxisBox {
            extents: [
                Interval::new(self.pos.x, max.x),
                Interval::new(self.pos.y, max.y),
                Interval::new(self.pos.z, max.z),
            ],
            material,
        })
    }
}

/// An initialized axis-aligned box ready for intersection.
#[derive(Debug, Clone)]
pub struct AxisBox {
    /// Closed extent along X, Y and Z
    extents: [Interval; 3],
    material: Arc<Material>,
}

impl AxisBox {
    pub fn min(&self) -> Vec3 {
        Vec3::new(self.extents[0].min, self.extents[1].min, self.extents[2].min)
    }

    pub fn max(&self) -> Vec3 {
        Vec3::new(self.extents[0].max, self.extents[1].max, self.extents[2].max)
    }
}

impl Hittable for AxisBox {
    // Each of the six faces lies in a plane `coord[axis] = k`. Solving
    // origin[axis] + t * direction[axis] = k gives t; the hit is on the face
    // if the other two coordinates fall inside the box there. The nearest
    // such face wins and reports its fixed outward normal.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut window = ray_t;
        let mut nearest: Option<(f64, Vec3)> = None;

        for axis in 0..3 {
            let d = ray.direction[axis];
            if d == 0.0 {
                // Parallel to both faces on this axis
                continue;
            }

            let (b, c) = ((axis + 1) % 3, (axis + 2) % 3);
            let faces = [
                (self.extents[axis].min, -Vec3::AXES[axis]),
                (self.extents[axis].max, Vec3::AXES[axis]),
            ];

            for (k, outward) in faces {
                let t = (k - ray.origin[axis]) / d;
                if !window.surrounds(t) {
                    continue;
                }
                let p = ray.at(t);
                if self.extents[b].contains(p[b]) && self.extents[c].contains(p[c]) {
                    window = window.with_max(t);
                    nearest = Some((t, outward));
                }
            }
        }

        let (t, normal) = nearest?;
        Some(HitRecord {
            t,
            p: ray.at(t),
            normal,
            material: &self.material,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, MIN_DISTANCE};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn registry() -> MaterialRegistry {
        let mut materials = MaterialRegistry::new();
        materials.insert("white".into(), Arc::new(Material::new(Color::WHITE, 1.0, 0.0)));
        materials
    }

    fn unit_cube() -> AxisBox {
        BoxDesc::new(Vec3::ZERO, Vec3::ONE, "white")
            .initialize(&registry())
            .unwrap()
    }

    #[test]
    fn test_hit_each_face_head_on() {
        let cube = unit_cube();
        let center = Vec3::splat(0.5);

        for axis in 0..3 {
            for sign in [-1.0, 1.0] {
                let outward = Vec3::AXES[axis] * sign;
                let origin = center + outward * 3.0;
                let rec = cube.intersect(&Ray::new(origin, -outward)).unwrap();

                assert!((rec.t - 2.5).abs() < 1e-12, "axis {axis} sign {sign}: t = {}", rec.t);
                assert_eq!(rec.normal, outward);
                assert!((rec.p - (center + outward * 0.5)).length() < 1e-12);
            }
        }
    }

    #[test]
    fn test_miss() {
        let cube = unit_cube();
        let ray = Ray::new(Vec3::new(2.0, 2.0, -3.0), Vec3::Z);
        assert!(cube.intersect(&ray).is_none());

        // Pointing away
        let ray = Ray::new(Vec3::new(0.5, 0.5, -3.0), Vec3::NEG_Z);
        assert!(cube.intersect(&ray).is_none());
    }

    #[test]
    fn test_from_inside_hits_far_face_with_outward_normal() {
        let cube = unit_cube();
        let ray = Ray::new(Vec3::splat(0.5), Vec3::X);
        let rec = cube.intersect(&ray).unwrap();
        assert!((rec.t - 0.5).abs() < 1e-12);
        assert_eq!(rec.normal, Vec3::X);
    }

    #[test]
    fn test_origin_on_face_ignores_that_face() {
        let cube = unit_cube();
        // Start on the -Z face pointing in: the only valid hit is the +Z face
        let ray = Ray::new(Vec3::new(0.5, 0.5, 0.0), Vec3::Z);
        let rec = cube.intersect(&ray).unwrap();
        assert!((rec.t - 1.0).abs() < 1e-12);
        assert!(rec.t > MIN_DISTANCE);
        assert_eq!(rec.normal, Vec3::Z);
    }

    #[test]
    fn test_window_limits_hits() {
        let cube = unit_cube();
        let ray = Ray::new(Vec3::new(0.5, 0.5, -3.0), Vec3::Z);
        assert!(cube.hit(&ray, Interval::new(MIN_DISTANCE, 2.9)).is_none());
        assert!(cube.hit(&ray, Interval::new(MIN_DISTANCE, 3.1)).is_some());
    }

    #[test]
    fn test_random_hits_lie_on_matching_face() {
        let cube = BoxDesc::new(Vec3::new(-1.0, 0.5, 2.0), Vec3::new(2.0, 0.5, 3.0), "white")
            .initialize(&registry())
            .unwrap();
        let (lo, hi) = (cube.min(), cube.max());
        let mut rng = StdRng::seed_from_u64(42);
        let mut hits = 0;

        for _ in 0..5000 {
            let origin = Vec3::new(
                rng.gen_range(-6.0..6.0),
                rng.gen_range(-6.0..6.0),
                rng.gen_range(-6.0..10.0),
            );
            // Aim near the box so most rays hit; some still graze past
            let target = Vec3::new(
                rng.gen_range(lo.x - 0.5..hi.x + 0.5),
                rng.gen_range(lo.y - 0.5..hi.y + 0.5),
                rng.gen_range(lo.z - 0.5..hi.z + 0.5),
            );
            let direction = target - origin;
            if direction.length_squared() < 1e-6 {
                continue;
            }

            let Some(rec) = cube.intersect(&Ray::new(origin, direction)) else {
                continue;
            };
            hits += 1;

            assert!(rec.t > MIN_DISTANCE);
            let axis = (0..3)
                .find(|&a| rec.normal[a] != 0.0)
                .expect("normal must be an axis vector");
            assert_eq!(rec.normal.length(), 1.0);

            let face = if rec.normal[axis] > 0.0 { hi[axis] } else { lo[axis] };
            assert!((rec.p[axis] - face).abs() < 1e-9, "point {} off face", rec.p);
            for other in (0..3).filter(|&a| a != axis) {
                assert!(rec.p[other] >= lo[other] - 1e-9 && rec.p[other] <= hi[other] + 1e-9);
            }
        }

        assert!(hits > 1000, "only {hits} rays hit the box");
    }

    #[test]
    fn test_centered() {
        let cube = BoxDesc::centered(Vec3::ZERO, Vec3::splat(2.0), "white")
            .initialize(&registry())
            .unwrap();
        assert_eq!(cube.min(), Vec3::splat(-1.0));
        assert_eq!(cube.max(), Vec3::splat(1.0));
    }

    #[test]
    fn test_invalid_extent() {
        let err = BoxDesc::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 1.0), "white")
            .initialize(&registry())
            .unwrap_err();
        assert!(matches!(err, SceneError::InvalidExtent(_)));
    }

    #[test]
    fn test_missing_material() {
        let err = BoxDesc::new(Vec3::ZERO, Vec3::ONE, "gold")
            .initialize(&registry())
            .unwrap_err();
        assert!(matches!(err, SceneError::MaterialNotFound(name) if name == "gold"));
    }
}
