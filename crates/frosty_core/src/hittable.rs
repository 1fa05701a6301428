//! Hittable trait and HitRecord for ray-object intersection.

use std::fmt;

use frosty_math::{Interval, Ray, Vec3};

use crate::Material;

/// Smallest ray parameter that counts as a hit.
///
/// Rejects self-intersection at a ray's own origin (shadow rays start on a
/// surface) and anything behind the vantage point.
pub const MIN_DISTANCE: f64 = 1e-4;

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Parameter t where the intersection occurs
    pub t: f64,
    /// Point of intersection, `ray.at(t)`
    pub p: Vec3,
    /// Unit surface normal at the intersection
    pub normal: Vec3,
    /// Material of the surface that was hit
    pub material: &'a Material,
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync + fmt::Debug {
    /// Find the nearest intersection with `t` strictly inside `ray_t`.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>>;

    /// Nearest intersection anywhere beyond `MIN_DISTANCE`.
    fn intersect(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        self.hit(ray, Interval::from_min(MIN_DISTANCE))
    }
}

/// An ordered list of hittable objects, searched exhaustively.
#[derive(Debug, Default)]
pub struct HittableList {
    objects: Vec<Box<dyn Hittable>>,
}

impl HittableList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object to the end of the list.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    pub fn clear(&mut self) {
        self.objects.clear();
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// True if any object is hit inside `ray_t`.
    pub fn any_hit(&self, ray: &Ray, ray_t: Interval) -> bool {
        self.objects.iter().any(|o| o.hit(ray, ray_t).is_some())
    }
}

impl Hittable for HittableList {
    /// Ties keep the earlier object, so results follow declaration order.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest = None;
        let mut window = ray_t;

        for object in &self.objects {
            if let Some(rec) = object.hit(ray, window) {
                window = window.with_max(rec.t);
                closest = Some(rec);
            }
        }

        closest
    }
}
