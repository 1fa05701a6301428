//! Infinite plane primitive.

use std::sync::Arc;

use frosty_math::{Interval, Ray, Vec3};
use serde::Deserialize;

use crate::hittable::{HitRecord, Hittable};
use crate::material::{Material, MaterialRegistry};
use crate::{SceneError, SceneResult};

/// How a plane is written in a scene file.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PlaneShape {
    /// Three points on the plane; the normal is `(v2 - v1) x (v3 - v1)`.
    Vertices { v1: Vec3, v2: Vec3, v3: Vec3 },
    /// A point on the plane and a normal.
    PointNormal { point: Vec3, normal: Vec3 },
}

/// A plane as loaded, with its material still referenced by name.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlaneDesc {
    #[serde(flatten)]
    pub shape: PlaneShape,
    pub mat: String,
}

impl PlaneDesc {
    pub fn from_vertices(v1: Vec3, v2: Vec3, v3: Vec3, mat: impl Into<String>) -> Self {
        Self {
            shape: PlaneShape::Vertices { v1, v2, v3 },
            mat: mat.into(),
        }
    }

    pub fn from_point_normal(point: Vec3, normal: Vec3, mat: impl Into<String>) -> Self {
        Self {
            shape: PlaneShape::PointNormal { point, normal },
            mat: mat.into(),
        }
    }

    /// Resolve the material and derive the unit normal.
    pub fn initialize(&self, materials: &MaterialRegistry) -> SceneResult<Plane> {
        let material = materials
            .get(&self.mat)
            .cloned()
            .ok_or_else(|| SceneError::MaterialNotFound(self.mat.clone()))?;

        let (point, normal) = match self.shape {
            PlaneShape::Vertices { v1, v2, v3 } => (v1, (v2 - v1).cross(v3 - v1)),
            PlaneShape::PointNormal { point, normal } => (point, normal),
        };
        let normal = normal.try_normalize().ok_or(SceneError::DegeneratePlane)?;

        Ok(Plane {
            point,
            normal,
            material,
        })
    }
}

/// An initialized plane ready for intersection.
#[derive(Debug, Clone)]
pub struct Plane {
    point: Vec3,
    normal: Vec3,
    material: Arc<Material>,
}

impl Plane {
    pub fn point(&self) -> Vec3 {
        self.point
    }

    /// Unit normal, oriented as declared.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}

impl Hittable for Plane {
    // A point p is on the plane if normal . (p - q) = 0. Substituting
    // P(t) = origin + t * direction gives
    //
    //         normal . (q - origin)
    //     t = ---------------------
    //          direction . normal
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let denom = ray.direction.dot(self.normal);
        if denom == 0.0 {
            // Parallel to the plane
            return None;
        }

        let t = self.normal.dot(self.point - ray.origin) / denom;
        if !ray_t.surrounds(t) {
            return None;
        }

        // Hitting the back face: flip so the normal faces the ray's origin
        let normal = if denom > 0.0 { -self.normal } else { self.normal };

        Some(HitRecord {
            t,
            p: ray.at(t),
            normal,
            material: &self.material,
        })
    }
}
