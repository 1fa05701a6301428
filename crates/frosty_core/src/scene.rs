//! The scene: camera, lights, materials and primitives, plus shading.
//!
//! A scene is loaded, initialized exactly once, and then only read. After
//! `initialize` it is safe to share across any number of render workers.

use std::sync::Arc;

use frosty_math::{Interval, Ray};
use serde::Deserialize;

use crate::axis_box::BoxDesc;
use crate::hittable::{HitRecord, Hittable, HittableList, MIN_DISTANCE};
use crate::material::{Material, MaterialRegistry};
use crate::plane::PlaneDesc;
use crate::{Camera, Color, PointLight, SceneResult};

/// A complete scene description.
#[derive(Debug, Deserialize)]
pub struct Scene {
    pub camera: Camera,

    /// Ambient light color
    #[serde(default)]
    pub ambient: Color,

    #[serde(default)]
    pub lights: Vec<PointLight>,

    #[serde(default)]
    pub materials: MaterialRegistry,

    #[serde(default)]
    pub planes: Vec<PlaneDesc>,

    #[serde(default, alias = "rprisms")]
    pub boxes: Vec<BoxDesc>,

    /// Flattened primitives, built by `initialize`
    #[serde(skip)]
    objects: HittableList,

    #[serde(skip)]
    initialized: bool,
}

impl Scene {
    /// Create an empty scene viewed through `camera`.
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            ambient: Color::BLACK,
            lights: Vec::new(),
            materials: MaterialRegistry::new(),
            planes: Vec::new(),
            boxes: Vec::new(),
            objects: HittableList::new(),
            initialized: false,
        }
    }

    pub fn with_ambient(mut self, ambient: Color) -> Self {
        self.ambient = ambient;
        self
    }

    pub fn add_light(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    pub fn add_material(&mut self, name: impl Into<String>, material: Material) {
        self.materials.insert(name.into(), Arc::new(material));
    }

    pub fn add_plane(&mut self, plane: PlaneDesc) {
        self.planes.push(plane);
    }

    pub fn add_box(&mut self, axis_box: BoxDesc) {
        self.boxes.push(axis_box);
    }

    /// Resolve every primitive's material and build the flattened object
    /// list (planes first, then boxes, each in declaration order).
    ///
    /// Fails on a material with a negative weight, or on the first primitive
    /// whose material is missing or whose geometry is degenerate; the scene
    /// is left uninitialized in that case.
    pub fn initialize(&mut self) -> SceneResult<()> {
        self.initialized = false;
        self.objects.clear();

        let mut names: Vec<&String> = self.materials.keys().collect();
        names.sort();
        for name in names {
            self.materials[name].validate(name)?;
        }

        let mut objects = HittableList::new();
        for plane in &self.planes {
            objects.add(Box::new(plane.initialize(&self.materials)?));
        }
        for axis_box in &self.boxes {
            objects.add(Box::new(axis_box.initialize(&self.materials)?));
        }

        log::debug!(
            "Initialized {} primitives ({} planes, {} boxes), {} lights, {} materials",
            objects.len(),
            self.planes.len(),
            self.boxes.len(),
            self.lights.len(),
            self.materials.len()
        );

        self.objects = objects;
        self.initialized = true;
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Number of primitives in the flattened list.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Nearest primitive hit by `ray`, if any.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        self.objects.intersect(ray)
    }

    /// Compute the color seen along `ray`. Misses are black.
    pub fn trace(&self, ray: &Ray) -> Color {
        match self.nearest_hit(ray) {
            Some(rec) => self.shade(&rec),
            None => Color::BLACK,
        }
    }

    /// Local illumination at a hit: ambient plus unshadowed Lambertian
    /// diffuse from every point light, accumulated in declaration order.
    fn shade(&self, rec: &HitRecord<'_>) -> Color {
        let material = rec.material;
        let mut color = self.ambient * material.color * material.ka;

        for light in &self.lights {
            let to_light = light.pos - rec.p;

            // Light is behind the surface
            if to_light.dot(rec.normal) < 0.0 {
                continue;
            }

            let distance = to_light.length();
            if distance <= MIN_DISTANCE {
                // Light sits on the surface itself
                continue;
            }
            let direction = to_light / distance;

            let shadow_ray = Ray::new(rec.p, direction);
            let window = Interval::new(MIN_DISTANCE, distance - MIN_DISTANCE);
            if self.objects.any_hit(&shadow_ray, window) {
                continue;
            }

            let irradiance = light.color * (1.0 / (distance * distance));
            let lambert = direction.dot(rec.normal) * material.kd;
            color += irradiance * material.color * lambert;
        }

        color
    }
}
