//! Frosty core - the scene model and its shading.
//!
//! This crate provides:
//!
//! - **Scene description types**: `Camera`, `Material`, `PointLight`, `Color`
//! - **Primitives**: `Plane` and `AxisBox`, behind the `Hittable` protocol
//! - **Shading**: `Scene::trace` resolves the nearest hit and lights it
//! - **Loading**: JSON scene files via `load_scene`
//!
//! # Example
//!
//! ```ignore
//! use frosty_core::load_scene;
//!
//! let mut scene = load_scene("scene.json")?;
//! scene.initialize()?;
//! let color = scene.trace(&ray);
//! ```

pub mod axis_box;
pub mod camera;
pub mod color;
pub mod error;
pub mod hittable;
pub mod light;
pub mod loader;
pub mod material;
pub mod plane;
pub mod scene;

// Re-export commonly used types
pub use axis_box::{AxisBox, BoxDesc};
pub use camera::Camera;
pub use color::Color;
pub use error::{SceneError, SceneResult};
pub use hittable::{HitRecord, Hittable, HittableList, MIN_DISTANCE};
pub use light::PointLight;
pub use loader::{load_scene, load_scene_from_str};
pub use material::{Material, MaterialRegistry};
pub use plane::{Plane, PlaneDesc, PlaneShape};
pub use scene::Scene;
