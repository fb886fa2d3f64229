//! Cellray Renderer - CPU ray tracing into a character grid.
//!
//! A brute-force ray caster: every sub-sample ray is tested against every
//! scene object, shaded with ambient + directional diffuse + hard shadows,
//! and only cells whose color changed since the previous frame are emitted.

mod collision;
mod frame;
mod hittable;
mod mesh;
mod renderer;
mod shapes;
mod sphere;
mod triangle;

pub use collision::{check_collision, colliding_pairs, get_bounding_sphere};
pub use frame::{CellUpdate, DisplaySink, FrameBuffer};
pub use hittable::{Intersection, Scene, SceneObject};
pub use mesh::Mesh;
pub use renderer::{
    camera_ray, in_shadow, render_frame, trace, FrameStats, RenderError, Renderer,
    SHADOW_ATTENUATION, SHADOW_BIAS,
};
pub use shapes::{cube, demo_scene, ground, pyramid};
pub use sphere::Sphere;
pub use triangle::Triangle;

/// Re-export common math and data types
pub use cellray_core::{Color, RenderSettings, Rgb8, SceneError, ShadowMode};
pub use cellray_math::{BoundingSphere, Ray, Vec3};
