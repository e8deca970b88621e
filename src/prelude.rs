pub use crate::camera::ViewportCamera;
pub use crate::geometry::{InstanceId, Sphere};
pub use crate::hittable::{HitRecord, Hittable};
pub use crate::integrator::{
    calculate_light, trace_ray, PhongIntegrator, SamplerIntegrator, CAMERA_RAY_T_MAX,
    CAMERA_RAY_T_MIN,
};
pub use crate::math::*;
pub use crate::profile::Profile;
pub use crate::renderer::{render_scene, DisplaySink, Film, Pixel, Renderer};
pub use crate::rgb_to_u32;
pub use crate::world::{Light, World};
