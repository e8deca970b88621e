mod phong;

pub use phong::calculate_light;

use crate::math::*;
use crate::profile::Profile;
use crate::world::World;

/// Rays are only accepted past the projection plane, which sits one unit from the camera.
pub const CAMERA_RAY_T_MIN: f32 = 1.0;
pub const CAMERA_RAY_T_MAX: f32 = INFINITY;

pub trait SamplerIntegrator: Sync + Send {
    fn color(&self, camera_ray: Ray, profile: &mut Profile) -> Color;
}

/// Direct lighting with ambient, Lambertian diffuse, and Phong specular terms. No secondary rays.
#[derive(Copy, Clone)]
pub struct PhongIntegrator<'a> {
    pub world: &'a World,
    pub t_min: f32,
    pub t_max: f32,
}

impl<'a> PhongIntegrator<'a> {
    pub fn new(world: &'a World) -> Self {
        PhongIntegrator {
            world,
            t_min: CAMERA_RAY_T_MIN,
            t_max: CAMERA_RAY_T_MAX,
        }
    }

    pub fn with_bounds(world: &'a World, t_min: f32, t_max: f32) -> Self {
        PhongIntegrator {
            world,
            t_min,
            t_max,
        }
    }
}

impl SamplerIntegrator for PhongIntegrator<'_> {
    fn color(&self, camera_ray: Ray, profile: &mut Profile) -> Color {
        profile.camera_rays += 1;
        let hit = self.world.hit_counting(
            camera_ray,
            self.t_min,
            self.t_max,
            &mut profile.intersection_tests,
        );
        let Some(hit) = hit else {
            profile.background_hits += 1;
            return Color::BACKGROUND;
        };
        profile.object_hits += 1;

        let sphere = self.world.get_primitive(hit.instance_id);
        let view = -camera_ray.direction;
        let intensity = calculate_light(
            hit.point,
            hit.normal,
            &self.world.lights,
            view,
            sphere.specular,
        );
        trace!(
            "hit instance {} at t = {}, intensity {}",
            hit.instance_id,
            hit.time,
            intensity
        );
        sphere.color.scaled(intensity)
    }
}

/// Color seen along `origin + t * ray` for `t` in `(t_min, t_max)`.
pub fn trace_ray(origin: Point3, ray: Vec3, t_min: f32, t_max: f32, world: &World) -> Color {
    PhongIntegrator::with_bounds(world, t_min, t_max)
        .color(Ray::new(origin, ray), &mut Profile::default())
}
