mod light;
pub mod scenes;

pub use light::Light;

pub use crate::geometry::*;
use crate::hittable::*;
use crate::math::*;

/// Immutable scene description: spheres and lights, both in a fixed order.
/// Earlier spheres win when two surfaces are struck at exactly the same distance.
#[derive(Clone, Debug, Default)]
pub struct World {
    pub instances: Vec<Sphere>,
    pub lights: Vec<Light>,
}

impl World {
    pub fn new(mut instances: Vec<Sphere>, lights: Vec<Light>) -> Self {
        for (id, instance) in instances.iter_mut().enumerate() {
            if instance.instance_id != id {
                debug!(
                    "reassigning instance id {} to {} to match world order",
                    instance.instance_id, id
                );
                instance.instance_id = id;
            }
        }
        if lights.is_empty() {
            warn!("the world has no lights, every surface will render black");
        }
        World { instances, lights }
    }

    pub fn get_primitive(&self, index: InstanceId) -> &Sphere {
        &self.instances[index]
    }

    /// Closest hit across all instances, with the running closest distance
    /// used as the far bound for each subsequent instance.
    pub fn hit(&self, r: Ray, t0: f32, t1: f32) -> Option<HitRecord> {
        self.hit_counting(r, t0, t1, &mut 0)
    }

    pub(crate) fn hit_counting(
        &self,
        r: Ray,
        t0: f32,
        t1: f32,
        intersection_tests: &mut usize,
    ) -> Option<HitRecord> {
        let mut closest_so_far = t1;
        let mut hit_record = None;
        for (index, instance) in self.instances.iter().enumerate() {
            *intersection_tests += 1;
            if let Some(mut hit) = instance.hit(r, t0, closest_so_far) {
                closest_so_far = hit.time;
                // position in this world, whatever id the sphere carries
                hit.instance_id = index;
                hit_record = Some(hit);
            }
        }
        hit_record
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_closest_hit_wins() {
        let world = World::new(
            vec![
                Sphere::new(1.0, Point3::new(0.0, 0.0, 10.0), Color::new(0, 0, 255), None, 0),
                Sphere::new(1.0, Point3::new(0.0, 0.0, 5.0), Color::new(255, 0, 0), None, 1),
            ],
            vec![Light::ambient(1.0)],
        );
        let hit = world
            .hit(Ray::new(Point3::ORIGIN, Vec3::Z), 1.0, INFINITY)
            .unwrap();
        assert_eq!(hit.instance_id, 1);
        assert_eq!(hit.time, 4.0);
    }

    #[test]
    fn test_ties_go_to_first_instance() {
        let center = Point3::new(0.0, 0.0, 4.0);
        let world = World::new(
            vec![
                Sphere::new(1.0, center, Color::new(0, 255, 0), None, 0),
                Sphere::new(1.0, center, Color::new(0, 0, 255), None, 0),
            ],
            vec![],
        );
        // instance ids follow insertion order
        assert_eq!(world.get_primitive(1).instance_id, 1);
        let hit = world
            .hit(Ray::new(Point3::ORIGIN, Vec3::Z), 1.0, INFINITY)
            .unwrap();
        assert_eq!(hit.instance_id, 0);
    }

    #[test]
    fn test_hit_reports_position_not_stored_id() {
        // built directly, so stored ids are never reassigned
        let world = World {
            instances: vec![
                Sphere::new(1.0, Point3::new(0.0, 0.0, 5.0), Color::new(255, 0, 0), None, 1),
                Sphere::new(1.0, Point3::new(0.0, 0.0, 50.0), Color::new(0, 0, 255), None, 0),
            ],
            lights: vec![Light::ambient(1.0)],
        };
        let hit = world
            .hit(Ray::new(Point3::ORIGIN, Vec3::Z), 1.0, INFINITY)
            .unwrap();
        assert_eq!(hit.instance_id, 0);
        assert_eq!(world.get_primitive(hit.instance_id).color, Color::new(255, 0, 0));
    }

    #[test]
    fn test_empty_world_never_hits() {
        let world = World::default();
        let mut tests = 0;
        assert!(world
            .hit_counting(Ray::new(Point3::ORIGIN, Vec3::Z), 1.0, INFINITY, &mut tests)
            .is_none());
        assert_eq!(tests, 0);
    }
}
