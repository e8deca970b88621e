use crate::geometry::InstanceId;
use crate::hittable::{HitRecord, Hittable};
use crate::math::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    pub radius: f32,
    pub origin: Point3,
    pub color: Color,
    /// Phong shininess. `None` means the surface has no specular highlight.
    pub specular: Option<f32>,
    pub instance_id: InstanceId,
}

impl Sphere {
    pub fn new(
        radius: f32,
        origin: Point3,
        color: Color,
        specular: Option<f32>,
        instance_id: InstanceId,
    ) -> Sphere {
        debug_assert!(radius > 0.0, "sphere radius must be positive, got {}", radius);
        Sphere {
            radius,
            origin,
            color,
            specular,
            instance_id,
        }
    }

    /// Solves |o + t*d - center| = radius for t.
    /// Returns both roots as (+, -), or `None` when the ray misses entirely.
    /// A tangent ray yields a double root and counts as a hit.
    pub fn intersect(&self, r: Ray) -> Option<(f32, f32)> {
        let oc: Vec3 = vector_between(self.origin, r.origin);
        let a = r.direction * r.direction;
        debug_assert!(a > 0.0, "zero length ray direction {:?}", r.direction);
        let b = 2.0 * (oc * r.direction);
        let c = oc * oc - self.radius * self.radius;
        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }
        let discriminant_sqrt = discriminant.sqrt();
        Some((
            (-b + discriminant_sqrt) / (2.0 * a),
            (-b - discriminant_sqrt) / (2.0 * a),
        ))
    }

    /// Outward unit normal at a point on the surface.
    pub fn normal_at(&self, point: Point3) -> Vec3 {
        vector_between(self.origin, point).normalized()
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: Ray, t0: f32, t1: f32) -> Option<HitRecord> {
        let (t_plus, t_minus) = self.intersect(r)?;
        let mut closest: Option<f32> = None;
        for time in [t_plus, t_minus] {
            if time > t0 && time < t1 && closest.map_or(true, |c| time < c) {
                closest = Some(time);
            }
        }
        closest.map(|time| {
            let point = r.point_at_parameter(time);
            HitRecord::new(time, point, self.normal_at(point), self.instance_id)
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn unit_sphere_at(origin: Point3) -> Sphere {
        Sphere::new(1.0, origin, Color::new(255, 0, 0), None, 0)
    }

    #[test]
    fn test_intersect_through_center() {
        let sphere = unit_sphere_at(Point3::new(0.0, 0.0, 5.0));
        let r = Ray::new(Point3::ORIGIN, Vec3::Z);
        let (t1, t2) = sphere.intersect(r).unwrap();
        assert_eq!((t1, t2), (6.0, 4.0));
    }

    #[test]
    fn test_roots_symmetric_about_foot_of_perpendicular() {
        let center = Point3::new(1.0, 2.0, 6.0);
        let sphere = Sphere::new(2.5, center, Color::WHITE, Some(10.0), 0);
        // unnormalized direction aimed at the center
        let origin = Point3::new(-1.0, 0.5, 0.0);
        let direction = vector_between(origin, center) * 0.5;
        let (t1, t2) = sphere.intersect(Ray::new(origin, direction)).unwrap();

        let foot = (vector_between(origin, center) * direction) / (direction * direction);
        assert!(((t1 + t2) / 2.0 - foot).abs() < 1e-4, "{} {} {}", t1, t2, foot);
        assert!(t1 > t2);
    }

    #[test]
    fn test_intersect_miss() {
        let sphere = unit_sphere_at(Point3::new(0.0, 3.0, 5.0));
        let r = Ray::new(Point3::ORIGIN, Vec3::Z);
        assert_eq!(sphere.intersect(r), None);
        assert!(sphere.hit(r, 1.0, INFINITY).is_none());
    }

    #[test]
    fn test_tangent_is_a_hit() {
        let sphere = unit_sphere_at(Point3::new(0.0, -1.0, 3.0));
        let r = Ray::new(Point3::ORIGIN, Vec3::Z);
        let (t1, t2) = sphere.intersect(r).unwrap();
        assert_eq!(t1, 3.0);
        assert_eq!(t2, 3.0);
        let hit = sphere.hit(r, 1.0, INFINITY).unwrap();
        assert_eq!(hit.time, 3.0);
        assert_eq!(hit.normal, Vec3::Y);
    }

    #[test]
    fn test_hit_respects_interval() {
        let sphere = unit_sphere_at(Point3::new(0.0, 0.0, 2.0));
        let r = Ray::new(Point3::ORIGIN, Vec3::Z);
        // near root at t = 1 is excluded by the open interval, far root remains
        let hit = sphere.hit(r, 1.0, INFINITY).unwrap();
        assert_eq!(hit.time, 3.0);
        assert_eq!(hit.normal, Vec3::Z);
        // normal stays unit length for a large sphere
        let big = Sphere::new(5000.0, Point3::new(0.0, -5001.0, 0.0), Color::WHITE, None, 0);
        let hit = big.hit(Ray::new(Point3::ORIGIN, -Vec3::Y), 0.0, INFINITY).unwrap();
        assert!((hit.time - 1.0).abs() < 1e-2, "{}", hit.time);
        assert!((hit.normal.norm() - 1.0).abs() < 1e-6);
        assert!(sphere.hit(r, 1.0, 3.0).is_none());
        // origin inside the sphere
        let inside = Ray::new(Point3::new(0.0, 0.0, 2.0), Vec3::Z);
        assert_eq!(sphere.hit(inside, 0.0, INFINITY).unwrap().time, 1.0);
    }
}
