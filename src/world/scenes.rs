use super::{Light, Sphere, World};
use crate::math::*;

/// Three spheres under a single full-strength ambient light, so each renders as its flat base color.
pub fn flat_spheres() -> World {
    World::new(
        vec![
            Sphere::new(1.0, Point3::new(0.0, -1.0, 3.0), Color::new(255, 0, 0), None, 0),
            Sphere::new(1.0, Point3::new(2.0, 0.0, 4.0), Color::new(0, 0, 255), None, 1),
            Sphere::new(1.0, Point3::new(-2.0, 0.0, 4.0), Color::new(0, 255, 0), None, 2),
        ],
        vec![Light::ambient(1.0)],
    )
}

/// The same three spheres resting on a very large yellow one, lit by one light of each kind.
pub fn lit_spheres() -> World {
    World::new(
        vec![
            Sphere::new(
                1.0,
                Point3::new(0.0, -1.0, 3.0),
                Color::new(255, 0, 0),
                Some(500.0),
                0,
            ),
            Sphere::new(
                1.0,
                Point3::new(2.0, 0.0, 4.0),
                Color::new(0, 0, 255),
                Some(500.0),
                1,
            ),
            Sphere::new(
                1.0,
                Point3::new(-2.0, 0.0, 4.0),
                Color::new(0, 255, 0),
                Some(10.0),
                2,
            ),
            Sphere::new(
                5000.0,
                Point3::new(0.0, -5001.0, 0.0),
                Color::new(255, 255, 0),
                Some(1000.0),
                3,
            ),
        ],
        vec![
            Light::ambient(0.2),
            Light::point(0.6, Point3::new(2.0, 1.0, 0.0)),
            Light::directional(0.2, Vec3::new(1.0, 4.0, 4.0)),
        ],
    )
}
