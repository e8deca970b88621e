mod color;
mod point;
mod vec;

pub use color::Color;
pub use point::{vector_between, Point3};
pub use std::f32::INFINITY;
pub use vec::Vec3;

pub fn dot(u: Vec3, v: Vec3) -> f32 {
    u * v
}

pub fn magnitude(v: Vec3) -> f32 {
    v.norm()
}

pub fn normalize(v: Vec3) -> Vec3 {
    v.normalized()
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vec3,
}

impl Ray {
    pub const fn new(origin: Point3, direction: Vec3) -> Self {
        Ray { origin, direction }
    }

    pub fn point_at_parameter(self, time: f32) -> Point3 {
        self.origin + self.direction * time
    }
}
