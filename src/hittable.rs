use crate::geometry::InstanceId;
use crate::math::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitRecord {
    pub time: f32,
    pub point: Point3,
    /// unit length
    pub normal: Vec3,
    /// index of the struck object within the world, in insertion order
    pub instance_id: InstanceId,
}

impl HitRecord {
    pub fn new(time: f32, point: Point3, normal: Vec3, instance_id: InstanceId) -> Self {
        HitRecord {
            time,
            point,
            normal,
            instance_id,
        }
    }
}

pub trait Hittable {
    /// Closest intersection strictly inside the open interval `(t0, t1)`.
    fn hit(&self, r: Ray, t0: f32, t1: f32) -> Option<HitRecord>;
}
