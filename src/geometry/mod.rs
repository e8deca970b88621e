mod sphere;

pub use sphere::Sphere;

pub type InstanceId = usize;
