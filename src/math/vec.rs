use std::ops::{Add, Div, Mul, Neg, Sub};

/// A displacement or direction. Not normalized unless produced by [`Vec3::normalized`].
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Vec3 {
        Vec3 { x, y, z }
    }
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const X: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    pub const Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);
}

// dot product
impl Mul for Vec3 {
    type Output = f32;
    fn mul(self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    fn mul(self, other: f32) -> Vec3 {
        Vec3::new(self.x * other, self.y * other, self.z * other)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;
    fn mul(self, other: Vec3) -> Vec3 {
        other * self
    }
}

impl Div<f32> for Vec3 {
    type Output = Vec3;
    fn div(self, other: f32) -> Vec3 {
        Vec3::new(self.x / other, self.y / other, self.z / other)
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, other: Vec3) -> Vec3 {
        self + (-other)
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(other: [f32; 3]) -> Vec3 {
        Vec3::new(other[0], other[1], other[2])
    }
}

impl Vec3 {
    pub fn dot(&self, other: Vec3) -> f32 {
        *self * other
    }

    pub fn norm_squared(&self) -> f32 {
        self.dot(*self)
    }

    pub fn norm(&self) -> f32 {
        self.norm_squared().sqrt()
    }

    /// Unit vector in the same direction. The zero vector has no direction and yields NaN components.
    pub fn normalized(&self) -> Self {
        let norm = self.norm();
        Vec3::new(self.x / norm, self.y / norm, self.z / norm)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_dot_and_norm() {
        let u = Vec3::new(1.0, 2.0, 3.0);
        let v = Vec3::new(-2.0, 0.5, 4.0);
        assert_eq!(u * v, -2.0 + 1.0 + 12.0);
        assert_eq!(u.dot(v), u * v);
        assert_eq!(Vec3::new(3.0, 4.0, 0.0).norm(), 5.0);
    }

    #[test]
    fn test_normalized() {
        let v = Vec3::new(0.0, -3.0, 4.0).normalized();
        assert!((v.norm() - 1.0).abs() < 1e-6);
        assert_eq!(v, Vec3::new(0.0, -0.6, 0.8));

        let degenerate = Vec3::ZERO.normalized();
        assert!(degenerate.x.is_nan() && degenerate.y.is_nan() && degenerate.z.is_nan());
    }

    #[test]
    fn test_operators() {
        let v = Vec3::new(1.0, -1.0, 2.0);
        assert_eq!(2.0 * v, v * 2.0);
        assert_eq!(v - v, Vec3::ZERO);
        assert_eq!(-v + v, Vec3::ZERO);
        assert_eq!(v / 2.0, Vec3::new(0.5, -0.5, 1.0));
    }
}
