use crate::math::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Light {
    /// contributes a constant term everywhere
    Ambient { intensity: f32 },
    Point { intensity: f32, position: Point3 },
    /// `direction` points from the surface toward the light
    Directional { intensity: f32, direction: Vec3 },
}

impl Light {
    pub fn ambient(intensity: f32) -> Self {
        debug_assert!(intensity >= 0.0);
        Light::Ambient { intensity }
    }

    pub fn point(intensity: f32, position: Point3) -> Self {
        debug_assert!(intensity >= 0.0);
        Light::Point {
            intensity,
            position,
        }
    }

    pub fn directional(intensity: f32, direction: Vec3) -> Self {
        debug_assert!(intensity >= 0.0);
        Light::Directional {
            intensity,
            direction,
        }
    }

    pub fn intensity(&self) -> f32 {
        match self {
            Light::Ambient { intensity }
            | Light::Point { intensity, .. }
            | Light::Directional { intensity, .. } => *intensity,
        }
    }

    /// Unnormalized vector from `point` toward the light, or `None` for ambient lights.
    pub fn direction_from(&self, point: Point3) -> Option<Vec3> {
        match self {
            Light::Ambient { .. } => None,
            Light::Point { position, .. } => Some(vector_between(point, *position)),
            Light::Directional { direction, .. } => Some(*direction),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_direction_from() {
        let p = Point3::new(1.0, 1.0, 1.0);
        assert_eq!(Light::ambient(0.2).direction_from(p), None);
        assert_eq!(
            Light::point(0.6, Point3::new(2.0, 1.0, 0.0)).direction_from(p),
            Some(Vec3::new(1.0, 0.0, -1.0))
        );
        // independent of the shaded point
        let directional = Light::directional(0.2, Vec3::new(1.0, 4.0, 4.0));
        assert_eq!(
            directional.direction_from(p),
            directional.direction_from(Point3::ORIGIN)
        );
        assert_eq!(directional.intensity(), 0.2);
    }
}
