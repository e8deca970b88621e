use crate::geometry::{InstanceId, Sphere};
use crate::math::*;
use crate::parsing::{Point3Data, Vec3Data};
use crate::world::Light;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct SphereData {
    pub center: Point3Data,
    pub radius: f32,
    pub color: [u8; 3],
    /// Phong exponent. Omitted or negative (conventionally -1) means no highlight.
    pub specular: Option<f32>,
}

impl SphereData {
    pub fn parse(self, instance_id: InstanceId) -> Result<Sphere> {
        if !(self.radius > 0.0) {
            bail!(
                "sphere {} has non-positive radius {}",
                instance_id,
                self.radius
            );
        }
        let specular = self.specular.filter(|&exponent| exponent >= 0.0);
        if specular.is_none() && self.specular.is_some() {
            debug!("sphere {} has specular disabled", instance_id);
        }
        Ok(Sphere::new(
            self.radius,
            Point3::from(self.center),
            Color::from(self.color),
            specular,
            instance_id,
        ))
    }
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum LightData {
    Ambient { intensity: f32 },
    Point { intensity: f32, position: Point3Data },
    Directional { intensity: f32, direction: Vec3Data },
}

impl LightData {
    pub fn parse(self) -> Result<Light> {
        let light = match self {
            LightData::Ambient { intensity } => Light::Ambient { intensity },
            LightData::Point {
                intensity,
                position,
            } => Light::Point {
                intensity,
                position: Point3::from(position),
            },
            LightData::Directional {
                intensity,
                direction,
            } => {
                if direction == [0.0; 3] {
                    warn!("directional light has a zero direction and never illuminates");
                }
                Light::Directional {
                    intensity,
                    direction: Vec3::from(direction),
                }
            }
        };
        if !(light.intensity() >= 0.0) {
            bail!("light intensity must be non-negative, got {}", light.intensity());
        }
        Ok(light)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_sphere_specular_sentinel() {
        let mut data = SphereData {
            center: [0.0, -1.0, 3.0],
            radius: 1.0,
            color: [255, 0, 0],
            specular: Some(-1.0),
        };
        assert_eq!(data.parse(0).unwrap().specular, None);
        data.specular = None;
        assert_eq!(data.parse(0).unwrap().specular, None);
        data.specular = Some(500.0);
        let sphere = data.parse(4).unwrap();
        assert_eq!(sphere.specular, Some(500.0));
        assert_eq!(sphere.instance_id, 4);
        assert_eq!(sphere.color, Color::new(255, 0, 0));
    }

    #[test]
    fn test_sphere_radius_validation() {
        for radius in [0.0, -1.0, f32::NAN] {
            let data = SphereData {
                center: [0.0; 3],
                radius,
                color: [1, 2, 3],
                specular: None,
            };
            assert!(data.parse(0).is_err(), "{}", radius);
        }
    }

    #[test]
    fn test_light_validation() {
        assert!(LightData::Ambient { intensity: -0.1 }.parse().is_err());
        let light = LightData::Point {
            intensity: 0.6,
            position: [2.0, 1.0, 0.0],
        }
        .parse()
        .unwrap();
        assert_eq!(light, Light::point(0.6, Point3::new(2.0, 1.0, 0.0)));
    }
}
