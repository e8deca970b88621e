use crate::math::*;
use crate::world::Light;

/// Sums the light arriving at `point` from every light, as a unitless intensity.
///
/// `normal` and `view` need not be normalized; both the diffuse and specular terms
/// divide by the relevant magnitudes. A light only contributes diffuse or specular
/// energy when it faces the surface (`normal · L > 0`). The result is not clamped,
/// so bright scenes can exceed 1.0.
///
/// `specular` of `None` disables the specular term for the surface.
pub fn calculate_light(
    point: Point3,
    normal: Vec3,
    lights: &[Light],
    view: Vec3,
    specular: Option<f32>,
) -> f32 {
    let mut intensity = 0.0;
    for light in lights {
        let light_intensity = light.intensity();
        let Some(to_light) = light.direction_from(point) else {
            // ambient
            intensity += light_intensity;
            continue;
        };

        let n_dot_l = normal * to_light;
        if n_dot_l <= 0.0 {
            // back facing, no diffuse and no specular either
            continue;
        }

        intensity += light_intensity * n_dot_l / (normal.norm() * to_light.norm());

        if let Some(exponent) = specular {
            let reflected = 2.0 * normal * n_dot_l - to_light;
            let r_dot_v = reflected * view;
            if r_dot_v > 0.0 {
                intensity +=
                    light_intensity * (r_dot_v / (reflected.norm() * view.norm())).powf(exponent);
            }
        }
    }
    intensity
}
