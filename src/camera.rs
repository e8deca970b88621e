use crate::math::*;

/// Pinhole camera that projects screen pixels onto a fixed viewport rectangle.
///
/// The viewport lies in the plane `z = projection_distance` in world space and is
/// centered on the z axis; it does not move with the camera origin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewportCamera {
    pub origin: Point3,
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub projection_distance: f32,
    pub screen_width: usize,
    pub screen_height: usize,
}

impl ViewportCamera {
    pub fn new(
        origin: Point3,
        viewport_width: f32,
        viewport_height: f32,
        projection_distance: f32,
        screen_width: usize,
        screen_height: usize,
    ) -> Self {
        debug_assert!(screen_width > 0 && screen_height > 0);
        ViewportCamera {
            origin,
            viewport_width,
            viewport_height,
            projection_distance,
            screen_width,
            screen_height,
        }
    }

    /// Screen x coordinates covered by a render, `[-w/2, w/2)`.
    pub fn x_range(&self) -> std::ops::Range<i32> {
        let half = (self.screen_width / 2) as i32;
        -half..(self.screen_width as i32 - half)
    }

    /// Screen y coordinates covered by a render, `[-h/2, h/2)`.
    pub fn y_range(&self) -> std::ops::Range<i32> {
        let half = (self.screen_height / 2) as i32;
        -half..(self.screen_height as i32 - half)
    }

    pub fn viewport_point(&self, x: i32, y: i32) -> Point3 {
        Point3::new(
            x as f32 * (self.viewport_width / self.screen_width as f32),
            y as f32 * (self.viewport_height / self.screen_height as f32),
            self.projection_distance,
        )
    }

    pub fn get_ray(&self, x: i32, y: i32) -> Ray {
        Ray::new(
            self.origin,
            vector_between(self.origin, self.viewport_point(x, y)),
        )
    }
}
