use crate::math::Color;

/// A finished pixel in screen coordinates, where (0, 0) is the center of the
/// screen and y grows upward.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pixel {
    pub x: i32,
    pub y: i32,
    pub color: Color,
}

impl Pixel {
    pub const fn new(x: i32, y: i32, color: Color) -> Self {
        Pixel { x, y, color }
    }

    /// Device coordinates for a `width` by `height` surface: recentered horizontally and flipped vertically.
    /// Screen row `-height / 2` lands on device row `height`, one past the last row of a buffer.
    pub fn to_device(&self, width: usize, height: usize) -> (i64, i64) {
        (
            self.x as i64 + (width / 2) as i64,
            (height / 2) as i64 - self.y as i64,
        )
    }
}

/// Receives pixels as they are produced by a renderer.
pub trait DisplaySink {
    fn draw_pixel(&mut self, pixel: Pixel);
}

/// Records every pixel event in emission order.
impl DisplaySink for Vec<Pixel> {
    fn draw_pixel(&mut self, pixel: Pixel) {
        self.push(pixel);
    }
}
