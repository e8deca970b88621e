/// An 8 bit per channel RGB color, as handed to a display sink.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    /// Returned for any ray that doesn't strike an object.
    pub const BACKGROUND: Color = Color::WHITE;

    /// Scales every channel by `factor`, rounding and saturating into `[0, 255]`.
    pub fn scaled(self, factor: f32) -> Color {
        #[inline(always)]
        fn channel(c: u8, factor: f32) -> u8 {
            let v = (c as f32 * factor).round();
            // NaN maps to 0 through the saturating cast
            v.clamp(0.0, 255.0) as u8
        }
        Color::new(
            channel(self.r, factor),
            channel(self.g, factor),
            channel(self.b, factor),
        )
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Color {
    fn from(other: [u8; 3]) -> Color {
        Color::new(other[0], other[1], other[2])
    }
}

impl From<Color> for u32 {
    fn from(c: Color) -> u32 {
        crate::rgb_to_u32(c.r, c.g, c.b)
    }
}
