use super::sink::{DisplaySink, Pixel};
use crate::math::Color;

#[derive(Clone, Debug, PartialEq)]
pub struct Vec2D<T> {
    pub buffer: Vec<T>,
    pub width: usize,
    pub height: usize,
}

impl<T: Copy> Vec2D<T> {
    pub fn new(width: usize, height: usize, fill_value: T) -> Vec2D<T> {
        Vec2D {
            buffer: vec![fill_value; width * height],
            width,
            height,
        }
    }
    pub fn at(&self, x: usize, y: usize) -> T {
        self.buffer[y * self.width + x]
    }
}

impl<T> Vec2D<T> {
    pub fn write_at(&mut self, x: usize, y: usize, value: T) {
        self.buffer[y * self.width + x] = value
    }

    pub fn total_pixels(&self) -> usize {
        self.width * self.height
    }
}

/// Device space image, row 0 at the top.
pub type Film = Vec2D<Color>;

impl Film {
    pub fn blank(width: usize, height: usize) -> Film {
        Vec2D::new(width, height, Color::BACKGROUND)
    }
}

/// Pixels that map outside the film are clipped.
impl DisplaySink for Film {
    fn draw_pixel(&mut self, pixel: Pixel) {
        let (x, y) = pixel.to_device(self.width, self.height);
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            trace!("clipping pixel {:?} at device ({}, {})", pixel, x, y);
            return;
        }
        self.write_at(x as usize, y as usize, pixel.color);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_film_sink_flips_and_clips() {
        let mut film = Film::blank(4, 4);
        let red = Color::new(255, 0, 0);
        film.draw_pixel(Pixel::new(-2, 1, red));
        assert_eq!(film.at(0, 1), red);
        film.draw_pixel(Pixel::new(1, -1, red));
        assert_eq!(film.at(3, 3), red);

        // bottom screen row maps one past the end
        let before = film.clone();
        film.draw_pixel(Pixel::new(0, -2, red));
        assert_eq!(film, before);
        assert_eq!(film.at(0, 0), Color::BACKGROUND);
    }
}
