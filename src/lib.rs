#[macro_use]
extern crate tracing;

pub mod camera;
pub mod geometry;
pub mod hittable;
pub mod integrator;
pub mod math;
pub mod parsing;
pub mod prelude;
pub mod profile;
pub mod renderer;
pub mod world;

pub fn rgb_to_u32(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}
