use crate::camera::ViewportCamera;
use crate::math::Point3;
use crate::parsing::config::{RenderSettings, RendererType};
use crate::profile::Profile;
use crate::world::World;

mod naive;
mod parallel;
mod prelude;
#[cfg(feature = "preview")]
mod preview;
mod sink;
mod vec2d;

pub use naive::NaiveRenderer;
pub use parallel::ParallelRenderer;
#[cfg(feature = "preview")]
pub use preview::present_film;
pub use sink::{DisplaySink, Pixel};
pub use vec2d::{Film, Vec2D};

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

pub trait Renderer {
    /// Shades every pixel covered by `camera` and hands each one to `sink`, exactly once.
    fn render(&self, world: &World, camera: &ViewportCamera, sink: &mut dyn DisplaySink)
        -> Profile;
}

pub fn construct_renderer(renderer_type: RendererType, threads: Option<u16>) -> Box<dyn Renderer> {
    match renderer_type {
        RendererType::Naive => {
            if threads.is_some_and(|t| t > 1) {
                warn!("the naive renderer is single threaded, ignoring requested thread count");
            }
            Box::new(NaiveRenderer::new())
        }
        RendererType::Parallel => Box::new(ParallelRenderer::new(threads.map(|t| t as usize))),
    }
}

/// Renders `world` as seen from `camera` through a viewport of `viewport_width` by
/// `viewport_height` world units placed `projection_distance` along +z, one pixel
/// event per screen coordinate, in order, on the calling thread.
#[allow(clippy::too_many_arguments)]
pub fn render_scene(
    camera: Point3,
    world: &World,
    screen_width: usize,
    screen_height: usize,
    viewport_width: f32,
    viewport_height: f32,
    projection_distance: f32,
    sink: &mut dyn DisplaySink,
) -> Profile {
    let camera = ViewportCamera::new(
        camera,
        viewport_width,
        viewport_height,
        projection_distance,
        screen_width,
        screen_height,
    );
    NaiveRenderer::new().render(world, &camera, sink)
}

pub fn render_film(
    renderer: &dyn Renderer,
    world: &World,
    render_settings: &RenderSettings,
) -> (Film, Profile) {
    let camera = render_settings.camera();
    info!("rendering {} pixels", render_settings.total_pixels());
    let mut film = Film::blank(camera.screen_width, camera.screen_height);
    let profile = renderer.render(world, &camera, &mut film);
    (film, profile)
}

/// Writes `film` to `output/<filename>.png`, returning the path written.
pub fn output_film(render_settings: &RenderSettings, film: &Film) -> Result<PathBuf> {
    let filename = render_settings.filename.as_deref().unwrap_or("beauty");
    let directory = PathBuf::from("output");
    fs::create_dir_all(&directory)
        .with_context(|| format!("failed to create {}", directory.to_string_lossy()))?;
    let png_filename = directory.join(format!("{}.png", filename));

    let mut img: image::RgbImage = image::ImageBuffer::new(film.width as u32, film.height as u32);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = image::Rgb(film.at(x as usize, y as usize).to_array());
    }
    info!("saving image to {}", png_filename.to_string_lossy());
    img.save(&png_filename)
        .with_context(|| format!("failed to write {}", png_filename.to_string_lossy()))?;
    Ok(png_filename)
}
