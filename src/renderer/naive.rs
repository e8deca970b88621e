use super::prelude::*;

use std::time::Instant;

/// Renders one pixel at a time on the calling thread, handing each to the sink as soon as it is shaded.
/// Pixels are visited column by column, left to right, bottom to top within a column.
#[derive(Default, Copy, Clone, Debug)]
pub struct NaiveRenderer {}

impl NaiveRenderer {
    pub fn new() -> NaiveRenderer {
        NaiveRenderer {}
    }
}

impl Renderer for NaiveRenderer {
    fn render(
        &self,
        world: &World,
        camera: &ViewportCamera,
        sink: &mut dyn DisplaySink,
    ) -> Profile {
        let (width, height) = (camera.screen_width, camera.screen_height);
        info!("starting render with film resolution {}x{}", width, height);
        let now = Instant::now();

        let integrator = PhongIntegrator::new(world);
        let mut profile = Profile::default();
        for x in camera.x_range() {
            for y in camera.y_range() {
                let color = integrator.color(camera.get_ray(x, y), &mut profile);
                sink.draw_pixel(Pixel::new(x, y, color));
            }
        }

        let elapsed = (now.elapsed().as_millis() as f32) / 1000.0;
        info!("took {}s", elapsed);
        profile.pretty_print(elapsed, 1);
        profile
    }
}
